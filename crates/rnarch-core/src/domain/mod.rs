//! Core domain layer.
//!
//! Pure business logic with no I/O: the value objects describing a project's
//! architecture choices, name normalization, and the persisted generator
//! configuration. Filesystem and manifest concerns are handled via ports
//! defined in the application layer.

pub mod config;
pub mod error;
pub mod naming;
pub mod value_objects;

pub use config::GeneratorConfig;
pub use error::{DomainError, ErrorCategory};
pub use naming::FeatureName;
pub use value_objects::{Architecture, Routing, StateManagement};

//! Application layer.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FeatureService,
//!   ArtifactService) and the navigation patcher
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ArtifactService, FeatureService, ScaffoldService};

pub use ports::Filesystem;

pub use error::ApplicationError;

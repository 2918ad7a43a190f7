//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: scaffold the base structure, generate a feature,
//! generate a standalone model or screen.

pub mod artifacts;
pub mod feature_service;
pub mod navigation;
pub mod scaffold_service;

pub use artifacts::ArtifactService;
pub use feature_service::FeatureService;
pub use scaffold_service::ScaffoldService;

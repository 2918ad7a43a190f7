//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `rnarch-adapters` implement these.

pub mod output;

pub use output::Filesystem;

//! Generator configuration recorded at project initialization.

use crate::domain::value_objects::{Architecture, Routing, StateManagement};
use serde::{Deserialize, Serialize};

/// The choices made at `init` time, persisted in the project sidecar so
/// later `feature`/`model`/`screen` runs generate consistent code.
///
/// Field names are serialized in camelCase to match the sidecar JSON
/// written by earlier versions of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub architecture: Architecture,
    pub state_management: StateManagement,
    pub routing: Routing,
    pub localization: bool,
    pub firebase: bool,
    pub tests: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            architecture: Architecture::CleanArchitecture,
            state_management: StateManagement::Redux,
            routing: Routing::ReactNavigation,
            localization: true,
            firebase: false,
            tests: true,
        }
    }
}

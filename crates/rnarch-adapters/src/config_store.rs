//! Sidecar configuration persistence.
//!
//! The generator configuration is stored as pretty-printed JSON in
//! `.rnarch.json` at the project root. A missing sidecar is not an error:
//! it means the project has not been initialised (or the commands are run
//! outside a project), and callers decide what that means for them.

use std::path::{Path, PathBuf};

use tracing::debug;

use rnarch_core::application::ApplicationError;
use rnarch_core::application::ports::Filesystem;
use rnarch_core::domain::GeneratorConfig;
use rnarch_core::error::CoreResult;

/// Sidecar file name, relative to the project root.
pub const CONFIG_FILE: &str = ".rnarch.json";

/// Loads and saves the generator configuration sidecar.
pub struct ConfigStore {
    fs: Box<dyn Filesystem>,
}

impl ConfigStore {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load the configuration. `Ok(None)` when no sidecar exists.
    pub fn load(&self, root: &Path) -> CoreResult<Option<GeneratorConfig>> {
        let path = Self::path(root);
        let Some(contents) = self.fs.read_file(&path)? else {
            debug!(path = %path.display(), "no sidecar config found");
            return Ok(None);
        };

        let config = serde_json::from_str(&contents).map_err(|e| ApplicationError::Serialization {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(config))
    }

    /// Persist the configuration, overwriting any existing sidecar.
    pub fn save(&self, root: &Path, config: &GeneratorConfig) -> CoreResult<()> {
        let path = Self::path(root);
        let contents =
            serde_json::to_string_pretty(config).map_err(|e| ApplicationError::Serialization {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        self.fs.write_file(&path, &format!("{contents}\n"))
    }
}

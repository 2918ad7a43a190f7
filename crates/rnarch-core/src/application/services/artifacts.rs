//! Standalone model and screen generation, outside full feature slices.
//!
//! Both operations work without a persisted configuration: they fall back to
//! Clean Architecture layout, matching what an initialised project would
//! have defaulted to.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::ports::Filesystem;
use crate::application::services::navigation::{self, NavigationEntry};
use crate::domain::{Architecture, FeatureName, GeneratorConfig};
use crate::error::CoreResult;
use crate::templates::{self, feature as tpl};

/// Generates single model/type and screen files.
pub struct ArtifactService {
    fs: Box<dyn Filesystem>,
}

impl ArtifactService {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Generate a model/type file. Returns the path written, relative to
    /// `root`, for display.
    ///
    /// Placement: inside `--feature`'s model directory when given, otherwise
    /// the shared `src/core/models`. The file shape follows the configured
    /// architecture (class with from/toJson for Clean, factory functions for
    /// MVVM, plain interfaces otherwise).
    #[instrument(skip(self, config), fields(model = %name))]
    pub fn generate_model(
        &self,
        root: &Path,
        name: &FeatureName,
        feature: Option<&FeatureName>,
        config: Option<&GeneratorConfig>,
    ) -> CoreResult<PathBuf> {
        let arch = config.map_or(Architecture::CleanArchitecture, |c| c.architecture);

        let template = match arch {
            Architecture::CleanArchitecture => tpl::MODEL_CLEAN,
            Architecture::Mvvm => tpl::MODEL_MVVM,
            Architecture::FeatureBased | Architecture::AtomicDesign => tpl::MODEL_TYPES,
        };

        let file_name = match arch {
            Architecture::FeatureBased | Architecture::AtomicDesign => {
                format!("{}.types.ts", name.camel())
            }
            _ => format!("{}Model.ts", name.pascal()),
        };

        let target_dir = match feature {
            Some(feature) => Path::new("src/features")
                .join(feature.snake())
                .join(arch.model_dir()),
            None => PathBuf::from("src/core/models"),
        };

        let rel_path = target_dir.join(file_name);
        self.fs
            .write_file(&root.join(&rel_path), &templates::render(template, name))?;

        info!(path = %rel_path.display(), "model generated");
        Ok(rel_path)
    }

    /// Generate a screen file and, when the project uses a navigation
    /// registry, register it. Returns the path written, relative to `root`.
    #[instrument(skip(self, config), fields(screen = %name))]
    pub fn generate_screen(
        &self,
        root: &Path,
        name: &FeatureName,
        feature: Option<&FeatureName>,
        config: Option<&GeneratorConfig>,
    ) -> CoreResult<PathBuf> {
        let arch = config.map_or(Architecture::CleanArchitecture, |c| c.architecture);
        let screen_dir = arch.screen_dir();

        let target_dir = match feature {
            Some(feature) => Path::new("src/features")
                .join(feature.snake())
                .join(screen_dir),
            None => Path::new("src").join(screen_dir),
        };

        let rel_path = target_dir.join(format!("{}Screen.tsx", name.pascal()));
        self.fs.write_file(
            &root.join(&rel_path),
            &templates::render(tpl::STYLED_SCREEN, name),
        )?;

        // Registration requires an initialised project with a registry.
        if config.is_some_and(|c| c.routing.has_registry()) {
            let import_path = match feature {
                Some(feature) => format!(
                    "../features/{}/{}/{}Screen",
                    feature.snake(),
                    screen_dir,
                    name.pascal()
                ),
                None => format!("../presentation/screens/{}Screen", name.pascal()),
            };
            let entry = NavigationEntry::standalone_screen(name.pascal(), &import_path);
            navigation::register(self.fs.as_ref(), root, &entry)?;
        }

        info!(path = %rel_path.display(), "screen generated");
        Ok(rel_path)
    }
}

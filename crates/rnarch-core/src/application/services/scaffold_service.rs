//! Base project scaffolding: the directory skeleton and starter files every
//! initialised project gets, before any feature is generated.
//!
//! Generation is additive and non-transactional: a failure part-way leaves
//! the files already written in place. The sidecar config and package
//! manifest are handled by adapters, driven from the CLI.

use std::path::Path;

use tracing::{info, instrument};

use crate::application::ports::Filesystem;
use crate::domain::GeneratorConfig;
use crate::error::CoreResult;
use crate::templates::base;

/// Generates the architecture-independent base structure.
pub struct ScaffoldService {
    fs: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Create the base directories and files under `root`.
    #[instrument(skip(self, config), fields(root = %root.display()))]
    pub fn generate_base_structure(
        &self,
        root: &Path,
        config: &GeneratorConfig,
    ) -> CoreResult<()> {
        let mut dirs: Vec<&str> = vec![
            "src/core/api",
            "src/core/errors",
            "src/core/theme",
            "src/core/utils",
            "src/core/components",
            "src/features",
            "src/navigation",
            "src/state",
            "assets/images",
            "assets/fonts",
        ];

        if config.localization {
            dirs.push("src/i18n/locales");
        }
        if config.tests {
            dirs.push("__tests__/unit");
            dirs.push("__tests__/integration");
        }

        for dir in &dirs {
            self.fs.create_dir_all(&root.join(dir))?;
        }

        let mut files: Vec<(&str, String)> = vec![
            ("src/App.tsx", base::app_entry(config)),
            ("src/core/api/apiClient.ts", base::API_CLIENT.to_string()),
            ("src/core/errors/failures.ts", base::FAILURES.to_string()),
            ("src/core/theme/AppTheme.ts", base::THEME.to_string()),
            (
                "src/core/theme/ThemeContext.tsx",
                base::THEME_CONTEXT.to_string(),
            ),
            (
                "src/core/constants/AppConstants.ts",
                base::CONSTANTS.to_string(),
            ),
            ("src/navigation/AppNavigator.tsx", base::navigator(config)),
            ("src/state/store.ts", base::store(config)),
            (".env.development", base::ENV_DEVELOPMENT.to_string()),
            (".env.production", base::ENV_PRODUCTION.to_string()),
            (".gitignore", base::GITIGNORE.to_string()),
        ];

        if config.localization {
            files.push(("src/i18n/i18n.ts", base::I18N_CONFIG.to_string()));
            files.push(("src/i18n/locales/en.json", base::LOCALE_EN.to_string()));
        }
        if config.tests {
            files.push(("__tests__/unit/sample.test.ts", base::SAMPLE_TEST.to_string()));
        }

        for (path, content) in &files {
            self.fs.write_file(&root.join(path), content)?;
        }

        info!(
            directories = dirs.len(),
            files = files.len(),
            "base structure generated"
        );
        Ok(())
    }
}

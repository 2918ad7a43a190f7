//! Feature generation: one vertical slice of files per architecture variant.
//!
//! The four architectures form a closed set, so generation is a plain
//! enumerated match, one arm per variant. Each arm creates the variant's
//! fixed directory skeleton, writes its starter files, and registers the
//! feature screen in the navigation registry.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::ports::Filesystem;
use crate::application::services::navigation::{self, NavigationEntry};
use crate::domain::{Architecture, FeatureName, GeneratorConfig, StateManagement};
use crate::error::CoreResult;
use crate::templates::{self, feature as tpl};

/// The fixed directory set a feature gets under its root, per architecture.
///
/// For Clean Architecture the last entry depends on the configured state
/// management (`presentation/redux`, `presentation/zustand`,
/// `presentation/context`).
pub fn feature_dirs(architecture: Architecture, state: StateManagement) -> Vec<String> {
    match architecture {
        Architecture::CleanArchitecture => vec![
            "data/datasources".into(),
            "data/models".into(),
            "data/repositories".into(),
            "domain/entities".into(),
            "domain/repositories".into(),
            "domain/usecases".into(),
            "presentation/screens".into(),
            "presentation/components".into(),
            "presentation/hooks".into(),
            format!("presentation/{}", state.dir_name()),
        ],
        Architecture::FeatureBased => vec![
            "components".into(),
            "hooks".into(),
            "screens".into(),
            "services".into(),
            "types".into(),
            "utils".into(),
        ],
        Architecture::AtomicDesign => vec![
            "atoms".into(),
            "molecules".into(),
            "organisms".into(),
            "templates".into(),
            "screens".into(),
            "hooks".into(),
            "services".into(),
            "types".into(),
        ],
        Architecture::Mvvm => vec![
            "models".into(),
            "viewmodels".into(),
            "views/screens".into(),
            "views/components".into(),
            "services".into(),
        ],
    }
}

/// Generates feature modules in the four architecture patterns.
pub struct FeatureService {
    fs: Box<dyn Filesystem>,
}

impl FeatureService {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Generate a feature under `<root>/src/features/<snake>`.
    #[instrument(skip(self, config), fields(feature = %name, architecture = %config.architecture))]
    pub fn generate(
        &self,
        root: &Path,
        name: &FeatureName,
        config: &GeneratorConfig,
    ) -> CoreResult<()> {
        let feature_path = root.join("src").join("features").join(name.snake());

        for dir in feature_dirs(config.architecture, config.state_management) {
            self.fs.create_dir_all(&feature_path.join(dir))?;
        }

        match config.architecture {
            Architecture::CleanArchitecture => self.clean_files(&feature_path, name, config)?,
            Architecture::FeatureBased => self.feature_based_files(&feature_path, name)?,
            Architecture::AtomicDesign => self.atomic_files(&feature_path, name)?,
            Architecture::Mvvm => self.mvvm_files(&feature_path, name)?,
        }

        self.screens(&feature_path, name, config.architecture.screen_dir())?;
        if config.tests {
            self.test_scaffolding(&feature_path, config.architecture)?;
        }
        self.register_in_navigation(root, name, config)?;

        info!("feature generated");
        Ok(())
    }

    // ── Clean Architecture ──

    fn clean_files(
        &self,
        feature_path: &Path,
        name: &FeatureName,
        config: &GeneratorConfig,
    ) -> CoreResult<()> {
        let files: [(PathBuf, &str); 6] = [
            (
                Path::new("domain/entities").join(format!("{}Entity.ts", name.snake())),
                tpl::ENTITY,
            ),
            (
                Path::new("domain/repositories").join(format!("{}Repository.ts", name.pascal())),
                tpl::REPOSITORY,
            ),
            (
                Path::new("domain/usecases").join(format!("Get{}UseCase.ts", name.pascal())),
                tpl::USE_CASE,
            ),
            (
                Path::new("data/models").join(format!("{}Model.ts", name.pascal())),
                tpl::DATA_MODEL,
            ),
            (
                Path::new("data/datasources")
                    .join(format!("{}RemoteDataSource.ts", name.pascal())),
                tpl::REMOTE_DATA_SOURCE,
            ),
            (
                Path::new("data/repositories")
                    .join(format!("{}RepositoryImpl.ts", name.pascal())),
                tpl::REPOSITORY_IMPL,
            ),
        ];

        for (rel, template) in files {
            self.fs
                .write_file(&feature_path.join(rel), &templates::render(template, name))?;
        }

        self.state_module(feature_path, name, config)
    }

    /// Per-feature state module under `presentation/<state>`.
    ///
    /// Known gap carried over from earlier releases: the Context variant
    /// creates its directory but emits no file. Kept as-is pending a
    /// product decision on what a per-feature context module should hold.
    fn state_module(
        &self,
        feature_path: &Path,
        name: &FeatureName,
        config: &GeneratorConfig,
    ) -> CoreResult<()> {
        let dir = feature_path
            .join("presentation")
            .join(config.state_management.dir_name());

        match config.state_management {
            StateManagement::Redux => self.fs.write_file(
                &dir.join(format!("{}Slice.ts", name.camel())),
                &templates::render(tpl::REDUX_SLICE, name),
            ),
            StateManagement::Zustand => self.fs.write_file(
                &dir.join(format!("use{}Store.ts", name.pascal())),
                &templates::render(tpl::ZUSTAND_STORE, name),
            ),
            StateManagement::Context => Ok(()),
        }
    }

    // ── Feature-Based ──

    fn feature_based_files(&self, feature_path: &Path, name: &FeatureName) -> CoreResult<()> {
        self.fs.write_file(
            &feature_path
                .join("types")
                .join(format!("{}.types.ts", name.camel())),
            &templates::render(tpl::TYPES, name),
        )?;
        self.fs.write_file(
            &feature_path
                .join("services")
                .join(format!("{}.service.ts", name.camel())),
            &templates::render(tpl::SERVICE, name),
        )?;
        self.fs.write_file(
            &feature_path
                .join("hooks")
                .join(format!("use{}.ts", name.pascal())),
            &templates::render(tpl::HOOK, name),
        )
    }

    // ── Atomic Design ──

    fn atomic_files(&self, feature_path: &Path, name: &FeatureName) -> CoreResult<()> {
        self.fs.write_file(
            &feature_path
                .join("atoms")
                .join(format!("{}Button.tsx", name.pascal())),
            &templates::render(tpl::ATOM_BUTTON, name),
        )?;
        self.fs.write_file(
            &feature_path
                .join("molecules")
                .join(format!("{}FormField.tsx", name.pascal())),
            &templates::render(tpl::MOLECULE_FORM_FIELD, name),
        )
    }

    // ── MVVM ──

    fn mvvm_files(&self, feature_path: &Path, name: &FeatureName) -> CoreResult<()> {
        self.fs.write_file(
            &feature_path
                .join("viewmodels")
                .join(format!("use{}ViewModel.ts", name.pascal())),
            &templates::render(tpl::VIEW_MODEL, name),
        )
    }

    // ── Shared ──

    fn screens(
        &self,
        feature_path: &Path,
        name: &FeatureName,
        screen_dir: &str,
    ) -> CoreResult<()> {
        let dir = feature_path.join(screen_dir);
        if name.is_auth() {
            let login = tpl::LOGIN_SCREEN;
            self.fs.write_file(&dir.join("LoginScreen.tsx"), login)?;
            self.fs
                .write_file(&dir.join("RegisterScreen.tsx"), &login.replace("Login", "Register"))
        } else {
            self.fs.write_file(
                &dir.join(format!("{}Screen.tsx", name.pascal())),
                &templates::render(tpl::DEFAULT_SCREEN, name),
            )
        }
    }

    /// Per-architecture test scaffolding, run when `config.tests` is set.
    ///
    /// Every arm is currently a no-op: the per-variant test layouts are not
    /// settled yet, so the flag routes here and nothing is emitted.
    fn test_scaffolding(&self, feature_path: &Path, architecture: Architecture) -> CoreResult<()> {
        debug!(path = %feature_path.display(), "test scaffolding pending");
        match architecture {
            Architecture::CleanArchitecture => Ok(()),
            Architecture::FeatureBased => Ok(()),
            Architecture::AtomicDesign => Ok(()),
            Architecture::Mvvm => Ok(()),
        }
    }

    fn register_in_navigation(
        &self,
        root: &Path,
        name: &FeatureName,
        config: &GeneratorConfig,
    ) -> CoreResult<()> {
        if !config.routing.has_registry() {
            return Ok(());
        }

        let screen_dir = config.architecture.screen_dir();
        let entry = if name.is_auth() {
            NavigationEntry::auth_screens(screen_dir)
        } else {
            NavigationEntry::feature_screen(name, screen_dir)
        };
        navigation::register(self.fs.as_ref(), root, &entry)
    }
}

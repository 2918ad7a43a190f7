//! Package manifest (package.json) dependency merging.
//!
//! Initialisation injects the dependencies the generated code imports into
//! the project's `package.json`. The merge is additive only: a version the
//! user has already pinned is never overwritten. A missing manifest is a
//! silent no-op, since the generator may run before `react-native init` has
//! produced one.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tracing::debug;

use rnarch_core::application::ApplicationError;
use rnarch_core::application::ports::Filesystem;
use rnarch_core::domain::{GeneratorConfig, Routing, StateManagement};
use rnarch_core::error::CoreResult;

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Runtime dependencies implied by a configuration, as (name, version) pairs.
pub fn dependencies(config: &GeneratorConfig) -> Vec<(&'static str, &'static str)> {
    let mut deps = vec![("axios", "^1.13.5"), ("react-native-config", "^1.6.1")];

    match config.state_management {
        StateManagement::Redux => {
            deps.push(("@reduxjs/toolkit", "^2.11.2"));
            deps.push(("react-redux", "^9.2.0"));
        }
        StateManagement::Zustand => deps.push(("zustand", "^5.0.11")),
        // React Context is built-in, no dep needed
        StateManagement::Context => {}
    }

    match config.routing {
        Routing::ReactNavigation => {
            deps.push(("@react-navigation/native", "^7.1.28"));
            deps.push(("@react-navigation/native-stack", "^7.13.0"));
            deps.push(("react-native-screens", "^4.23.0"));
            deps.push(("react-native-safe-area-context", "^5.6.2"));
        }
        Routing::ExpoRouter => deps.push(("expo-router", "^6.0.23")),
    }

    if config.firebase {
        deps.push(("@react-native-firebase/app", "^23.8.6"));
    }

    if config.localization {
        deps.push(("i18next", "^25.8.13"));
        deps.push(("react-i18next", "^16.5.4"));
    }

    deps
}

/// Development dependencies implied by a configuration.
pub fn dev_dependencies(config: &GeneratorConfig) -> Vec<(&'static str, &'static str)> {
    let mut deps = vec![("@types/react", "^19.2.14"), ("typescript", "^5.9.3")];

    if config.tests {
        deps.push(("jest", "^30.2.0"));
        deps.push(("@testing-library/react-native", "^13.3.3"));
    }

    // react-redux v9+ ships its own types, no @types/react-redux
    deps
}

/// Merges generator-derived dependencies into `package.json`.
pub struct ManifestEditor {
    fs: Box<dyn Filesystem>,
}

impl ManifestEditor {
    pub fn new(fs: Box<dyn Filesystem>) -> Self {
        Self { fs }
    }

    fn path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Merge the dependencies for `config` into the project manifest.
    /// No-op if the manifest does not exist.
    pub fn add_dependencies(&self, root: &Path, config: &GeneratorConfig) -> CoreResult<()> {
        let path = Self::path(root);
        let Some(contents) = self.fs.read_file(&path)? else {
            debug!(path = %path.display(), "no package manifest found, skipping");
            return Ok(());
        };

        let mut manifest: Value =
            serde_json::from_str(&contents).map_err(|e| ApplicationError::Serialization {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let Some(obj) = manifest.as_object_mut() else {
            return Err(ApplicationError::Serialization {
                path,
                reason: "manifest root is not a JSON object".into(),
            }
            .into());
        };

        merge_into(obj, "dependencies", &dependencies(config));
        merge_into(obj, "devDependencies", &dev_dependencies(config));

        let serialized =
            serde_json::to_string_pretty(&manifest).map_err(|e| ApplicationError::Serialization {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        self.fs.write_file(&path, &format!("{serialized}\n"))
    }
}

/// Insert each entry into `obj[key]` unless the user already set it.
fn merge_into(obj: &mut Map<String, Value>, key: &str, entries: &[(&str, &str)]) {
    let table = obj
        .entry(key.to_string())
        .or_insert_with(|| json!({}));

    let Some(table) = table.as_object_mut() else {
        return;
    };

    for (name, version) in entries {
        if !table.contains_key(*name) {
            table.insert((*name).to_string(), json!(version));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use rnarch_core::domain::Architecture;

    fn config(state: StateManagement, routing: Routing) -> GeneratorConfig {
        GeneratorConfig {
            architecture: Architecture::CleanArchitecture,
            state_management: state,
            routing,
            localization: false,
            firebase: false,
            tests: false,
        }
    }

    fn manifest_after(seed: &str, config: &GeneratorConfig) -> Value {
        let fs = MemoryFilesystem::new();
        fs.seed_file("/p/package.json", seed);
        let editor = ManifestEditor::new(Box::new(fs.clone()));
        editor.add_dependencies(Path::new("/p"), config).unwrap();
        let raw = fs.read_file(Path::new("/p/package.json")).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn adds_common_and_routing_dependencies() {
        let out = manifest_after(
            r#"{"name": "app"}"#,
            &config(StateManagement::Context, Routing::ReactNavigation),
        );
        assert_eq!(out["dependencies"]["axios"], "^1.13.5");
        assert_eq!(out["dependencies"]["@react-navigation/native"], "^7.1.28");
        assert_eq!(out["devDependencies"]["typescript"], "^5.9.3");
        // Context needs no state-management package
        assert!(out["dependencies"].get("@reduxjs/toolkit").is_none());
    }

    #[test]
    fn never_overwrites_user_pinned_versions() {
        let out = manifest_after(
            r#"{"dependencies": {"axios": "1.0.0"}}"#,
            &config(StateManagement::Redux, Routing::ReactNavigation),
        );
        assert_eq!(out["dependencies"]["axios"], "1.0.0");
        assert_eq!(out["dependencies"]["react-redux"], "^9.2.0");
    }

    #[test]
    fn expo_router_swaps_navigation_stack() {
        let out = manifest_after(
            r#"{}"#,
            &config(StateManagement::Zustand, Routing::ExpoRouter),
        );
        assert_eq!(out["dependencies"]["expo-router"], "^6.0.23");
        assert_eq!(out["dependencies"]["zustand"], "^5.0.11");
        assert!(out["dependencies"].get("@react-navigation/native").is_none());
    }

    #[test]
    fn tests_flag_adds_jest_stack() {
        let mut cfg = config(StateManagement::Context, Routing::ReactNavigation);
        cfg.tests = true;
        let out = manifest_after(r#"{}"#, &cfg);
        assert_eq!(out["devDependencies"]["jest"], "^30.2.0");
        assert_eq!(
            out["devDependencies"]["@testing-library/react-native"],
            "^13.3.3"
        );
    }

    #[test]
    fn firebase_and_localization_flags_add_their_packages() {
        let mut cfg = config(StateManagement::Context, Routing::ReactNavigation);
        cfg.firebase = true;
        cfg.localization = true;
        let out = manifest_after(r#"{}"#, &cfg);
        assert_eq!(out["dependencies"]["@react-native-firebase/app"], "^23.8.6");
        assert_eq!(out["dependencies"]["i18next"], "^25.8.13");
        assert_eq!(out["dependencies"]["react-i18next"], "^16.5.4");
    }

    #[test]
    fn missing_manifest_is_a_silent_noop() {
        let fs = MemoryFilesystem::new();
        let editor = ManifestEditor::new(Box::new(fs.clone()));
        editor
            .add_dependencies(
                Path::new("/p"),
                &config(StateManagement::Redux, Routing::ReactNavigation),
            )
            .unwrap();
        assert!(fs.read_file(Path::new("/p/package.json")).unwrap().is_none());
    }
}

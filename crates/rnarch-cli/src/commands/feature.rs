//! Implementation of the `rnarch feature` command.

use tracing::{debug, info, instrument};

use rnarch_adapters::{ConfigStore, LocalFilesystem};
use rnarch_core::{
    application::FeatureService, application::services::feature_service::feature_dirs,
    domain::FeatureName,
};

use crate::{
    cli::{FeatureArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `rnarch feature` command.
///
/// Requires an initialised project: the sidecar decides which architecture's
/// file set to generate, so without it there is nothing sensible to do.
#[instrument(skip_all, fields(feature = %args.name))]
pub fn execute(args: FeatureArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    validate_name(&args.name)?;
    let root = global.project_root.as_path();

    let store = ConfigStore::new(Box::new(LocalFilesystem::new()));
    let Some(config) = store.load(root)? else {
        return Err(CliError::NotInitialized { root: root.into() });
    };

    let name = FeatureName::new(&args.name);
    debug!(
        snake = name.snake(),
        pascal = name.pascal(),
        architecture = %config.architecture,
        "Feature name resolved"
    );

    let spinner = super::spinner(output, format!("Generating feature '{}'...", name.snake()));
    let service = FeatureService::new(Box::new(LocalFilesystem::new()));
    service.generate(root, &name, &config)?;
    spinner.finish_and_clear();

    info!(feature = name.snake(), "Feature generated");
    output.success(&format!("Feature '{}' generated", name.snake()))?;

    if !global.quiet {
        output.print("")?;
        output.print(&format!("  src/features/{}/", name.snake()))?;
        for dir in feature_dirs(config.architecture, config.state_management) {
            output.print(&format!("    {dir}/"))?;
        }
        if name.is_auth() {
            output.info("Auth scaffold includes Login and Register screens")?;
        }
        if config.routing.has_registry() {
            output.info("Navigation updated: src/navigation/AppNavigator.tsx")?;
        }
    }

    Ok(())
}

fn validate_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "feature name cannot be empty".into(),
            source: None,
        });
    }
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidInput {
            message: format!("feature name '{name}' has no usable characters"),
            source: None,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            validate_name(""),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn separator_only_name_is_invalid() {
        assert!(validate_name("--__").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["orders", "user-profile", "UserProfile", "auth", "v2"] {
            assert!(validate_name(name).is_ok(), "failed for: {name}");
        }
    }
}

//! Implementation of the `rnarch screen` command.

use tracing::{info, instrument};

use rnarch_adapters::{ConfigStore, LocalFilesystem};
use rnarch_core::{application::ArtifactService, domain::FeatureName};

use crate::{
    cli::{GlobalArgs, ScreenArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `rnarch screen` command.
///
/// Works without an initialised project, but navigation registration only
/// happens when a sidecar with a registry-based routing choice is present.
#[instrument(skip_all, fields(screen = %args.name))]
pub fn execute(args: ScreenArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    validate_name(&args.name)?;
    let root = global.project_root.as_path();

    let store = ConfigStore::new(Box::new(LocalFilesystem::new()));
    let config = store.load(root)?;

    let name = FeatureName::new(&args.name);
    let feature = args.feature.as_deref().map(FeatureName::new);
    let registers = config.is_some_and(|c| c.routing.has_registry());

    let service = ArtifactService::new(Box::new(LocalFilesystem::new()));
    let path = service.generate_screen(root, &name, feature.as_ref(), config.as_ref())?;

    info!(path = %path.display(), "Screen generated");
    output.success(&format!("Screen created: {}", path.display()))?;
    if registers && !global.quiet {
        output.info("Navigation updated: src/navigation/AppNavigator.tsx")?;
    }
    Ok(())
}

fn validate_name(name: &str) -> CliResult<()> {
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidInput {
            message: format!("screen name '{name}' has no usable characters"),
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
        assert!(validate_name("").is_err());
    }

    #[test]
    fn valid_names_pass() {
        for name in &["Settings", "order-details", "Profile"] {
            assert!(validate_name(name).is_ok(), "failed for: {name}");
        }
    }
}

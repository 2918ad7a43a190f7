//! Implementation of the `rnarch model` command.

use tracing::{info, instrument};

use rnarch_adapters::{ConfigStore, LocalFilesystem};
use rnarch_core::{application::ArtifactService, domain::FeatureName};

use crate::{
    cli::{GlobalArgs, ModelArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `rnarch model` command.
///
/// Works without an initialised project: the file shape then falls back to
/// the Clean Architecture model class.
#[instrument(skip_all, fields(model = %args.name))]
pub fn execute(args: ModelArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    validate_name(&args.name)?;
    let root = global.project_root.as_path();

    let store = ConfigStore::new(Box::new(LocalFilesystem::new()));
    let config = store.load(root)?;

    let name = FeatureName::new(&args.name);
    let feature = args.feature.as_deref().map(FeatureName::new);

    let service = ArtifactService::new(Box::new(LocalFilesystem::new()));
    let path = service.generate_model(root, &name, feature.as_ref(), config.as_ref())?;

    info!(path = %path.display(), "Model generated");
    output.success(&format!("Model created: {}", path.display()))?;
    Ok(())
}

fn validate_name(name: &str) -> CliResult<()> {
    if !name.chars().any(|c| c.is_ascii_alphanumeric()) {
        return Err(CliError::InvalidInput {
            message: format!("model name '{name}' has no usable characters"),
            source: None,
        });
    }
    Ok(())
}

//! Implementation of the `rnarch init` command.
//!
//! Responsibility: resolve a `GeneratorConfig` from flags (or interactive
//! prompts), then drive the core scaffold service and adapters. No business
//! logic lives here.

use tracing::{info, instrument};

use rnarch_adapters::{ConfigStore, LocalFilesystem, ManifestEditor};
use rnarch_core::{
    application::{FeatureService, ScaffoldService},
    domain::{
        Architecture as CoreArchitecture, FeatureName, GeneratorConfig, Routing as CoreRouting,
        StateManagement as CoreState,
    },
};

use crate::{
    cli::{Architecture, GlobalArgs, InitArgs, Routing, StateManagement},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `rnarch init` command.
///
/// Dispatch sequence:
/// 1. Resolve the full `GeneratorConfig` (flags, prompts, or defaults)
/// 2. Show the chosen configuration
/// 3. Scaffold the base structure
/// 4. Persist the sidecar and merge `package.json` dependencies
/// 5. Generate the starter `auth` feature
/// 6. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: InitArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let root = global.project_root.as_path();
    let config = resolve_config(&args)?;

    if !global.quiet {
        show_configuration(&config, output)?;
    }

    let spinner = super::spinner(output, "Generating base structure...");
    info!(root = %root.display(), architecture = %config.architecture, "Init started");

    let scaffold = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    scaffold.generate_base_structure(root, &config)?;

    spinner.set_message("Writing configuration...");
    ConfigStore::new(Box::new(LocalFilesystem::new())).save(root, &config)?;
    ManifestEditor::new(Box::new(LocalFilesystem::new())).add_dependencies(root, &config)?;

    spinner.set_message("Generating auth feature...");
    let features = FeatureService::new(Box::new(LocalFilesystem::new()));
    features.generate(root, &FeatureName::new("auth"), &config)?;

    spinner.finish_and_clear();
    info!("Init completed");

    output
        .success(&format!(
            "Project initialised with {}",
            config.architecture.label()
        ))
        .with_cli_context(|| "writing to stdout")?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print("  npm install          # pull the new dependencies")?;
        output.print("  npx react-native run-ios   (or run-android)")?;
        output.print("  rnarch feature <name>      # generate your first feature")?;
    }

    Ok(())
}

// ── Config resolution ─────────────────────────────────────────────────────────

/// Resolve the generator configuration from CLI flags.
///
/// A fully bare `rnarch init` (no selects given, no `--yes`) walks through
/// interactive prompts; otherwise missing selects fall back to defaults.
fn resolve_config(args: &InitArgs) -> CliResult<GeneratorConfig> {
    let defaults = GeneratorConfig::default();
    let fully_interactive = args.architecture.is_none()
        && args.state_management.is_none()
        && args.routing.is_none()
        && !args.yes;

    if fully_interactive {
        return prompt_config(args);
    }

    Ok(GeneratorConfig {
        architecture: args
            .architecture
            .map_or(defaults.architecture, convert_architecture),
        state_management: args
            .state_management
            .map_or(defaults.state_management, convert_state),
        routing: args.routing.map_or(defaults.routing, convert_routing),
        localization: !args.no_localization,
        firebase: args.firebase,
        tests: !args.no_tests,
    })
}

/// Walk through all six choices interactively.
#[cfg(feature = "interactive")]
fn prompt_config(args: &InitArgs) -> CliResult<GeneratorConfig> {
    let architecture = prompt_select(
        "Architecture pattern",
        &CoreArchitecture::ALL,
        CoreArchitecture::ALL.map(|a| a.label()),
    )?;
    let state_management = prompt_select(
        "State management",
        &CoreState::ALL,
        ["Redux Toolkit", "Zustand", "React Context API"],
    )?;
    let routing = prompt_select(
        "Routing",
        &CoreRouting::ALL,
        ["React Navigation (stack)", "Expo Router (file-based)"],
    )?;

    Ok(GeneratorConfig {
        architecture,
        state_management,
        routing,
        localization: prompt_confirm("Include i18n localization?", !args.no_localization)?,
        firebase: prompt_confirm("Include Firebase setup?", args.firebase)?,
        tests: prompt_confirm("Include test scaffolding?", !args.no_tests)?,
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_config(_args: &InitArgs) -> CliResult<GeneratorConfig> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn prompt_select<T: Copy, const N: usize>(
    prompt: &str,
    choices: &[T; N],
    labels: [&str; N],
) -> CliResult<T> {
    use dialoguer::{Select, theme::ColorfulTheme};

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(choices[index])
}

#[cfg(feature = "interactive")]
fn prompt_confirm(prompt: &str, default: bool) -> CliResult<bool> {
    use dialoguer::{Confirm, theme::ColorfulTheme};

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(prompt_error)
}

/// Ctrl-C during a prompt surfaces as an interrupted read; everything else
/// is a real input failure (no TTY, closed stdin, ...).
#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    match &err {
        dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        _ => CliError::InvalidInput {
            message: format!("prompt failed: {err}"),
            source: Some(Box::new(err)),
        },
    }
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_architecture(arch: Architecture) -> CoreArchitecture {
    match arch {
        Architecture::Clean => CoreArchitecture::CleanArchitecture,
        Architecture::Feature => CoreArchitecture::FeatureBased,
        Architecture::Atomic => CoreArchitecture::AtomicDesign,
        Architecture::Mvvm => CoreArchitecture::Mvvm,
    }
}

fn convert_state(state: StateManagement) -> CoreState {
    match state {
        StateManagement::Redux => CoreState::Redux,
        StateManagement::Zustand => CoreState::Zustand,
        StateManagement::Context => CoreState::Context,
    }
}

fn convert_routing(routing: Routing) -> CoreRouting {
    match routing {
        Routing::ReactNavigation => CoreRouting::ReactNavigation,
        Routing::ExpoRouter => CoreRouting::ExpoRouter,
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(config: &GeneratorConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Architecture: {}", config.architecture.label()))?;
    out.print(&format!("  State:        {}", config.state_management))?;
    out.print(&format!("  Routing:      {}", config.routing))?;
    out.print(&format!("  Localization: {}", config.localization))?;
    out.print(&format!("  Firebase:     {}", config.firebase))?;
    out.print(&format!("  Tests:        {}", config.tests))?;
    out.print("")?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

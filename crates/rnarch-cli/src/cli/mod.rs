//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "rnarch",
    bin_name = "rnarch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} React Native architecture scaffolding",
    long_about = "rnarch scaffolds React Native projects with a consistent \
                  architecture pattern and generates features, models and \
                  screens that follow it.",
    after_help = "EXAMPLES:\n\
        \x20 rnarch init --arch clean --state redux --routing react-navigation\n\
        \x20 rnarch feature orders\n\
        \x20 rnarch model Invoice --feature billing\n\
        \x20 rnarch screen Settings\n\
        \x20 rnarch completions bash > /usr/share/bash-completion/completions/rnarch",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise the project architecture.
    #[command(
        visible_alias = "i",
        about = "Initialise project architecture",
        after_help = "EXAMPLES:\n\
            \x20 rnarch init                      # interactive prompts\n\
            \x20 rnarch init --arch clean --state redux --routing react-navigation\n\
            \x20 rnarch init --arch mvvm --no-localization --firebase"
    )]
    Init(InitArgs),

    /// Generate a feature module.
    #[command(
        visible_alias = "f",
        about = "Generate a feature module",
        after_help = "EXAMPLES:\n\
            \x20 rnarch feature orders\n\
            \x20 rnarch feature user-profile\n\
            \x20 rnarch feature auth   # full login/register scaffold"
    )]
    Feature(FeatureArgs),

    /// Generate a model.
    #[command(
        visible_alias = "m",
        about = "Generate a model",
        after_help = "EXAMPLES:\n\
            \x20 rnarch model Invoice --feature billing\n\
            \x20 rnarch model AppSettings   # shared model in src/core/models"
    )]
    Model(ModelArgs),

    /// Generate a screen.
    #[command(
        visible_alias = "s",
        about = "Generate a screen",
        after_help = "EXAMPLES:\n\
            \x20 rnarch screen Checkout --feature orders\n\
            \x20 rnarch screen Settings   # standalone screen"
    )]
    Screen(ScreenArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 rnarch completions bash > ~/.local/share/bash-completion/completions/rnarch\n\
            \x20 rnarch completions zsh  > ~/.zfunc/_rnarch\n\
            \x20 rnarch completions fish > ~/.config/fish/completions/rnarch.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `rnarch init`.
///
/// Any of `--arch`, `--state` and `--routing` left unset is resolved with an
/// interactive prompt; `--yes` accepts the defaults instead.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Architecture pattern.
    #[arg(
        short = 'a',
        long = "arch",
        value_name = "ARCH",
        value_enum,
        help = "Architecture pattern"
    )]
    pub architecture: Option<Architecture>,

    /// State management library.
    #[arg(
        short = 's',
        long = "state",
        value_name = "STATE",
        value_enum,
        help = "State management library"
    )]
    pub state_management: Option<StateManagement>,

    /// Routing solution.
    #[arg(
        short = 'r',
        long = "routing",
        value_name = "ROUTING",
        value_enum,
        help = "Routing solution"
    )]
    pub routing: Option<Routing>,

    /// Skip i18n setup (enabled by default).
    #[arg(long = "no-localization", help = "Skip i18n setup")]
    pub no_localization: bool,

    /// Include Firebase setup (disabled by default).
    #[arg(long = "firebase", help = "Include Firebase setup")]
    pub firebase: bool,

    /// Skip test scaffolding (enabled by default).
    #[arg(long = "no-tests", help = "Skip test scaffolding")]
    pub no_tests: bool,

    /// Accept defaults for anything not given on the command line.
    #[arg(short = 'y', long = "yes", help = "Accept defaults, never prompt")]
    pub yes: bool,
}

// ── feature ───────────────────────────────────────────────────────────────────

/// Arguments for `rnarch feature`.
#[derive(Debug, Args)]
pub struct FeatureArgs {
    /// Feature name.  Normalised internally, so `user-profile`,
    /// `user_profile` and `UserProfile` all produce the same feature.
    #[arg(value_name = "NAME", help = "Feature name")]
    pub name: String,
}

// ── model ─────────────────────────────────────────────────────────────────────

/// Arguments for `rnarch model`.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Model name.
    #[arg(value_name = "NAME", help = "Model name")]
    pub name: String,

    /// Place the model inside an existing feature instead of `src/core/models`.
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "FEATURE",
        help = "Target feature"
    )]
    pub feature: Option<String>,
}

// ── screen ────────────────────────────────────────────────────────────────────

/// Arguments for `rnarch screen`.
#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Screen name.
    #[arg(value_name = "NAME", help = "Screen name")]
    pub name: String,

    /// Place the screen inside an existing feature.
    #[arg(
        short = 'f',
        long = "feature",
        value_name = "FEATURE",
        help = "Target feature"
    )]
    pub feature: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `rnarch completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported architecture patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Architecture {
    Clean,
    /// Also accepted as `feature-based`.
    #[value(name = "feature", alias = "feature-based")]
    Feature,
    /// Also accepted as `atomic-design`.
    #[value(name = "atomic", alias = "atomic-design")]
    Atomic,
    Mvvm,
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Feature => write!(f, "feature"),
            Self::Atomic => write!(f, "atomic"),
            Self::Mvvm => write!(f, "mvvm"),
        }
    }
}

/// Supported state management libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StateManagement {
    Redux,
    Zustand,
    Context,
}

impl std::fmt::Display for StateManagement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Redux => write!(f, "redux"),
            Self::Zustand => write!(f, "zustand"),
            Self::Context => write!(f, "context"),
        }
    }
}

/// Supported routing solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Routing {
    ReactNavigation,
    ExpoRouter,
}

impl std::fmt::Display for Routing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReactNavigation => write!(f, "react-navigation"),
            Self::ExpoRouter => write!(f, "expo-router"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn verify_cli_structure() {
        // clap's internal consistency check — catches conflicts, missing values, etc.
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn architecture_display() {
        assert_eq!(Architecture::Clean.to_string(), "clean");
        assert_eq!(Architecture::Feature.to_string(), "feature");
        assert_eq!(Architecture::Atomic.to_string(), "atomic");
        assert_eq!(Architecture::Mvvm.to_string(), "mvvm");
    }

    #[test]
    fn state_management_display() {
        assert_eq!(StateManagement::Redux.to_string(), "redux");
        assert_eq!(StateManagement::Zustand.to_string(), "zustand");
        assert_eq!(StateManagement::Context.to_string(), "context");
    }

    #[test]
    fn parse_init_command() {
        let cli = Cli::parse_from([
            "rnarch",
            "init",
            "--arch",
            "clean",
            "--state",
            "redux",
            "--routing",
            "react-navigation",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.architecture, Some(Architecture::Clean));
        assert_eq!(args.state_management, Some(StateManagement::Redux));
        assert_eq!(args.routing, Some(Routing::ReactNavigation));
        assert!(!args.firebase);
        assert!(!args.no_localization);
    }

    #[test]
    fn architecture_aliases() {
        let cli = Cli::parse_from(["rnarch", "init", "-a", "feature-based", "-y"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.architecture, Some(Architecture::Feature));
        } else {
            panic!("expected Init command");
        }

        let cli = Cli::parse_from(["rnarch", "init", "-a", "atomic-design", "-y"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.architecture, Some(Architecture::Atomic));
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn parse_feature_command() {
        let cli = Cli::parse_from(["rnarch", "feature", "user-profile"]);
        let Commands::Feature(args) = cli.command else {
            panic!("expected Feature command");
        };
        assert_eq!(args.name, "user-profile");
    }

    #[test]
    fn parse_model_with_feature_flag() {
        let cli = Cli::parse_from(["rnarch", "model", "Invoice", "--feature", "billing"]);
        let Commands::Model(args) = cli.command else {
            panic!("expected Model command");
        };
        assert_eq!(args.name, "Invoice");
        assert_eq!(args.feature.as_deref(), Some("billing"));
    }

    #[test]
    fn parse_screen_without_feature() {
        let cli = Cli::parse_from(["rnarch", "screen", "Settings"]);
        let Commands::Screen(args) = cli.command else {
            panic!("expected Screen command");
        };
        assert_eq!(args.name, "Settings");
        assert!(args.feature.is_none());
    }

    #[test]
    fn project_root_flag_is_global() {
        let cli = Cli::parse_from(["rnarch", "feature", "orders", "-C", "/tmp/app"]);
        assert_eq!(cli.global.project_root, std::path::PathBuf::from("/tmp/app"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["rnarch", "--quiet", "--verbose", "feature", "x"]);
        assert!(result.is_err());
    }
}

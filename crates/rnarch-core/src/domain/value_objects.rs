//! Domain value objects: Architecture, StateManagement, Routing.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! The serde representations are load-bearing: they must match the JSON
//! sidecar written by earlier versions of the generator verbatim
//! (`cleanArchitecture`, `redux`, `reactNavigation`, ...), so a project
//! initialised before an upgrade keeps working.
//!
//! Layout knowledge that is intrinsic to an architecture (where screens and
//! models live inside a feature) is defined here; the per-feature directory
//! sets live with the dispatcher in `feature_service`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Architecture ─────────────────────────────────────────────────────────────

/// One of the four supported project-layout patterns.
///
/// This is a closed set: the generator is an enumerated-variant dispatch,
/// not a plugin system. Adding a fifth pattern means adding a variant and a
/// match arm in the dispatcher, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Architecture {
    /// Domain → Data → Presentation layering.
    CleanArchitecture,
    /// Lightweight flat structure, one folder per concern.
    FeatureBased,
    /// Atoms → Molecules → Organisms component taxonomy.
    AtomicDesign,
    /// Model → ViewModel → View with hooks.
    Mvvm,
}

impl Architecture {
    pub const ALL: [Self; 4] = [
        Self::CleanArchitecture,
        Self::FeatureBased,
        Self::AtomicDesign,
        Self::Mvvm,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CleanArchitecture => "cleanArchitecture",
            Self::FeatureBased => "featureBased",
            Self::AtomicDesign => "atomicDesign",
            Self::Mvvm => "mvvm",
        }
    }

    /// Friendly display name for prompts and summaries.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CleanArchitecture => "Clean Architecture (Domain → Data → Presentation)",
            Self::FeatureBased => "Feature-Based (Lightweight, flat structure)",
            Self::AtomicDesign => "Atomic Design + Feature (Atoms → Molecules → Organisms)",
            Self::Mvvm => "MVVM with Hooks (Model → ViewModel → View)",
        }
    }

    /// Directory holding screens inside a feature, relative to the feature
    /// root. Screens live at different depths per architecture.
    pub const fn screen_dir(&self) -> &'static str {
        match self {
            Self::CleanArchitecture => "presentation/screens",
            Self::Mvvm => "views/screens",
            Self::FeatureBased | Self::AtomicDesign => "screens",
        }
    }

    /// Directory holding models/types inside a feature.
    pub const fn model_dir(&self) -> &'static str {
        match self {
            Self::CleanArchitecture => "data/models",
            Self::Mvvm => "models",
            Self::FeatureBased | Self::AtomicDesign => "types",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clean" | "cleanarchitecture" | "clean-architecture" => Ok(Self::CleanArchitecture),
            "feature" | "featurebased" | "feature-based" => Ok(Self::FeatureBased),
            "atomic" | "atomicdesign" | "atomic-design" => Ok(Self::AtomicDesign),
            "mvvm" => Ok(Self::Mvvm),
            other => Err(DomainError::UnknownVariant {
                field: "architecture",
                value: other.to_string(),
            }),
        }
    }
}

// ── StateManagement ───────────────────────────────────────────────────────────

/// How generated features manage shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    Redux,
    Zustand,
    Context,
}

impl StateManagement {
    pub const ALL: [Self; 3] = [Self::Redux, Self::Zustand, Self::Context];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Redux => "redux",
            Self::Zustand => "zustand",
            Self::Context => "context",
        }
    }

    /// Name of the per-feature state directory under `presentation/`.
    /// Matches the serialized name by construction.
    pub const fn dir_name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for StateManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateManagement {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redux" => Ok(Self::Redux),
            "zustand" => Ok(Self::Zustand),
            "context" => Ok(Self::Context),
            other => Err(DomainError::UnknownVariant {
                field: "stateManagement",
                value: other.to_string(),
            }),
        }
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

/// Navigation strategy for the generated app.
///
/// Expo Router is file-based: there is no central registry file, so all
/// navigation-registration operations are no-ops under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Routing {
    ReactNavigation,
    ExpoRouter,
}

impl Routing {
    pub const ALL: [Self; 2] = [Self::ReactNavigation, Self::ExpoRouter];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReactNavigation => "reactNavigation",
            Self::ExpoRouter => "expoRouter",
        }
    }

    /// Whether screens are registered in a central navigator file.
    pub const fn has_registry(&self) -> bool {
        matches!(self, Self::ReactNavigation)
    }
}

impl fmt::Display for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Routing {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "react-navigation" | "reactnavigation" | "stack" => Ok(Self::ReactNavigation),
            "expo-router" | "exporouter" | "expo" => Ok(Self::ExpoRouter),
            other => Err(DomainError::UnknownVariant {
                field: "routing",
                value: other.to_string(),
            }),
        }
    }
}

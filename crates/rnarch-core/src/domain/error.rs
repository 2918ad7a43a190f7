use thiserror::Error;

/// Errors produced by pure domain logic.
///
/// All variants are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string input did not parse as any variant of a closed enum
    /// (architecture, state management, routing).
    #[error("unknown {field}: '{value}'")]
    UnknownVariant { field: &'static str, value: String },

    /// A feature/model/screen name that cannot produce usable identifiers.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

/// Error categories for CLI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (bad argument, bad name)
    Validation,
    /// Configuration problem
    Configuration,
    /// A required file or resource is missing
    NotFound,
    /// Internal error
    Internal,
}

impl DomainError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownVariant { .. } | Self::InvalidName { .. } => ErrorCategory::Validation,
        }
    }

    /// Actionable suggestions for the user.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownVariant { field, .. } => match *field {
                "architecture" => vec![
                    "Valid architectures: clean, feature-based, atomic, mvvm".to_string(),
                ],
                "stateManagement" => {
                    vec!["Valid state management options: redux, zustand, context".to_string()]
                }
                "routing" => {
                    vec!["Valid routing options: react-navigation, expo-router".to_string()]
                }
                _ => vec![],
            },
            Self::InvalidName { .. } => vec![
                "Use letters, digits, and separators (spaces, '-', '_')".to_string(),
                "Example: 'user profile' becomes user_profile / UserProfile".to_string(),
            ],
        }
    }
}

// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised when a menu answer or a stack label does not map onto one of the
/// closed domain enumerations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown stack option '{0}'")]
    UnknownStack(String),

    #[error("Choice {index} is out of range for a menu of {len} item(s)")]
    InvalidChoice { index: usize, len: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownStack(label) => {
                let mut suggestions = vec![
                    format!("'{label}' is not a known stack"),
                    "Available stacks:".into(),
                ];
                for stack in crate::domain::Stack::ALL {
                    suggestions.push(format!("  • {} ({})", stack.label(), stack.slug()));
                }
                suggestions
            }
            Self::InvalidChoice { .. } => vec![
                "The prompt returned a choice that is not on the menu".into(),
                "Run the command again and pick one of the listed options".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownStack(_) => ErrorCategory::Validation,
            Self::InvalidChoice { .. } => ErrorCategory::Prompt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Prompt,
}

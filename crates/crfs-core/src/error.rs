//! Unified error handling for the create-react-fs core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrfsError {
    /// Errors from the domain layer (menu or dispatch violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (prompts and processes).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl CrfsError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Prompt => ErrorCategory::Prompt,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the user interrupted a prompt.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled { .. }))
    }

    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::Application(e) => e.captured_output(),
            Self::Domain(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Prompt,
    ExternalCommand,
}

/// Convenient result type alias.
pub type CrfsResult<T> = Result<T, CrfsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_zero_exit_message_includes_status() {
        let err = ApplicationError::NonZeroExit {
            command: "npm install -D vitest".into(),
            status: Some(1),
            output: "npm ERR! 404".into(),
        };
        assert_eq!(
            err.to_string(),
            "Command 'npm install -D vitest' exited with status 1"
        );
        assert_eq!(err.captured_output(), Some("npm ERR! 404"));
    }

    #[test]
    fn signal_exit_is_described() {
        let err = ApplicationError::NonZeroExit {
            command: "docker compose up".into(),
            status: None,
            output: String::new(),
        };
        assert!(err.to_string().ends_with("exited with a signal"));
    }

    #[test]
    fn spawn_suggestion_names_program() {
        let err = CrfsError::from(ApplicationError::Spawn {
            command: "docker compose up".into(),
            reason: "No such file or directory".into(),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("'docker'")));
        assert_eq!(err.category(), ErrorCategory::ExternalCommand);
        assert_eq!(err.captured_output(), None);
    }

    #[test]
    fn invalid_choice_is_a_prompt_failure() {
        let err = CrfsError::from(DomainError::InvalidChoice { index: 5, len: 2 });
        assert_eq!(err.category(), ErrorCategory::Prompt);
    }

    #[test]
    fn cancellation_is_detected() {
        let err = CrfsError::from(ApplicationError::Cancelled {
            label: "Select Stack".into(),
        });
        assert!(err.is_cancelled());
        assert_eq!(err.category(), ErrorCategory::Prompt);
    }
}

//! Application layer errors.
//!
//! These errors represent failures talking to the outside world (the
//! terminal and child processes), not menu or dispatch logic. Those are
//! `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while prompting or running external commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The prompt could not be shown or read (closed input, no terminal).
    #[error("Prompt '{label}' failed: {reason}")]
    Prompt { label: String, reason: String },

    /// The user interrupted a prompt.
    #[error("Prompt '{label}' was cancelled")]
    Cancelled { label: String },

    /// The process could not be started at all.
    #[error("Failed to execute command '{command}': {reason}")]
    Spawn { command: String, reason: String },

    /// The process ran but exited unsuccessfully.
    #[error("Command '{command}' exited with {}", describe_status(.status))]
    NonZeroExit {
        command: String,
        status: Option<i32>,
        output: String,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Prompt { .. } => vec![
                "Run create-react-fs from an interactive terminal".into(),
                "Or skip the prompts with: create-react-fs new --stack <STACK>".into(),
            ],
            Self::Cancelled { .. } => vec![
                "Setup was cancelled before anything was installed".into(),
            ],
            Self::Spawn { command, .. } => {
                let program = command.split_whitespace().next().unwrap_or(command);
                vec![
                    format!("Ensure '{program}' is installed and in your PATH"),
                    "Override the program in the [toolchain] section of the config file".into(),
                ]
            }
            Self::NonZeroExit { .. } => vec![
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Prompt { .. } | Self::Cancelled { .. } => ErrorCategory::Prompt,
            Self::Spawn { .. } | Self::NonZeroExit { .. } => ErrorCategory::ExternalCommand,
        }
    }

    /// Output captured from the child before it failed, if any.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::NonZeroExit { output, .. } => Some(output),
            _ => None,
        }
    }
}

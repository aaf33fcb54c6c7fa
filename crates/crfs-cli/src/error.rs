//! Error handling for the create-react-fs CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use crfs_core::{
    domain::InstallerKind,
    error::{CrfsError, CrfsResult},
};

// Re-export so callers only need `use crate::error::*`.
pub use crfs_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `crfs-core`, e.g. a failed prompt.
    #[error("Setup aborted: {0}")]
    Core(#[from] CrfsError),

    /// At least one installer failed. Its report was already printed.
    #[error("{} failed: {}", plural_installers(.failed.len()), join_kinds(.failed))]
    SetupFailed { failed: Vec<InstallerKind> },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Feature not available (e.g., interactive mode without feature flag).
    #[error("Feature not available: {feature}")]
    #[cfg_attr(feature = "interactive", allow(dead_code))]
    FeatureNotAvailable { feature: &'static str },
}

fn plural_installers(count: usize) -> String {
    if count == 1 {
        "1 installer".to_owned()
    } else {
        format!("{count} installers")
    }
}

fn join_kinds(kinds: &[InstallerKind]) -> String {
    kinds
        .iter()
        .map(InstallerKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check your config file: create-react-fs config path".into(),
                "Use 'create-react-fs config init --force' to restore the defaults".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::SetupFailed { failed } => {
                let mut suggestions = vec![
                    "Review the command output reported above".into(),
                    "Installers that completed were not rolled back".into(),
                ];
                if failed.contains(&InstallerKind::Database) {
                    suggestions.push(
                        "Make sure Docker is running and a compose file exists in this directory"
                            .into(),
                    );
                }
                suggestions.push(
                    "Override program names in the [toolchain] section of the config file".into(),
                );
                suggestions
            }

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{feature}' feature is not available in this build"),
                format!("Install with the feature enabled: cargo install crfs-cli --features {feature}"),
                "Or skip the prompts with: create-react-fs new --stack <STACK>".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Prompt => ErrorCategory::UserError,
                CoreCategory::ExternalCommand => ErrorCategory::SetupFailed,
            },
            Self::SetupFailed { .. } => ErrorCategory::SetupFailed,
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Setup failed  |  5   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::SetupFailed => 5,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::SetupFailed => tracing::error!("Setup failed: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (bad arguments, failed or cancelled prompt).
    UserError,
    /// Configuration error.
    Configuration,
    /// An external command failed.
    SetupFailed,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// There is no blanket impl; it would overlap with both concrete impls.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for CrfsResult<T> {
    /// Core errors already carry their own context; the message only goes
    /// to the debug log.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            let context: String = f().into();
            tracing::debug!(context = %context, error = %e, "Core operation failed");
            CliError::Core(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use crfs_core::application::ApplicationError;

    fn prompt_error() -> CrfsError {
        ApplicationError::Prompt {
            label: "Select Stack".into(),
            reason: "not a terminal".into(),
        }
        .into()
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn database_failure_mentions_docker() {
        let err = CliError::SetupFailed {
            failed: vec![InstallerKind::Database],
        };
        assert!(err.suggestions().iter().any(|s| s.contains("Docker")));
    }

    #[test]
    fn feature_not_available_suggests_flags() {
        let err = CliError::FeatureNotAvailable {
            feature: "interactive",
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--stack")));
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn setup_failed_lists_installers() {
        let one = CliError::SetupFailed {
            failed: vec![InstallerKind::Testing],
        };
        assert_eq!(one.to_string(), "1 installer failed: testing");

        let two = CliError::SetupFailed {
            failed: vec![InstallerKind::Stack, InstallerKind::Database],
        };
        assert_eq!(two.to_string(), "2 installers failed: stack, database");
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_prompt_failure_is_user_error() {
        assert_eq!(CliError::Core(prompt_error()).exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_setup_failed() {
        let err = CliError::SetupFailed {
            failed: vec![InstallerKind::Stack],
        };
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = CliError::Core(prompt_error()).format_plain(false);
        assert!(s.contains("Error: Setup aborted: Prompt 'Select Stack' failed"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { ref message, .. }) if message == "reading config"));
    }

    #[test]
    fn into_cli_core_error() {
        let result: CrfsResult<()> = Err(prompt_error());
        let cli = result.with_cli_context(|| "collecting answers");
        assert!(matches!(cli, Err(CliError::Core(_))));
    }
}

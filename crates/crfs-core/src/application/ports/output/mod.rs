//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the terminal and the
//! operating system. `crfs-adapters` and `crfs-cli` provide implementations.

use crate::domain::{CommandOutput, CommandSpec, InstallReport, Step};
use crate::error::CrfsResult;

/// Port for single-choice menus.
///
/// Implemented by:
/// - `crfs_cli::prompt::DialoguerPrompter` (interactive terminal)
/// - `crfs_adapters::ScriptedPrompter` (scripted answers, testing)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Show `label` with `items` and return the index of the chosen item.
    ///
    /// There is no default item; the user must pick one explicitly.
    fn select(&self, label: &str, items: &[&'static str]) -> CrfsResult<usize>;
}

/// Port for running one external command to completion.
///
/// Implemented by:
/// - `crfs_adapters::SystemRunner` (real processes)
/// - `crfs_adapters::DryRunRunner` (prints, never spawns)
/// - `crfs_adapters::RecordingRunner` (testing)
///
/// ## Contract
///
/// - Blocks until the child exits; no timeout
/// - `Ok` only for a zero exit status
/// - A spawn failure is `ApplicationError::Spawn`, a non-zero exit is
///   `ApplicationError::NonZeroExit` carrying the captured output
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    fn run(&self, command: &CommandSpec) -> CrfsResult<CommandOutput>;
}

/// Progress notifications emitted while installers run.
pub trait SetupObserver {
    /// Called right before `step` is handed to the runner.
    fn step_started(&self, step: &Step) {
        let _ = step;
    }

    /// Called once an installer reached a terminal state. Not called for
    /// skipped features.
    fn installer_finished(&self, report: &InstallReport) {
        let _ = report;
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SetupObserver for NoopObserver {}

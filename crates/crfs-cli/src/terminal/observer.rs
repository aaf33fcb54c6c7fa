//! Console progress reporting for installers.

use std::io;

use tracing::debug;

use crfs_core::{
    application::ports::SetupObserver,
    domain::{InstallOutcome, InstallReport, InstallerKind, Step, StepFailure, StepRecord},
};

use crate::output::OutputManager;

/// Prints each step banner before it runs and a result line per installer.
pub struct ConsoleObserver {
    output: OutputManager,
    dry_run: bool,
}

impl ConsoleObserver {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            dry_run: false,
        }
    }

    /// Print the planned command under each banner instead of results.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn echo_outputs(&self, steps: &[StepRecord]) -> io::Result<()> {
        for step in steps {
            self.echo_output(&step.output)?;
        }
        Ok(())
    }

    fn echo_output(&self, captured: &str) -> io::Result<()> {
        let captured = captured.trim_end();
        if captured.is_empty() {
            return Ok(());
        }
        self.output.print(&format!("Command output: {captured}"))
    }

    fn report(&self, report: &InstallReport) -> io::Result<()> {
        match &report.outcome {
            InstallOutcome::Completed { .. } if self.dry_run => Ok(()),
            InstallOutcome::Completed { steps } => {
                self.echo_outputs(steps)?;
                self.output.success(&completion_message(report))
            }
            InstallOutcome::Failed { completed, failure } => {
                self.echo_outputs(completed)?;
                self.output.error(&failure_message(&report.label, failure))
            }
            InstallOutcome::Unknown { requested } => {
                self.output.error(&format!("Unknown stack option: {requested}"))
            }
            InstallOutcome::Skipped => Ok(()),
        }
    }
}

fn completion_message(report: &InstallReport) -> String {
    match report.installer {
        InstallerKind::Stack => format!("Setup completed for {}", report.label),
        _ => format!("{} setup completed!", report.label),
    }
}

/// The failure line carries the captured output so quiet mode keeps it.
fn failure_message(label: &str, failure: &StepFailure) -> String {
    let captured = failure.output.trim_end();
    if captured.is_empty() {
        format!("{label} setup failed: {}", failure.reason)
    } else {
        format!("{label} setup failed: {}\nCommand output: {captured}", failure.reason)
    }
}

/// Terminal write failures must not abort a running setup.
fn ignore_broken_terminal(result: io::Result<()>) {
    if let Err(e) = result {
        debug!(error = %e, "Failed to write progress line");
    }
}

impl SetupObserver for ConsoleObserver {
    fn step_started(&self, step: &Step) {
        ignore_broken_terminal(self.output.info(&step.banner));
        if self.dry_run {
            ignore_broken_terminal(self.output.print(&format!("  $ {}", step.command)));
        }
    }

    fn installer_finished(&self, report: &InstallReport) {
        ignore_broken_terminal(self.report(report));
    }
}

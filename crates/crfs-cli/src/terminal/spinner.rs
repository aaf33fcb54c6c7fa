//! Progress spinner around a blocking command runner.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crfs_core::{
    application::ports::CommandRunner,
    domain::{CommandOutput, CommandSpec},
    error::CrfsResult,
};

const TICK: Duration = Duration::from_millis(100);

/// Shows a spinner on stderr while the wrapped runner blocks.
pub struct SpinnerRunner {
    inner: Box<dyn CommandRunner>,
    enabled: bool,
}

impl SpinnerRunner {
    /// With `enabled == false` the spinner is hidden and this is a plain
    /// pass-through.
    pub fn new(inner: Box<dyn CommandRunner>, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    fn start(&self, command: &CommandSpec) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(command.to_string());
        bar.enable_steady_tick(TICK);
        bar
    }
}

impl CommandRunner for SpinnerRunner {
    fn run(&self, command: &CommandSpec) -> CrfsResult<CommandOutput> {
        let bar = self.start(command);
        let result = self.inner.run(command);
        bar.finish_and_clear();
        result
    }
}

//! Runner that never spawns anything.

use tracing::info;

use crfs_core::{
    application::ports::CommandRunner,
    domain::{CommandOutput, CommandSpec},
    error::CrfsResult,
};

/// Logs each command and reports success without running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl DryRunRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &CommandSpec) -> CrfsResult<CommandOutput> {
        info!(command = %command, "Dry run, command not executed");
        Ok(CommandOutput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn succeeds_without_status_or_output() {
        let output = DryRunRunner::new()
            .run(&CommandSpec::new("crfs-definitely-not-installed"))
            .unwrap();

        assert_eq!(output.status, None);
        assert!(output.output.is_empty());
    }
}

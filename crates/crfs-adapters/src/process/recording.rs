//! In-memory command runner for testing.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use crfs_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutput, CommandSpec},
    error::CrfsResult,
};

/// Records every command it is asked to run.
///
/// Clones share the same call log, so a test can keep one handle and give
/// the other to a service.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    calls: Vec<CommandSpec>,
    scripted: HashMap<String, Scripted>,
}

#[derive(Debug, Clone)]
enum Scripted {
    Output(String),
    Exit { status: i32, output: String },
    Missing,
}

impl RecordingRunner {
    /// Every command succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// `program` succeeds and prints `output`.
    pub fn with_output(self, program: &str, output: impl Into<String>) -> Self {
        self.script(program, Scripted::Output(output.into()))
    }

    /// `program` exits with `status` after printing `output`.
    pub fn failing(self, program: &str, status: i32, output: impl Into<String>) -> Self {
        self.script(
            program,
            Scripted::Exit {
                status,
                output: output.into(),
            },
        )
    }

    /// `program` cannot be spawned.
    pub fn missing(self, program: &str) -> Self {
        self.script(program, Scripted::Missing)
    }

    fn script(self, program: &str, scripted: Scripted) -> Self {
        self.lock().scripted.insert(program.to_string(), scripted);
        self
    }

    /// All commands in call order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.lock().calls.clone()
    }

    /// All commands in call order, rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.lock().calls.iter().map(ToString::to_string).collect()
    }

    pub fn clear(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, RecordingRunnerInner> {
        // A panicking test thread must not hide the calls made before it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> CrfsResult<CommandOutput> {
        let mut inner = self.lock();
        inner.calls.push(command.clone());

        match inner.scripted.get(command.program()).cloned() {
            None => Ok(CommandOutput::success("")),
            Some(Scripted::Output(output)) => Ok(CommandOutput::success(output)),
            Some(Scripted::Exit { status, output }) => Err(ApplicationError::NonZeroExit {
                command: command.to_string(),
                status: Some(status),
                output,
            }
            .into()),
            Some(Scripted::Missing) => Err(ApplicationError::Spawn {
                command: command.to_string(),
                reason: "No such file or directory (os error 2)".into(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crfs_core::error::CrfsError;

    #[test]
    fn records_calls_in_order_across_clones() {
        let runner = RecordingRunner::new();
        let handle = runner.clone();

        runner.run(&CommandSpec::new("npx").arg("create-remix@latest")).unwrap();
        runner.run(&CommandSpec::new("npm").args(["install", "-D", "vitest"])).unwrap();

        assert_eq!(
            handle.command_lines(),
            vec!["npx create-remix@latest", "npm install -D vitest"]
        );
    }

    #[test]
    fn scripted_output_is_returned() {
        let runner = RecordingRunner::new().with_output("npm", "added 1 package");
        let output = runner.run(&CommandSpec::new("npm")).unwrap();
        assert_eq!(output.output, "added 1 package");
    }

    #[test]
    fn failing_program_returns_non_zero_exit() {
        let runner = RecordingRunner::new().failing("docker", 1, "no compose file");
        let err = runner
            .run(&CommandSpec::new("docker").args(["compose", "up"]))
            .unwrap_err();

        assert_eq!(err.captured_output(), Some("no compose file"));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn missing_program_returns_spawn_error() {
        let runner = RecordingRunner::new().missing("docker");
        let err = runner.run(&CommandSpec::new("docker")).unwrap_err();
        assert!(matches!(
            err,
            CrfsError::Application(ApplicationError::Spawn { .. })
        ));
    }

    #[test]
    fn clear_forgets_calls_but_keeps_script() {
        let runner = RecordingRunner::new().missing("docker");
        runner.run(&CommandSpec::new("npm")).unwrap();
        runner.clear();

        assert!(runner.calls().is_empty());
        assert!(runner.run(&CommandSpec::new("docker")).is_err());
    }
}

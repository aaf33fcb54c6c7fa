//! Production command runner using `std::process`.

use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use crfs_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{CommandOutput, CommandSpec},
    error::CrfsResult,
};

/// Spawns real child processes and waits for them.
///
/// stdin is closed, stdout and stderr are captured. The combined output is
/// stdout followed by stderr.
/// Children inherit the current working directory, which is where the
/// scaffolding tools create the project.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %spec))]
    fn run(&self, spec: &CommandSpec) -> CrfsResult<CommandOutput> {
        let mut command = Command::new(spec.program());
        command
            .args(spec.get_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Spawning child process");
        // `output` waits for the child and reaps it on every path.
        let output = command.output().map_err(|e| ApplicationError::Spawn {
            command: spec.to_string(),
            reason: e.to_string(),
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        debug!(status = ?output.status.code(), bytes = combined.len(), "Child exited");

        if output.status.success() {
            Ok(CommandOutput {
                status: output.status.code(),
                output: combined,
            })
        } else {
            Err(ApplicationError::NonZeroExit {
                command: spec.to_string(),
                status: output.status.code(),
                output: combined,
            }
            .into())
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crfs_core::error::CrfsError;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh").args(["-c", script])
    }

    #[test]
    fn captures_stdout_then_stderr() {
        let output = SystemRunner::new()
            .run(&sh("echo out; echo err 1>&2"))
            .unwrap();

        assert_eq!(output.status, Some(0));
        assert_eq!(output.output, "out\nerr\n");
    }

    #[test]
    fn non_zero_exit_carries_output() {
        let err = SystemRunner::new()
            .run(&sh("echo 'npm ERR! 404'; exit 3"))
            .unwrap_err();

        match err {
            CrfsError::Application(ApplicationError::NonZeroExit {
                status, output, ..
            }) => {
                assert_eq!(status, Some(3));
                assert!(output.contains("npm ERR! 404"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = SystemRunner::new()
            .run(&CommandSpec::new("crfs-definitely-not-installed").arg("up"))
            .unwrap_err();

        assert!(matches!(
            err,
            CrfsError::Application(ApplicationError::Spawn { ref command, .. })
                if command == "crfs-definitely-not-installed up"
        ));
    }

    #[test]
    fn stdin_is_closed() {
        // `cat` exits immediately on EOF instead of waiting for input.
        let output = SystemRunner::new().run(&CommandSpec::new("cat")).unwrap();
        assert!(output.output.is_empty());
    }
}

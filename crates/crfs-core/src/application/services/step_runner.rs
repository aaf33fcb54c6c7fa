//! Ordered-steps runner shared by every installer.
//!
//! Steps run one at a time through the [`CommandRunner`] port. The first
//! failing step ends the installer; later steps are never handed to the
//! runner, and steps that already completed are not rolled back.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{CommandRunner, SetupObserver},
    domain::{InstallOutcome, Step, StepFailure, StepRecord},
};

pub struct StepRunner<'a> {
    runner: &'a dyn CommandRunner,
    observer: &'a dyn SetupObserver,
}

impl<'a> StepRunner<'a> {
    pub fn new(runner: &'a dyn CommandRunner, observer: &'a dyn SetupObserver) -> Self {
        Self { runner, observer }
    }

    /// Run `steps` in order, stopping at the first failure.
    #[instrument(skip_all, fields(steps = steps.len()))]
    pub fn run(&self, steps: &[Step]) -> InstallOutcome {
        let mut completed = Vec::with_capacity(steps.len());

        for step in steps {
            self.observer.step_started(step);
            debug!(step = %step.name, command = %step.command, "Running step");

            match self.runner.run(&step.command) {
                Ok(output) => {
                    info!(step = %step.name, status = ?output.status, "Step completed");
                    completed.push(StepRecord {
                        name: step.name.clone(),
                        command: step.command.to_string(),
                        output: output.output,
                    });
                }
                Err(err) => {
                    warn!(step = %step.name, error = %err, "Step failed, halting installer");
                    let failure = StepFailure {
                        name: step.name.clone(),
                        command: step.command.to_string(),
                        reason: err.to_string(),
                        output: err.captured_output().unwrap_or_default().to_string(),
                    };
                    return InstallOutcome::Failed { completed, failure };
                }
            }
        }

        InstallOutcome::Completed { steps: completed }
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{MockCommandRunner, NoopObserver},
        },
        domain::{CommandOutput, CommandSpec},
    };

    fn step(name: &str, program: &str) -> Step {
        Step::new(name, format!("running {name}"), CommandSpec::new(program))
    }

    #[test]
    fn runs_all_steps_in_order() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();
        for program in ["first", "second", "third"] {
            runner
                .expect_run()
                .withf(move |c| c.program() == program)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|c| Ok(CommandOutput::success(format!("{c} ok"))));
        }

        let steps = [
            step("one", "first"),
            step("two", "second"),
            step("three", "third"),
        ];
        let outcome = StepRunner::new(&runner, &NoopObserver).run(&steps);

        match outcome {
            InstallOutcome::Completed { steps } => {
                let names: Vec<&str> = steps.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(names, ["one", "two", "three"]);
                assert_eq!(steps[1].output, "second ok");
            }
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn first_failure_halts_remaining_steps() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|c| c.program() == "first")
            .times(1)
            .returning(|c| {
                Err(ApplicationError::NonZeroExit {
                    command: c.to_string(),
                    status: Some(2),
                    output: "boom".into(),
                }
                .into())
            });
        runner
            .expect_run()
            .withf(|c| c.program() == "second")
            .never();

        let steps = [step("one", "first"), step("two", "second")];
        let outcome = StepRunner::new(&runner, &NoopObserver).run(&steps);

        match outcome {
            InstallOutcome::Failed { completed, failure } => {
                assert!(completed.is_empty());
                assert_eq!(failure.name, "one");
                assert_eq!(failure.output, "boom");
                assert!(failure.reason.contains("status 2"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn spawn_failure_has_empty_output() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|c| {
            Err(ApplicationError::Spawn {
                command: c.to_string(),
                reason: "not found".into(),
            }
            .into())
        });

        let outcome = StepRunner::new(&runner, &NoopObserver).run(&[step("one", "missing")]);

        match outcome {
            InstallOutcome::Failed { failure, .. } => {
                assert!(failure.output.is_empty());
                assert!(failure.reason.contains("not found"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_step_list_completes_without_calls() {
        let runner = MockCommandRunner::new();
        let outcome = StepRunner::new(&runner, &NoopObserver).run(&[]);
        assert_eq!(outcome, InstallOutcome::Completed { steps: vec![] });
    }
}

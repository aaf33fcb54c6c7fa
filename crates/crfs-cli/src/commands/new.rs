//! Implementation of the `create-react-fs new` command.
//!
//! This is also what runs when no subcommand is given. Responsibility:
//! pick the prompter and runner for this invocation, call the core
//! services, and turn the report into output and an exit status. No
//! business logic lives here.

use std::io::{self, IsTerminal};

use tracing::{info, instrument};

use crfs_adapters::{DryRunRunner, ScriptedPrompter, SystemRunner};
use crfs_core::{
    application::{CommandRunner, Prompter, SelectionService, SetupService},
    domain::{Answer, SetupReport, Stack, Toolchain},
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    terminal::{ConsoleObserver, SpinnerRunner},
};

/// Execute the `new` flow.
///
/// 1. Collect the selection (menus, or `--stack` and feature flags)
/// 2. Run the installers, printing progress as they go
/// 3. Print the JSON report when asked
/// 4. Fail with [`CliError::SetupFailed`] if any installer failed
#[instrument(skip_all, fields(stack = ?args.stack, dry_run = args.dry_run))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = build_prompter(&args)?;
    let runner = build_runner(&args, &output);

    let report = run_setup(prompter, runner, config.toolchain, args.dry_run, &output)?;

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    }

    check_report(&report)
}

/// Prompt for a selection, then apply it.
///
/// A prompt failure returns before any installer runs.
pub fn run_setup(
    prompter: Box<dyn Prompter>,
    runner: Box<dyn CommandRunner>,
    toolchain: Toolchain,
    dry_run: bool,
    output: &OutputManager,
) -> CliResult<SetupReport> {
    let selection = SelectionService::new(prompter)
        .collect()
        .with_cli_context(|| "collecting answers")?;
    output.print(&format!("You chose: {}", selection.stack))?;

    let observer = ConsoleObserver::new(output.clone()).dry_run(dry_run);
    let service = SetupService::new(runner, toolchain).with_observer(Box::new(observer));
    let report = service.apply(&selection);

    info!(run_id = %report.run_id, failures = report.failed_installers().len(), "Setup report ready");
    if dry_run {
        output.info("Dry run: no commands were executed")?;
    }
    Ok(report)
}

/// Answers equivalent to picking `stack` and the given features from the menus.
pub fn scripted_answers(stack: Stack, database: bool, testing: bool) -> ScriptedPrompter {
    ScriptedPrompter::new([
        stack.label(),
        answer(database).label(),
        answer(testing).label(),
    ])
}

fn answer(yes: bool) -> Answer {
    if yes { Answer::Yes } else { Answer::No }
}

fn check_report(report: &SetupReport) -> CliResult<()> {
    if report.has_failures() {
        Err(CliError::SetupFailed {
            failed: report.failed_installers(),
        })
    } else {
        Ok(())
    }
}

// ── Adapter selection ─────────────────────────────────────────────────────────

fn build_prompter(args: &NewArgs) -> CliResult<Box<dyn Prompter>> {
    match args.stack {
        Some(stack) => Ok(Box::new(scripted_answers(
            stack.into(),
            args.database,
            args.testing,
        ))),
        None => interactive_prompter(),
    }
}

#[cfg(feature = "interactive")]
fn interactive_prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(crate::terminal::DialoguerPrompter::new()))
}

#[cfg(not(feature = "interactive"))]
fn interactive_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

fn build_runner(args: &NewArgs, output: &OutputManager) -> Box<dyn CommandRunner> {
    if args.dry_run {
        return Box::new(DryRunRunner::new());
    }
    let spinner = output.format() == OutputFormat::Human
        && !output.is_quiet()
        && io::stderr().is_terminal();
    Box::new(SpinnerRunner::new(Box::new(SystemRunner::new()), spinner))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalArgs;
    use crfs_adapters::RecordingRunner;
    use crfs_core::domain::InstallerKind;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn run(
        prompter: ScriptedPrompter,
        recorder: &RecordingRunner,
        toolchain: Toolchain,
    ) -> CliResult<SetupReport> {
        run_setup(
            Box::new(prompter),
            Box::new(recorder.clone()),
            toolchain,
            false,
            &quiet_output(),
        )
    }

    #[test]
    fn scripted_answers_follow_menu_labels() {
        let prompter = scripted_answers(Stack::Remix, true, false);
        let selection = SelectionService::new(Box::new(prompter)).collect().unwrap();

        assert_eq!(selection.stack, Stack::Remix);
        assert!(selection.wants_database);
        assert!(!selection.wants_testing);
    }

    #[test]
    fn flags_run_every_requested_installer_in_order() {
        let recorder = RecordingRunner::new();
        let report = run(
            scripted_answers(Stack::Remix, true, true),
            &recorder,
            Toolchain::default(),
        )
        .unwrap();

        assert_eq!(
            recorder.command_lines(),
            vec![
                "npx create-remix@latest",
                "docker compose up",
                "npm install prisma --save-dev",
                "npm install -D vitest",
            ]
        );
        assert!(check_report(&report).is_ok());
    }

    #[test]
    fn failing_installer_maps_to_setup_failed() {
        let recorder = RecordingRunner::new().failing("docker", 1, "no configuration file provided");
        let report = run(
            scripted_answers(Stack::ReactViteExpress, true, true),
            &recorder,
            Toolchain::default(),
        )
        .unwrap();

        // Prisma is skipped, vitest still runs.
        assert_eq!(recorder.calls().len(), 3);
        match check_report(&report) {
            Err(CliError::SetupFailed { failed }) => {
                assert_eq!(failed, vec![InstallerKind::Database]);
            }
            other => panic!("expected SetupFailed, got {other:?}"),
        }
    }

    #[test]
    fn prompt_failure_runs_nothing() {
        let recorder = RecordingRunner::new();
        let err = run(ScriptedPrompter::new(["Remix"]), &recorder, Toolchain::default()).unwrap_err();

        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn toolchain_from_config_is_used() {
        let recorder = RecordingRunner::new();
        let toolchain = Toolchain {
            npm: "pnpm".into(),
            ..Toolchain::default()
        };
        run(scripted_answers(Stack::Remix, false, true), &recorder, toolchain).unwrap();

        assert_eq!(
            recorder.command_lines(),
            vec!["npx create-remix@latest", "pnpm install -D vitest"]
        );
    }

    #[test]
    fn dry_run_completes_without_spawning() {
        let toolchain = Toolchain {
            npx: "crfs-definitely-not-installed".into(),
            ..Toolchain::default()
        };
        let report = run_setup(
            Box::new(scripted_answers(Stack::Remix, true, true)),
            Box::new(DryRunRunner::new()),
            toolchain,
            true,
            &quiet_output(),
        )
        .unwrap();

        assert!(!report.has_failures());
        assert_eq!(report.installers.len(), 3);
    }

    #[test]
    fn dry_run_flag_selects_dry_runner() {
        let args = NewArgs {
            stack: Some(crate::cli::StackArg::Remix),
            dry_run: true,
            ..NewArgs::default()
        };
        let runner = build_runner(&args, &quiet_output());
        let output = runner
            .run(&crfs_core::domain::CommandSpec::new("crfs-definitely-not-installed"))
            .unwrap();
        assert_eq!(output.status, None);
    }
}

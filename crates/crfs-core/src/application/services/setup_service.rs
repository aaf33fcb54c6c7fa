//! Setup Service - main application orchestrator.
//!
//! This service turns a [`Selection`] into external commands:
//! 1. Scaffold the chosen stack (exactly one command)
//! 2. Run the database installer if it was accepted
//! 3. Run the testing installer if it was accepted
//!
//! Installers are independent. A failing step halts only the rest of its
//! own installer; earlier installers are not rolled back and later ones
//! still run.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{CommandRunner, NoopObserver, SetupObserver},
        services::step_runner::StepRunner,
    },
    domain::{
        DomainError, Feature, InstallOutcome, InstallReport, InstallerKind, Selection, SetupReport, Stack,
        Toolchain, feature_def, feature_steps, scaffold_step,
    },
};

/// Runs installers through a [`CommandRunner`].
pub struct SetupService {
    runner: Box<dyn CommandRunner>,
    toolchain: Toolchain,
    observer: Box<dyn SetupObserver>,
}

impl SetupService {
    /// Create a new setup service with the given runner and program names.
    pub fn new(runner: Box<dyn CommandRunner>, toolchain: Toolchain) -> Self {
        Self {
            runner,
            toolchain,
            observer: Box::new(NoopObserver),
        }
    }

    /// Receive progress notifications while installers run.
    pub fn with_observer(mut self, observer: Box<dyn SetupObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Run every installer the selection asks for, in order.
    #[instrument(skip_all, fields(stack = %selection.stack))]
    pub fn apply(&self, selection: &Selection) -> SetupReport {
        let mut report = SetupReport::new(*selection);
        info!(run_id = %report.run_id, "Setup started");

        report.push(self.install_stack(selection.stack));

        for feature in Feature::ALL {
            if selection.wants(feature) {
                report.push(self.install_feature(feature));
            } else {
                debug!(feature = %feature, "Feature declined, installer skipped");
                report.push(InstallReport::skipped(
                    feature.into(),
                    feature_def(feature).label,
                ));
            }
        }

        info!(failures = report.failed_installers().len(), "Setup finished");
        report
    }

    /// Scaffold `stack` with its single dispatch-table command.
    #[instrument(skip_all, fields(stack = %stack))]
    pub fn install_stack(&self, stack: Stack) -> InstallReport {
        let step = scaffold_step(stack, &self.toolchain);
        let outcome = self.step_runner().run(std::slice::from_ref(&step));
        self.finish(InstallReport::new(InstallerKind::Stack, stack.label(), outcome))
    }

    /// Scaffold the stack whose menu label is `label`.
    ///
    /// Labels that are not on the menu produce an `Unknown` report and no
    /// external call.
    pub fn install_stack_label(&self, label: &str) -> InstallReport {
        match Stack::from_label(label) {
            Some(stack) => self.install_stack(stack),
            None => {
                let err = DomainError::UnknownStack(label.to_string());
                warn!(error = %err, suggestions = ?err.suggestions(), "No installer for stack");
                self.finish(InstallReport::new(
                    InstallerKind::Stack,
                    label,
                    InstallOutcome::Unknown {
                        requested: label.to_string(),
                    },
                ))
            }
        }
    }

    /// Run the installer steps for `feature`.
    #[instrument(skip_all, fields(feature = %feature))]
    pub fn install_feature(&self, feature: Feature) -> InstallReport {
        let steps = feature_steps(feature, &self.toolchain);
        let outcome = self.step_runner().run(&steps);
        self.finish(InstallReport::new(
            feature.into(),
            feature_def(feature).label,
            outcome,
        ))
    }

    pub fn install_database(&self) -> InstallReport {
        self.install_feature(Feature::Database)
    }

    pub fn install_testing(&self) -> InstallReport {
        self.install_feature(Feature::Testing)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn step_runner(&self) -> StepRunner<'_> {
        StepRunner::new(self.runner.as_ref(), self.observer.as_ref())
    }

    fn finish(&self, report: InstallReport) -> InstallReport {
        if report.is_failure() {
            warn!(installer = %report.installer, label = %report.label, "Installer failed");
        } else {
            info!(installer = %report.installer, label = %report.label, "Installer completed");
        }
        self.observer.installer_finished(&report);
        report
    }
}

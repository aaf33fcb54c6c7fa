//! Run reports: what each installer did and how it ended.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::selection::Selection;
use crate::domain::value_objects::Feature;

/// Which installer a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallerKind {
    Stack,
    Database,
    Testing,
}

impl InstallerKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Database => "database",
            Self::Testing => "testing",
        }
    }
}

impl From<Feature> for InstallerKind {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Database => Self::Database,
            Feature::Testing => Self::Testing,
        }
    }
}

impl fmt::Display for InstallerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step that ran to a zero exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub command: String,
    pub output: String,
}

/// The step that stopped an installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFailure {
    pub name: String,
    pub command: String,
    pub reason: String,
    /// Combined output captured before the failure. Empty on spawn errors.
    pub output: String,
}

/// Terminal state of one installer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallOutcome {
    Completed {
        steps: Vec<StepRecord>,
    },
    Failed {
        completed: Vec<StepRecord>,
        failure: StepFailure,
    },
    /// Dispatch miss: the requested stack has no entry. Nothing ran.
    Unknown {
        requested: String,
    },
    /// The user declined the feature. Nothing ran.
    Skipped,
}

/// One installer's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallReport {
    pub installer: InstallerKind,
    /// Human name of what was set up, e.g. `Remix` or `PostgreSQL and Prisma`.
    pub label: String,
    #[serde(flatten)]
    pub outcome: InstallOutcome,
}

impl InstallReport {
    pub fn new(installer: InstallerKind, label: impl Into<String>, outcome: InstallOutcome) -> Self {
        Self {
            installer,
            label: label.into(),
            outcome,
        }
    }

    pub fn skipped(installer: InstallerKind, label: impl Into<String>) -> Self {
        Self::new(installer, label, InstallOutcome::Skipped)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, InstallOutcome::Completed { .. })
    }

    /// `true` for both a failed step and a dispatch miss.
    pub fn is_failure(&self) -> bool {
        matches!(
            self.outcome,
            InstallOutcome::Failed { .. } | InstallOutcome::Unknown { .. }
        )
    }

    /// Every step that exited successfully, in run order.
    pub fn completed_steps(&self) -> &[StepRecord] {
        match &self.outcome {
            InstallOutcome::Completed { steps } => steps,
            InstallOutcome::Failed { completed, .. } => completed,
            InstallOutcome::Unknown { .. } | InstallOutcome::Skipped => &[],
        }
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match &self.outcome {
            InstallOutcome::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

/// The whole run: selection plus each installer in run order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub selection: Selection,
    pub installers: Vec<InstallReport>,
}

impl SetupReport {
    pub fn new(selection: Selection) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            selection,
            installers: Vec::new(),
        }
    }

    pub fn push(&mut self, report: InstallReport) {
        self.installers.push(report);
    }

    pub fn has_failures(&self) -> bool {
        self.installers.iter().any(InstallReport::is_failure)
    }

    pub fn failed_installers(&self) -> Vec<InstallerKind> {
        self.installers
            .iter()
            .filter(|report| report.is_failure())
            .map(|report| report.installer)
            .collect()
    }

    pub fn report_for(&self, installer: InstallerKind) -> Option<&InstallReport> {
        self.installers
            .iter()
            .find(|report| report.installer == installer)
    }
}

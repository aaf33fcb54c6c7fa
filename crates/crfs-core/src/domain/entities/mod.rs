pub mod command;
pub mod report;
pub mod selection;

pub use command::{CommandOutput, CommandSpec, Step, Toolchain};
pub use report::{
    InstallOutcome, InstallReport, InstallerKind, SetupReport, StepFailure, StepRecord,
};
pub use selection::Selection;

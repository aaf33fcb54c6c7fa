//! Core domain layer for create-react-fs.
//!
//! This module contains the menus, the dispatch table, and the report types.
//! Nothing here performs I/O: prompting and process spawning are reached only
//! through the ports in `crate::application::ports`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No terminal, filesystem, or process calls
//! - **Closed menus**: every choice is an enum, never a free string
//! - **Immutable entities**: All domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    CommandOutput, CommandSpec, InstallOutcome, InstallReport, InstallerKind, Selection,
    SetupReport, Step, StepFailure, StepRecord, Toolchain,
};

pub use error::{DomainError, ErrorCategory};

pub use registry::{
    FEATURE_REGISTRY, FeatureDef, STACK_REGISTRY, StackDef, StepDef, feature_def, feature_steps,
    scaffold_step, stack_def,
};

pub use value_objects::{Answer, Feature, Stack, Tool};

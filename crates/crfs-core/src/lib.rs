//! create-react-fs Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! create-react-fs project generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          crfs-cli (CLI)                 │
//! │   (clap, dialoguer, tracing setup)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (SelectionService, SetupService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Prompter, CommandRunner)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crfs-adapters (Infrastructure)       │
//! │   (SystemRunner, ScriptedPrompter, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Stack, Feature, registry, reports)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crfs_core::prelude::*;
//!
//! // 1. Collect the user's answers
//! let selection = SelectionService::new(prompter).collect()?;
//!
//! // 2. Run the installers through an injected runner
//! let service = SetupService::new(runner, Toolchain::default());
//! let report = service.apply(&selection);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SelectionService, SetupService,
        ports::{CommandRunner, Prompter, SetupObserver},
    };
    pub use crate::domain::{
        CommandOutput, CommandSpec, Feature, InstallOutcome, InstallReport, InstallerKind,
        Selection, SetupReport, Stack, Step, Toolchain,
    };
    pub use crate::error::{CrfsError, CrfsResult};
}

//! Application layer for create-react-fs.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (SelectionService, SetupService)
//! - **Ports**: Interface definitions (traits) for the terminal and processes
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but holds no menu or
//! dispatch data itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{STACK_PROMPT, SelectionService, SetupService, StepRunner};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, NoopObserver, Prompter, SetupObserver};

pub use error::ApplicationError;

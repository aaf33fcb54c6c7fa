//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crfs-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: single-choice menus
//!   - `CommandRunner`: blocking external process execution
//!   - `SetupObserver`: progress notifications while installers run
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandRunner, NoopObserver, Prompter, SetupObserver};

#[cfg(test)]
pub use output::{MockCommandRunner, MockPrompter};

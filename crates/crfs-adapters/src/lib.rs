//! Infrastructure adapters for create-react-fs.
//!
//! This crate implements the ports defined in `crfs-core::application::ports`.
//! It contains all process spawning and scripted (non-terminal) prompting.

pub mod process;
pub mod prompt;

// Re-export commonly used adapters
pub use process::{DryRunRunner, RecordingRunner, SystemRunner};
pub use prompt::ScriptedPrompter;

//! Prompter adapters that do not need a terminal.

mod scripted;

pub use scripted::ScriptedPrompter;

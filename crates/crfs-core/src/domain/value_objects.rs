//! Domain value objects: Stack, Answer, Feature, Tool.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! Every menu the user sees is one of these closed enumerations, so the
//! typed dispatch in `registry.rs` is exhaustive. The labels shown in the
//! menus live here, next to the variants they describe.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `label`/`slug` arms and extend `ALL`
//! 3. Add a definition in `registry.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Stack ────────────────────────────────────────────────────────────────────

/// The web application template/toolchain combination being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stack {
    ReactViteExpress,
    Remix,
}

impl Stack {
    /// Menu order. The stack prompt shows exactly these, in this order.
    pub const ALL: [Stack; 2] = [Self::ReactViteExpress, Self::Remix];

    /// Label shown in the stack menu.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ReactViteExpress => "React Vite + Express",
            Self::Remix => "Remix",
        }
    }

    /// Machine-friendly identifier, used by `--stack` and in JSON reports.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::ReactViteExpress => "react-vite-express",
            Self::Remix => "remix",
        }
    }

    /// Look a stack up by its exact menu label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stack| stack.label() == label)
    }

    /// Labels in menu order.
    pub fn labels() -> [&'static str; 2] {
        Self::ALL.map(|stack| stack.label())
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Answer ───────────────────────────────────────────────────────────────────

/// A yes/no menu answer. The menu lists `No` first, so index 1 means yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    No,
    Yes,
}

impl Answer {
    pub const ALL: [Answer; 2] = [Self::No, Self::Yes];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    pub fn labels() -> [&'static str; 2] {
        Self::ALL.map(|answer| answer.label())
    }

    /// Map a menu index onto an answer.
    pub fn from_index(index: usize) -> Result<Self, DomainError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DomainError::InvalidChoice {
                index,
                len: Self::ALL.len(),
            })
    }

    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Feature ──────────────────────────────────────────────────────────────────

/// An optional add-on gated by a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Database,
    Testing,
}

impl Feature {
    /// Prompt order.
    pub const ALL: [Feature; 2] = [Self::Database, Self::Testing];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Testing => "testing",
        }
    }

    /// Question asked by the feature's yes/no prompt.
    pub fn prompt(self) -> &'static str {
        crate::domain::registry::feature_def(self).prompt
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tool ─────────────────────────────────────────────────────────────────────

/// The collaborator role an external command plays.
///
/// The actual program name for each role comes from a
/// [`Toolchain`](crate::domain::Toolchain), so `npm` can be swapped for
/// `pnpm` without touching the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Project scaffolder runner.
    Npx,
    /// Package manager.
    Npm,
    /// Container orchestration.
    Docker,
}

impl Tool {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npx => "npx",
            Self::Npm => "npm",
            Self::Docker => "docker",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

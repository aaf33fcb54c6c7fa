//! Dispatch table for stacks and features.
//!
//! Each stack and each feature is described exactly once here. Commands are
//! stored by [`Tool`] role rather than by program name; a
//! [`Toolchain`] turns a definition into runnable [`Step`]s.
//!
//! # Adding a New Stack
//!
//! 1. Add a variant to `Stack` in `value_objects.rs`
//! 2. Add a [`StackDef`] static here and an arm in [`stack_def`]
//! 3. Append it to [`STACK_REGISTRY`]

use crate::domain::entities::command::{CommandSpec, Step, Toolchain};
use crate::domain::value_objects::{Feature, Stack, Tool};

// ── Step definitions ─────────────────────────────────────────────────────────

/// A command template bound to a tool role.
#[derive(Debug, Clone, Copy)]
pub struct StepDef {
    pub name: &'static str,
    pub banner: &'static str,
    pub tool: Tool,
    pub args: &'static [&'static str],
}

impl StepDef {
    /// Bind this definition to concrete program names.
    pub fn resolve(&self, toolchain: &Toolchain) -> Step {
        let command = CommandSpec::new(toolchain.program(self.tool)).args(self.args.iter().copied());
        Step::new(self.name, self.banner, command)
    }
}

// ── Stacks ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct StackDef {
    pub stack: Stack,
    /// The single scaffold command for this stack.
    pub scaffold: StepDef,
}

static REACT_VITE_EXPRESS: StackDef = StackDef {
    stack: Stack::ReactViteExpress,
    scaffold: StepDef {
        name: "scaffold",
        banner: "Setting up React with Vite and an Express backend...",
        tool: Tool::Npx,
        args: &["create", "vite@latest", "--template", "react"],
    },
};

static REMIX: StackDef = StackDef {
    stack: Stack::Remix,
    scaffold: StepDef {
        name: "scaffold",
        banner: "Setting up a Remix project...",
        tool: Tool::Npx,
        args: &["create-remix@latest"],
    },
};

/// All stacks, in menu order.
pub static STACK_REGISTRY: &[&StackDef] = &[&REACT_VITE_EXPRESS, &REMIX];

pub fn stack_def(stack: Stack) -> &'static StackDef {
    match stack {
        Stack::ReactViteExpress => &REACT_VITE_EXPRESS,
        Stack::Remix => &REMIX,
    }
}

// ── Features ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct FeatureDef {
    pub feature: Feature,
    /// What gets set up, used in completion messages.
    pub label: &'static str,
    pub prompt: &'static str,
    /// Executed in order; the first failure halts the rest.
    pub steps: &'static [StepDef],
}

static DATABASE: FeatureDef = FeatureDef {
    feature: Feature::Database,
    label: "PostgreSQL and Prisma",
    prompt: "Would you like to add a PostgreSQL database with Docker and Prisma?",
    steps: &[
        StepDef {
            name: "docker-compose-up",
            banner: "Starting PostgreSQL with Docker Compose...",
            tool: Tool::Docker,
            args: &["compose", "up"],
        },
        StepDef {
            name: "install-prisma",
            banner: "Installing Prisma as a dev dependency...",
            tool: Tool::Npm,
            args: &["install", "prisma", "--save-dev"],
        },
    ],
};

static TESTING: FeatureDef = FeatureDef {
    feature: Feature::Testing,
    label: "Vitest",
    prompt: "Would you like to add testing with Vitest?",
    steps: &[StepDef {
        name: "install-vitest",
        banner: "Installing vitest...",
        tool: Tool::Npm,
        args: &["install", "-D", "vitest"],
    }],
};

/// All features, in prompt order.
pub static FEATURE_REGISTRY: &[&FeatureDef] = &[&DATABASE, &TESTING];

pub fn feature_def(feature: Feature) -> &'static FeatureDef {
    match feature {
        Feature::Database => &DATABASE,
        Feature::Testing => &TESTING,
    }
}

/// The scaffold step for `stack` under `toolchain`.
pub fn scaffold_step(stack: Stack, toolchain: &Toolchain) -> Step {
    stack_def(stack).scaffold.resolve(toolchain)
}

/// The ordered installer steps for `feature` under `toolchain`.
pub fn feature_steps(feature: Feature, toolchain: &Toolchain) -> Vec<Step> {
    feature_def(feature)
        .steps
        .iter()
        .map(|def| def.resolve(toolchain))
        .collect()
}

//! External command descriptions and their captured results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Tool;

/// One external process invocation: a program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// What a finished process left behind.
///
/// `output` is stdout followed by stderr. `status` is `None` when the
/// process was killed by a signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub status: Option<i32>,
    pub output: String,
}

impl CommandOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            output: output.into(),
        }
    }
}

/// Program names used for each collaborator role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toolchain {
    pub npx: String,
    pub npm: String,
    pub docker: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npx: Tool::Npx.as_str().into(),
            npm: Tool::Npm.as_str().into(),
            docker: Tool::Docker.as_str().into(),
        }
    }
}

impl Toolchain {
    pub fn program(&self, tool: Tool) -> &str {
        match tool {
            Tool::Npx => &self.npx,
            Tool::Npm => &self.npm,
            Tool::Docker => &self.docker,
        }
    }
}

/// A named command inside an installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    /// Progress line shown before the command runs.
    pub banner: String,
    pub command: CommandSpec,
}

impl Step {
    pub fn new(name: impl Into<String>, banner: impl Into<String>, command: CommandSpec) -> Self {
        Self {
            name: name.into(),
            banner: banner.into(),
            command,
        }
    }
}

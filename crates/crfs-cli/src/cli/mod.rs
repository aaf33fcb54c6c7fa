//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crfs_core::domain::Stack;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "create-react-fs",
    bin_name = "create-react-fs",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "A generator for React fullstack projects",
    long_about = "This CLI tool helps you set up a React fullstack project with various options.",
    after_help = "EXAMPLES:\n\
        \x20 create-react-fs\n\
        \x20 create-react-fs new --stack remix --database --testing\n\
        \x20 create-react-fs new --stack react-vite-express --dry-run\n\
        \x20 create-react-fs completions bash > ~/.local/share/bash-completion/completions/create-react-fs",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Without one, the interactive flow starts.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select a stack and optional features, then run the installers.
    #[command(
        visible_alias = "n",
        about = "Set up a new React fullstack project",
        after_help = "EXAMPLES:\n\
            \x20 create-react-fs new                                 # interactive\n\
            \x20 create-react-fs new --stack remix --testing\n\
            \x20 create-react-fs new --stack react-vite-express --database --dry-run"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 create-react-fs completions bash > ~/.local/share/bash-completion/completions/create-react-fs\n\
            \x20 create-react-fs completions zsh  > ~/.zfunc/_create-react-fs\n\
            \x20 create-react-fs completions fish > ~/.config/fish/completions/create-react-fs.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the configuration file.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 create-react-fs config init\n\
            \x20 create-react-fs config get toolchain.npm\n\
            \x20 create-react-fs config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `create-react-fs new`.
#[derive(Debug, Clone, Default, Args)]
pub struct NewArgs {
    /// Skip the prompts and use this stack.
    #[arg(
        short = 's',
        long = "stack",
        value_name = "STACK",
        value_enum,
        help = "Stack to set up (skips all prompts)"
    )]
    pub stack: Option<StackArg>,

    /// Add PostgreSQL via Docker Compose and Prisma.
    #[arg(long = "database", alias = "db", requires = "stack", help = "Add PostgreSQL with Docker and Prisma")]
    pub database: bool,

    /// Add Vitest.
    #[arg(long = "testing", requires = "stack", help = "Add testing with Vitest")]
    pub testing: bool,

    /// Print the commands that would run without spawning anything.
    #[arg(long = "dry-run", help = "Show the planned commands without running them")]
    pub dry_run: bool,
}

/// Stack choices accepted by `--stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StackArg {
    /// React with Vite and an Express backend.
    #[value(name = "react-vite-express", alias = "react")]
    ReactViteExpress,
    /// Remix.
    Remix,
}

impl From<StackArg> for Stack {
    fn from(arg: StackArg) -> Self {
        match arg {
            StackArg::ReactViteExpress => Stack::ReactViteExpress,
            StackArg::Remix => Stack::Remix,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `create-react-fs completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `create-react-fs config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.npm`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path to the default configuration file.
    Path,
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["create-react-fs"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_new_with_flags() {
        let cli = Cli::parse_from([
            "create-react-fs",
            "new",
            "--stack",
            "remix",
            "--database",
            "--testing",
        ]);
        let Some(Commands::New(args)) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.stack, Some(StackArg::Remix));
        assert!(args.database);
        assert!(args.testing);
        assert!(!args.dry_run);
    }

    #[test]
    fn new_alias_and_stack_alias() {
        let cli = Cli::parse_from(["create-react-fs", "n", "-s", "react"]);
        let Some(Commands::New(args)) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.stack, Some(StackArg::ReactViteExpress));
    }

    #[test]
    fn feature_flags_require_stack() {
        let result = Cli::try_parse_from(["create-react-fs", "new", "--database"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_stack_is_rejected() {
        let result = Cli::try_parse_from(["create-react-fs", "new", "--stack", "nextjs"]);
        assert!(result.is_err());
    }

    #[test]
    fn stack_arg_converts_to_domain() {
        assert_eq!(Stack::from(StackArg::Remix), Stack::Remix);
        assert_eq!(
            Stack::from(StackArg::ReactViteExpress).label(),
            "React Vite + Express"
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["create-react-fs", "--quiet", "--verbose", "new"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "create-react-fs",
            "new",
            "--stack",
            "remix",
            "--output-format",
            "json",
            "--log-file",
            "run.log",
        ]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert!(cli.global.log_file.is_some());
    }
}

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// pypans has no subcommands: one flag starts composition, the others are
/// maintenance actions. With no action flag the help text is printed.
#[derive(Debug, Parser)]
#[command(
    name     = "pypans",
    bin_name = "pypans",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Python project scaffolding from a fixed template catalog",
    long_about = "pypans composes a ready-to-use Python project in the current \
                  directory: an application package, a tests package, and a \
                  full set of packaging, linting, and CI files.",
    after_help = "EXAMPLES:\n\
        \x20 pypans --new\n\
        \x20 pypans --new --name bomber --username \"Ada Lovelace\" --email ada@example.com --yes\n\
        \x20 pypans --init-config\n\
        \x20 pypans --completions bash > ~/.local/share/bash-completion/completions/pypans",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project composition.
    #[command(flatten)]
    pub compose: ComposeArgs,

    /// Write the default configuration file.
    #[arg(
        long = "init-config",
        conflicts_with_all = ["new", "completions"],
        help = "Create a default configuration file"
    )]
    pub init_config: bool,

    /// Overwrite an existing configuration file.
    #[arg(
        long = "force",
        requires = "init_config",
        help = "Overwrite existing configuration (with --init-config)"
    )]
    pub force: bool,

    /// Print a shell completion script.
    #[arg(
        long = "completions",
        value_enum,
        value_name = "SHELL",
        conflicts_with = "new",
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

// ── compose ───────────────────────────────────────────────────────────────────

/// Arguments for project composition.
///
/// Every prompt can be pre-answered so that composition runs unattended.
#[derive(Debug, Args)]
pub struct ComposeArgs {
    /// Compose a new project in the current directory.
    #[arg(short = 'n', long = "new", help = "Compose a new project")]
    pub new: bool,

    /// Project (package) name.
    #[arg(
        long = "name",
        value_name = "NAME",
        requires = "new",
        help = "Package name (skips the prompt)"
    )]
    pub name: Option<String>,

    /// Author display name.
    #[arg(
        long = "username",
        value_name = "USERNAME",
        requires = "new",
        help = "Author name (skips the prompt)"
    )]
    pub username: Option<String>,

    /// Author email.
    #[arg(
        long = "email",
        value_name = "EMAIL",
        requires = "new",
        help = "Author email (skips the prompt)"
    )]
    pub email: Option<String>,

    /// Answer yes/no decisions from configuration instead of prompting.
    #[arg(
        short = 'y',
        long = "yes",
        requires = "new",
        help = "Skip yes/no prompts and use configured answers"
    )]
    pub yes: bool,

    /// Template root override.
    #[arg(
        long = "templates",
        value_name = "DIR",
        requires = "new",
        help = "Directory holding the template catalog"
    )]
    pub templates: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skel",
    bin_name = "skel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9b4} Staged project skeleton generator",
    long_about = "Skel instantiates a new project from the bundled skeleton \
                  template, renaming the placeholder package to your project \
                  name. The tree is prepared in an isolated staging directory \
                  so a failure or a 'no' never leaves a half-written project.",
    after_help = "EXAMPLES:\n\
        \x20 skel new myapp            # create ./myapp\n\
        \x20 skel new                  # scaffold into the current directory\n\
        \x20 skel new myapp --dry-run  # preview without writing\n\
        \x20 skel completions bash > /usr/share/bash-completion/completions/skel",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from the bundled template.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 skel new myapp\n\
            \x20 skel new myapp --yes\n\
            \x20 skel new --template-dir ./my-template"
    )]
    New(NewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skel completions bash > ~/.local/share/bash-completion/completions/skel\n\
            \x20 skel completions zsh  > ~/.zfunc/_skel\n\
            \x20 skel completions fish > ~/.config/fish/completions/skel.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `skel new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Omit it to scaffold into the current directory,
    /// using the directory's name as the package name.
    #[arg(value_name = "NAME", help = "Project name (omit for in-place scaffold)")]
    pub name: Option<String>,

    /// Template directory override.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Use this template tree instead of the bundled one"
    )]
    pub template_dir: Option<PathBuf>,

    /// Skip the overwrite confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Answer the overwrite confirmation with yes"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skel completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_with_name() {
        let cli = Cli::parse_from(["skel", "new", "myapp"]);
        match cli.command {
            Commands::New(args) => assert_eq!(args.name.as_deref(), Some("myapp")),
            _ => panic!("expected New command"),
        }
    }

    #[test]
    fn parse_new_without_name_is_in_place() {
        let cli = Cli::parse_from(["skel", "new"]);
        match cli.command {
            Commands::New(args) => assert!(args.name.is_none()),
            _ => panic!("expected New command"),
        }
    }

    #[test]
    fn new_alias_n_works() {
        let cli = Cli::parse_from(["skel", "n", "myapp", "--yes"]);
        match cli.command {
            Commands::New(args) => assert!(args.yes),
            _ => panic!("expected New command"),
        }
    }

    #[test]
    fn template_dir_flag_parses() {
        let cli = Cli::parse_from(["skel", "new", "myapp", "--template-dir", "/tpl"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.template_dir, Some(PathBuf::from("/tpl")));
            }
            _ => panic!("expected New command"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["skel", "--quiet", "--verbose", "new", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_requires_shell() {
        assert!(Cli::try_parse_from(["skel", "completions"]).is_err());
        assert!(Cli::try_parse_from(["skel", "completions", "zsh"]).is_ok());
    }
}

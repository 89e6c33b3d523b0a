//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - setup: create + init + add in one step
//! - create: create and initialize a remote repository
//! - init: initialize an existing remote directory
//! - add: register a remote with the local repository
//! - check: verify a remote exists and is accessible
//! - remove: delete a remote repository
//! - show: print the parsed repository reference
//! - completions: shell completion generation

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod add;
pub mod check;
pub mod completions;
pub mod create;
pub mod init;
pub mod remove;
pub mod setup;
pub mod show;

pub use add::{AddArgs, AddOpts};
pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use create::CreateArgs;
pub use init::{InitArgs, InitOpts};
pub use remove::RemoveArgs;
pub use setup::SetupArgs;
pub use show::ShowArgs;

/// ygit - remote git repository manager
#[derive(Parser, Debug)]
#[command(
    name = "ygit",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Create, initialize, inspect and remove remote git repositories",
    long_about = "ygit wraps the remote half of git repository management: it creates, \
                  initializes, checks and removes repositories reachable over ssh or on the \
                  local filesystem, and can register them as remotes of the local repository.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ygit setup user@host.xz:/srv/git/proj   \x1b[90m# create, init and add as remote\x1b[0m\n   \
                  ygit create host.xz:repos/proj.git       \x1b[90m# create a bare repository over ssh\x1b[0m\n   \
                  ygit check /srv/git/proj.git             \x1b[90m# verify a local repository path\x1b[0m\n   \
                  ygit add ssh://host.xz/srv/git/proj -n backup\n   \
                  ygit show https://host.xz/path/to/repo --json\n\n\
                  "
)]
pub struct Cli {
    /// Print external commands without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show external commands as they are executed
    #[arg(long, short = 'x', global = true)]
    pub show_commands: bool,

    /// Suppress ygit wrapper messages
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Suppress all output, including git and ssh subprocess output
    #[arg(long, short = 'Q', global = true)]
    pub all_quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create and initialize a repository, then add it as a remote
    Setup(SetupArgs),

    /// Create a new directory at URL and initialize it as a repository
    Create(CreateArgs),

    /// Initialize an existing directory at URL as a repository
    Init(InitArgs),

    /// Add URL as a remote of the local repository
    Add(AddArgs),

    /// Check that URL is an existing, accessible directory
    Check(CheckArgs),

    /// Recursively remove the repository directory at URL
    Remove(RemoveArgs),

    /// Parse URL and print the classified repository reference
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_check() {
        let cli = Cli::try_parse_from(["ygit", "check", "host.xz:repos/proj"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert_eq!(args.url, "host.xz:repos/proj"),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["ygit", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["ygit", "-q", "-x", "--dry-run", "check", "/srv/git/x"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.show_commands);
        assert!(cli.dry_run);
        assert!(!cli.all_quiet);
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["ygit", "check", "/srv/git/x", "-Q"]).unwrap();
        assert!(cli.all_quiet);
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["ygit", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["ygit"]).is_err());
    }
}

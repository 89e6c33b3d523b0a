//! Init command implementation
//!
//! Initializes an already-existing remote directory as a repository.
//! Unlike create, the directory must exist beforehand.

use crate::cli::InitArgs;
use crate::error::Result;
use crate::remote::parser;
use crate::transport::Transport;
use crate::ui::Messenger;

/// Run init command
pub fn run(ui: &Messenger, args: InitArgs) -> Result<()> {
    let reference = parser::parse(&args.url)?;

    super::check::check(&reference, ui)?;

    let transport = Transport::for_reference(&reference, "repository initialization")?;
    ui.status(&format!(
        "Initializing repository: {}",
        transport.location()
    ));
    transport.init_repository(&args.init.to_options(), ui)?;
    ui.status("Repository initialized.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::error::YgitError;
    use clap::Parser;
    use tempfile::TempDir;

    fn init_args(url: &str) -> InitArgs {
        let cli = Cli::try_parse_from(["ygit", "init", url]).unwrap();
        match cli.command {
            Commands::Init(args) => args,
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_init_existing_directory() {
        let temp = TempDir::new().unwrap();
        let repo_dir = temp.path().join("proj.git");
        std::fs::create_dir_all(&repo_dir).unwrap();

        let args = init_args(&repo_dir.display().to_string());
        run(&Messenger::new(true, false, false, false), args).unwrap();

        let repo = git2::Repository::open(&repo_dir).unwrap();
        assert!(repo.is_bare());
    }

    #[test]
    fn test_init_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let args = init_args(&temp.path().join("missing").display().to_string());
        let err = run(&Messenger::new(true, false, false, false), args).unwrap_err();
        assert!(matches!(err, YgitError::RemoteNotFound { .. }));
    }
}

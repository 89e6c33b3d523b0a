//! Local repository operations
//!
//! The `add` command records the parsed remote in the local repository:
//! it registers the remote (optionally in mirror mode) and points the
//! master branch at it. Everything here goes through libgit2; the remote
//! URL itself is stored verbatim, exactly as the user spelled it.

use std::path::Path;

use git2::Repository;

use crate::error::{Result, YgitError};
use crate::ui::Messenger;

/// Locate the repository enclosing `start_dir`
pub fn discover(start_dir: &Path) -> Result<Repository> {
    Repository::discover(start_dir).map_err(|_| YgitError::NotInGitRepository)
}

/// Register `url` as a remote named `name` and configure the master
/// branch to track it.
pub fn add_remote(
    local_repo: &Path,
    name: &str,
    url: &str,
    mirror: bool,
    ui: &Messenger,
) -> Result<()> {
    let repo = discover(local_repo)?;

    let mirror_flag = if mirror { "--mirror " } else { "" };
    ui.command(&format!("git remote add {mirror_flag}{name} '{url}'"));
    ui.command(&format!("git config branch.master.remote '{name}'"));
    ui.command("git config branch.master.merge 'refs/heads/master'");
    if ui.dry_run() {
        return Ok(());
    }

    let result = if mirror {
        // Mirror remotes fetch everything into the same namespace, like
        // `git remote add --mirror`
        repo.remote_with_fetch(name, url, "+refs/*:refs/*")
    } else {
        repo.remote(name, url)
    };
    result.map_err(|e| map_remote_error(name, &e))?;

    let mut config = repo.config()?;
    if mirror {
        config.set_bool(&format!("remote.{name}.mirror"), true)?;
    }
    config.set_str("branch.master.remote", name)?;
    config.set_str("branch.master.merge", "refs/heads/master")?;

    Ok(())
}

fn map_remote_error(name: &str, err: &git2::Error) -> YgitError {
    if err.code() == git2::ErrorCode::Exists || err.message().contains("exists") {
        YgitError::RemoteAddFailed {
            name: name.to_string(),
            reason: err.message().to_string(),
        }
    } else {
        YgitError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

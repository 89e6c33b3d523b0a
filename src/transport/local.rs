//! Remote operations against the local filesystem
//!
//! `file` protocol locations are plain directories on this machine.
//! Filesystem checks go through `std::fs`; repository initialization
//! goes through libgit2 rather than shelling out to git.

use std::path::PathBuf;

use git2::{RepositoryInitMode, RepositoryInitOptions};

use crate::error::{Result, YgitError};
use crate::transport::InitOptions;
use crate::ui::Messenger;

pub struct LocalTransport {
    path: PathBuf,
}

impl LocalTransport {
    pub fn new(resolved_path: &str) -> Self {
        Self {
            path: expand_home(resolved_path),
        }
    }

    pub fn exists(&self) -> Result<bool> {
        Ok(self.path.exists())
    }

    pub fn is_directory(&self) -> Result<bool> {
        Ok(self.path.is_dir())
    }

    pub fn make_directory(&self, ui: &Messenger) -> Result<()> {
        ui.command(&format!("mkdir -p {}", self.path.display()));
        if ui.dry_run() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.path)?;
        Ok(())
    }

    pub fn init_repository(&self, init: &InitOptions, ui: &Messenger) -> Result<()> {
        let bare_flag = if init.bare { " --bare" } else { "" };
        ui.command(&format!(
            "git init{} --shared={} {}",
            bare_flag,
            init.shared,
            self.path.display()
        ));
        if ui.dry_run() {
            return Ok(());
        }

        let mut opts = RepositoryInitOptions::new();
        opts.bare(init.bare);
        opts.no_reinit(false);
        opts.mode(shared_mode(&init.shared)?);
        git2::Repository::init_opts(&self.path, &opts)?;
        Ok(())
    }

    pub fn remove(&self, ui: &Messenger) -> Result<()> {
        ui.command(&format!("rm -r {}", self.path.display()));
        if ui.dry_run() {
            return Ok(());
        }
        std::fs::remove_dir_all(&self.path)?;
        Ok(())
    }

    pub fn describe_remove(&self) -> String {
        format!("rm -r {}", self.path.display())
    }

    pub fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Map a `--shared` mode string onto libgit2's init modes.
///
/// Accepts the modes `git init --shared` documents: false/umask,
/// true/group, all/world/everybody, or an octal permission value.
fn shared_mode(shared: &str) -> Result<RepositoryInitMode> {
    match shared {
        "umask" | "false" => Ok(RepositoryInitMode::SHARED_UMASK),
        "group" | "true" => Ok(RepositoryInitMode::SHARED_GROUP),
        "all" | "world" | "everybody" => Ok(RepositoryInitMode::SHARED_ALL),
        other => {
            let bits = u32::from_str_radix(other, 8).map_err(|_| YgitError::GitOperationFailed {
                message: format!("unknown --shared mode '{other}'"),
            })?;
            Ok(RepositoryInitMode::from_bits_truncate(bits))
        }
    }
}

/// Expand a leading `~/` to the user's home directory. `~user` forms are
/// left untouched; the SSH transport handles those on the remote side.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

//! Remote operations over the ssh binary
//!
//! Commands run on the remote host through `ssh [-p PORT] [user@]host
//! <command>`. Authentication is delegated entirely to ssh's own
//! configuration (keys, agent, ssh_config). Repository paths never
//! contain whitespace (the classifier rejects it), and they are passed
//! unquoted so that `~`-relative paths expand in the remote shell.

use std::process::{Command, Stdio};

use crate::error::{Result, YgitError};
use crate::remote::RepositoryReference;
use crate::transport::InitOptions;
use crate::ui::Messenger;

pub struct SshTransport {
    /// `user@host`, or bare host when no user was given (ssh then picks
    /// its own default, same as running ssh interactively)
    target: String,
    port: Option<String>,
    path: String,
}

impl SshTransport {
    pub fn new(reference: &RepositoryReference) -> Self {
        let host = reference.host.clone().unwrap_or_default();
        let target = match &reference.user {
            Some(user) => format!("{user}@{host}"),
            None => host,
        };
        Self {
            target,
            port: reference.port.clone(),
            path: reference.resolved_path.clone(),
        }
    }

    fn command(&self, remote_command: &str) -> Command {
        let mut cmd = Command::new("ssh");
        if let Some(port) = &self.port {
            cmd.arg("-p").arg(port);
        }
        cmd.arg(&self.target).arg(remote_command);
        cmd
    }

    fn display(&self, remote_command: &str) -> String {
        match &self.port {
            Some(port) => format!("ssh -p {} {} '{}'", port, self.target, remote_command),
            None => format!("ssh {} '{}'", self.target, remote_command),
        }
    }

    /// Run a read-only remote command and capture its output. Read-only
    /// probes run even under --dry-run, mirroring local stat calls.
    fn probe(&self, remote_command: &str, ui: &Messenger) -> Result<std::process::Output> {
        ui.command(&self.display(remote_command));
        self.command(remote_command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| YgitError::TransportFailed {
                message: format!("failed to run ssh: {e}"),
            })
    }

    /// Run a mutating remote command; skipped under --dry-run.
    fn execute(&self, remote_command: &str, ui: &Messenger) -> Result<()> {
        ui.command(&self.display(remote_command));
        if ui.dry_run() {
            return Ok(());
        }

        let stdout = if ui.subprocess_quiet() {
            Stdio::null()
        } else {
            Stdio::inherit()
        };
        let status = self
            .command(remote_command)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .status()
            .map_err(|e| YgitError::TransportFailed {
                message: format!("failed to run ssh: {e}"),
            })?;

        if !status.success() {
            return Err(YgitError::TransportFailed {
                message: format!("'{}' exited with {}", self.display(remote_command), status),
            });
        }
        Ok(())
    }

    pub fn exists(&self, ui: &Messenger) -> Result<bool> {
        let output = self.probe(&format!("test -e {} && echo 1", self.path), ui)?;
        // test(1) reports absence through its exit code, so stderr output
        // means the connection itself failed
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            return Err(YgitError::TransportFailed {
                message: stderr.trim().to_string(),
            });
        }
        Ok(!output.stdout.is_empty())
    }

    pub fn is_directory(&self, ui: &Messenger) -> Result<bool> {
        let output = self.probe(&format!("cd {}", self.path), ui)?;
        Ok(output.status.success())
    }

    pub fn make_directory(&self, ui: &Messenger) -> Result<()> {
        self.execute(&format!("mkdir -p {}", self.path), ui)
    }

    pub fn init_repository(&self, init: &InitOptions, ui: &Messenger) -> Result<()> {
        let mut git_init = String::from("git init");
        if init.bare {
            git_init.push_str(" --bare");
        }
        git_init.push_str(&format!(" --shared={}", init.shared));

        let remote_command = format!(
            "cd {} && {} && git update-server-info",
            self.path, git_init
        );
        self.execute(&remote_command, ui)
    }

    pub fn remove(&self, ui: &Messenger) -> Result<()> {
        self.execute(&format!("rm -r {}", self.path), ui)
    }

    pub fn describe_remove(&self) -> String {
        self.display(&format!("rm -r {}", self.path))
    }

    pub fn location(&self) -> String {
        format!("{}:{}", self.target, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::parser::parse;

    #[test]
    fn test_target_includes_user_when_given() {
        let reference = parse("alice@host.xz:/srv/git/repo").unwrap();
        let transport = SshTransport::new(&reference);
        assert_eq!(transport.target, "alice@host.xz");
        assert_eq!(transport.path, "/srv/git/repo.git");
    }

    #[test]
    fn test_target_without_user() {
        let reference = parse("ssh://host.xz/srv/git/repo.git").unwrap();
        let transport = SshTransport::new(&reference);
        assert_eq!(transport.target, "host.xz");
        assert_eq!(transport.port, None);
    }

    #[test]
    fn test_display_with_port() {
        let reference = parse("ssh://alice@host.xz:2222/srv/git/repo.git").unwrap();
        let transport = SshTransport::new(&reference);
        assert_eq!(
            transport.display("mkdir -p /srv/git/repo.git"),
            "ssh -p 2222 alice@host.xz 'mkdir -p /srv/git/repo.git'"
        );
    }

    #[test]
    fn test_describe_remove_names_the_path() {
        let reference = parse("host.xz:path/to/repo").unwrap();
        let transport = SshTransport::new(&reference);
        assert!(transport.describe_remove().contains("rm -r path/to/repo.git"));
    }

    #[test]
    fn test_location() {
        let reference = parse("alice@host.xz:~/repo").unwrap();
        let transport = SshTransport::new(&reference);
        assert_eq!(transport.location(), "alice@host.xz:~/repo.git");
    }
}

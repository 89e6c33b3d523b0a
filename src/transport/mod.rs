//! Per-protocol remote repository operations
//!
//! The commands (check, create, init, remove) need a handful of
//! primitive operations against the repository location: existence and
//! directory checks, directory creation, repository initialization, and
//! recursive removal. `ssh` locations run these through the `ssh` binary;
//! `file` locations touch the local filesystem directly and initialize
//! repositories through libgit2.

pub mod local;
pub mod ssh;

use crate::error::{Result, YgitError};
use crate::remote::{Protocol, RepositoryReference};
use crate::ui::Messenger;

pub use local::LocalTransport;
pub use ssh::SshTransport;

/// How a new repository should be initialized
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Initialize without a working tree
    pub bare: bool,
    /// git's core.sharedRepository mode (umask, group, all, or octal)
    pub shared: String,
}

/// Dispatch for the two protocols that support remote operations
pub enum Transport {
    Ssh(SshTransport),
    Local(LocalTransport),
}

impl Transport {
    /// Build the transport for a reference, or refuse protocols that
    /// cannot be driven (`operation` names the attempt for the error).
    pub fn for_reference(
        reference: &RepositoryReference,
        operation: &'static str,
    ) -> Result<Self> {
        match reference.protocol {
            Protocol::Ssh => Ok(Self::Ssh(SshTransport::new(reference))),
            Protocol::File => Ok(Self::Local(LocalTransport::new(&reference.resolved_path))),
            other => Err(YgitError::UnsupportedProtocol {
                protocol: other.to_string(),
                operation,
            }),
        }
    }

    /// Does anything exist at the repository path?
    pub fn exists(&self, ui: &Messenger) -> Result<bool> {
        match self {
            Self::Ssh(t) => t.exists(ui),
            Self::Local(t) => t.exists(),
        }
    }

    /// Is the repository path an accessible directory?
    pub fn is_directory(&self, ui: &Messenger) -> Result<bool> {
        match self {
            Self::Ssh(t) => t.is_directory(ui),
            Self::Local(t) => t.is_directory(),
        }
    }

    /// Create the repository directory (and parents)
    pub fn make_directory(&self, ui: &Messenger) -> Result<()> {
        match self {
            Self::Ssh(t) => t.make_directory(ui),
            Self::Local(t) => t.make_directory(ui),
        }
    }

    /// Initialize a repository in the (existing) directory
    pub fn init_repository(&self, init: &InitOptions, ui: &Messenger) -> Result<()> {
        match self {
            Self::Ssh(t) => t.init_repository(init, ui),
            Self::Local(t) => t.init_repository(init, ui),
        }
    }

    /// Recursively remove the repository directory
    pub fn remove(&self, ui: &Messenger) -> Result<()> {
        match self {
            Self::Ssh(t) => t.remove(ui),
            Self::Local(t) => t.remove(ui),
        }
    }

    /// The command `remove` is about to run, for the confirmation prompt
    pub fn describe_remove(&self) -> String {
        match self {
            Self::Ssh(t) => t.describe_remove(),
            Self::Local(t) => t.describe_remove(),
        }
    }

    /// Human-readable location of the repository
    pub fn location(&self) -> String {
        match self {
            Self::Ssh(t) => t.location(),
            Self::Local(t) => t.location(),
        }
    }
}

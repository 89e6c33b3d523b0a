//! Error types and handling for ygit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ygit operations
#[derive(Error, Diagnostic, Debug)]
pub enum YgitError {
    // URL classification errors
    #[error("Invalid repository URL: {input:?}")]
    #[diagnostic(
        code(ygit::url::invalid_input),
        help("Repository URLs must be non-empty and contain no whitespace")
    )]
    InvalidInput { input: String },

    #[error("Protocol '{protocol}' is not supported for {operation}")]
    #[diagnostic(
        code(ygit::url::unsupported_protocol),
        help("Remote repository operations work over the ssh and file protocols only")
    )]
    UnsupportedProtocol {
        protocol: String,
        operation: &'static str,
    },

    // Remote repository errors
    #[error("Repository already exists at: {path}")]
    #[diagnostic(
        code(ygit::remote::exists),
        help("Remove the repository first, or pick another location")
    )]
    RemoteExists { path: String },

    #[error("Repository not found at: {url}")]
    #[diagnostic(code(ygit::remote::not_found))]
    RemoteNotFound { url: String },

    #[error("Repository path is not an accessible directory: {path}")]
    #[diagnostic(code(ygit::remote::not_a_directory))]
    RemoteNotADirectory { path: String },

    #[error("Remote command failed: {message}")]
    #[diagnostic(
        code(ygit::transport::failed),
        help("Check that the host is reachable and the path is writable")
    )]
    TransportFailed { message: String },

    // Local repository errors
    #[error("Not in a git repository")]
    #[diagnostic(
        code(ygit::git::not_a_repository),
        help("Run 'git init' in the local repository first, or pass --local-repo")
    )]
    NotInGitRepository,

    #[error("Failed to add remote '{name}': {reason}")]
    #[diagnostic(
        code(ygit::git::remote_add_failed),
        help("Maybe a remote with this name is already defined?")
    )]
    RemoteAddFailed { name: String, reason: String },

    #[error("Git operation failed: {message}")]
    #[diagnostic(code(ygit::git::operation_failed))]
    GitOperationFailed { message: String },

    // Everything else
    #[error("IO error: {message}")]
    #[diagnostic(code(ygit::fs::io_error))]
    IoError { message: String },

    #[error("Cancelled")]
    #[diagnostic(code(ygit::cancelled))]
    Cancelled,
}

impl From<std::io::Error> for YgitError {
    fn from(err: std::io::Error) -> Self {
        YgitError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for YgitError {
    fn from(err: git2::Error) -> Self {
        YgitError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, YgitError>;

//! Normalized repository reference
//!
//! `RepositoryReference` is the parsed form of a repository location
//! string. It is constructed once by [`parser::parse`](super::parser::parse)
//! and immutable afterwards.

use std::fmt;

/// Transport used to reach a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Ssh,
    Git,
    Http,
    Https,
    Rsync,
    File,
}

impl Protocol {
    /// Map a URL scheme token to a protocol, if it is one we know
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "ssh" => Some(Self::Ssh),
            "git" => Some(Self::Git),
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            "rsync" => Some(Self::Rsync),
            "file" => Some(Self::File),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ssh => "ssh",
            Self::Git => "git",
            Self::Http => "http",
            Self::Https => "https",
            Self::Rsync => "rsync",
            Self::File => "file",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed repository location
///
/// `name` always carries a `.git` suffix; `basename` is `name` with that
/// suffix stripped. `user` and `port` are present only when the input
/// spelled them out.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RepositoryReference {
    /// Original input, unmodified
    pub raw_url: String,

    /// Transport classification
    pub protocol: Protocol,

    /// Authentication principal, for `user@host` forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Network host, for non-local protocols
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Explicit port, if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Parent path component of the repository location
    pub directory: String,

    /// Final path segment, normalized to end in `.git`
    pub name: String,

    /// `name` without the `.git` suffix
    pub basename: String,

    /// `directory` and `name` rejoined
    pub resolved_path: String,
}

impl RepositoryReference {
    /// Default remote name when `add` is not given one explicitly:
    /// the host for network protocols, the repository name for local paths.
    pub fn default_remote_name(&self) -> &str {
        match &self.host {
            Some(host) => host,
            None => &self.name,
        }
    }
}

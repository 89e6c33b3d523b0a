//! Repository URL parsing
//!
//! Classification walks an ordered cascade of pattern tests and the
//! first match wins:
//!
//! 1. `file://` URI (kept ahead of the generic scheme test so that
//!    `file://~/...` keeps its home-relative path)
//! 2. general transport URI `scheme://[user@]host[:port]/path`
//! 3. SCP-like `[user@]host:path` (no scheme, bare colon)
//! 4. fallback: the whole input is a local filesystem path
//!
//! The cascade is exhaustive for any non-empty, whitespace-free input;
//! anything that resembles no recognized transport is treated as a
//! literal path rather than rejected. Only empty or whitespace-bearing
//! input fails.

use crate::error::{Result, YgitError};
use crate::remote::reference::{Protocol, RepositoryReference};

/// Separator used when splitting and rejoining repository paths.
///
/// Every recognized URL form is slash-delimited, so paths are normalized
/// to `/` on all platforms rather than following the host separator.
const SEP: char = '/';

/// Parse a repository location string into a [`RepositoryReference`]
pub fn parse(raw: &str) -> Result<RepositoryReference> {
    if raw.is_empty() || raw.contains(' ') || raw.contains('\t') {
        return Err(YgitError::InvalidInput {
            input: raw.to_string(),
        });
    }

    if let Some(rest) = raw.strip_prefix("file://") {
        return Ok(build(raw, Protocol::File, None, None, None, rest));
    }

    if let Some(uri) = split_transport_uri(raw) {
        if let Some(protocol) = Protocol::from_scheme(uri.scheme) {
            let path = if !uri.path.is_empty() && !uri.path.starts_with('~') {
                format!("/{}", uri.path)
            } else {
                uri.path.to_string()
            };
            return Ok(build(
                raw,
                protocol,
                uri.user,
                Some(uri.host.to_string()),
                uri.port,
                &path,
            ));
        }
        // Structurally a transport URI, but an unrecognized scheme.
        // Degrade straight to the path fallback instead of letting the
        // looser host:path test misread the scheme token as a host.
        return Ok(build(raw, Protocol::File, None, None, None, raw));
    }

    if let Some(scp) = split_scp_like(raw) {
        return Ok(build(
            raw,
            Protocol::Ssh,
            scp.user,
            Some(scp.host.to_string()),
            None,
            scp.path,
        ));
    }

    // Assume a plain path
    Ok(build(raw, Protocol::File, None, None, None, raw))
}

/// Pieces of a `scheme://[user@]host[:port]/path` URI
struct TransportUri<'a> {
    scheme: &'a str,
    user: Option<String>,
    host: &'a str,
    port: Option<String>,
    /// Path with the leading slash separators already consumed
    path: &'a str,
}

/// Pieces of a `[user@]host:path` address
struct ScpLike<'a> {
    user: Option<String>,
    host: &'a str,
    path: &'a str,
}

fn is_scheme_token(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_host_token(host: &str) -> bool {
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

/// Try the general transport-URI pattern. Returns `None` when the input
/// does not have that shape so the cascade can keep going.
fn split_transport_uri(input: &str) -> Option<TransportUri<'_>> {
    let (scheme, rest) = input.split_once("://")?;
    if !is_scheme_token(scheme) {
        return None;
    }

    let (authority, path) = match rest.find(SEP) {
        Some(pos) => (&rest[..pos], &rest[pos..]),
        None => (rest, ""),
    };

    let (user, host_port) = match authority.rsplit_once('@') {
        Some((user, host_port)) => {
            if user.is_empty() {
                return None;
            }
            (Some(user.to_string()), host_port)
        }
        None => (None, authority),
    };

    let (host, port) = match host_port.split_once(':') {
        Some((host, port)) => {
            if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            (host, Some(port.to_string()))
        }
        None => (host_port, None),
    };

    if !is_host_token(host) {
        return None;
    }

    Some(TransportUri {
        scheme,
        user,
        host,
        port,
        path: path.trim_start_matches(SEP),
    })
}

/// Try the SCP-like pattern: a host token and a path separated by a
/// bare colon, with an optional `user@` prefix.
fn split_scp_like(input: &str) -> Option<ScpLike<'_>> {
    let (before, path) = input.split_once(':')?;

    let (user, host) = match before.rsplit_once('@') {
        Some((user, host)) => {
            if user.is_empty() {
                return None;
            }
            (Some(user.to_string()), host)
        }
        None => (None, before),
    };

    if !is_host_token(host) {
        return None;
    }

    Some(ScpLike { user, host, path })
}

fn build(
    raw: &str,
    protocol: Protocol,
    user: Option<String>,
    host: Option<String>,
    port: Option<String>,
    path: &str,
) -> RepositoryReference {
    let (directory, name, basename, resolved_path) = decompose(path);
    RepositoryReference {
        raw_url: raw.to_string(),
        protocol,
        user,
        host,
        port,
        directory,
        name,
        basename,
        resolved_path,
    }
}

/// Split a repository path into directory / name / basename, forcing a
/// `.git` suffix onto the final segment. A single trailing separator is
/// insignificant. An empty path degenerates to the bare `.git` name
/// with an empty directory and basename.
fn decompose(path: &str) -> (String, String, String, String) {
    let path = path.strip_suffix(SEP).unwrap_or(path);

    let (directory, last) = match path.rsplit_once(SEP) {
        Some(("", last)) => (SEP.to_string(), last),
        Some((dir, last)) => (dir.to_string(), last),
        None => (String::new(), path),
    };

    let name = if last.ends_with(".git") {
        last.to_string()
    } else {
        format!("{last}.git")
    };
    let basename = name
        .strip_suffix(".git")
        .unwrap_or(name.as_str())
        .to_string();

    let resolved_path = if directory.is_empty() {
        name.clone()
    } else if directory.ends_with(SEP) {
        format!("{directory}{name}")
    } else {
        format!("{directory}{SEP}{name}")
    };

    (directory, name, basename, resolved_path)
}

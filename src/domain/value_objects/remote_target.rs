//! Remote target value object - a sync destination.
//!
//! A target is either `host:path` (pushed over the remote shell) or a bare
//! local directory path.

use std::fmt;

/// A parsed sync destination.
///
/// Invariant: when `host` is present, `remote_path` is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteTarget {
    raw: String,
    host: Option<String>,
    remote_path: Option<String>,
}

impl RemoteTarget {
    /// Parse a configured target string.
    ///
    /// Everything before the first `:` is the host, everything after it the
    /// remote path. Strings without a colon are local directory targets.
    /// Returns `None` only for strings that can never be a destination: blank
    /// input, an empty host (`:path`) or an empty remote path (`host:`).
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        match raw.split_once(':') {
            Some((host, path)) => {
                if host.is_empty() || path.is_empty() {
                    return None;
                }
                Some(Self {
                    raw: raw.to_string(),
                    host: Some(host.to_string()),
                    remote_path: Some(path.to_string()),
                })
            }
            None => Some(Self {
                raw: raw.to_string(),
                host: None,
                remote_path: None,
            }),
        }
    }

    /// The string exactly as configured
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Remote host, `None` for local targets
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Path on the remote host, `None` for local targets
    pub fn remote_path(&self) -> Option<&str> {
        self.remote_path.as_deref()
    }

    pub fn is_remote(&self) -> bool {
        self.host.is_some()
    }

    /// The directory that must exist before a workspace sync.
    ///
    /// For remote targets this is the path on the host; for local targets
    /// it is the raw string itself.
    pub fn directory(&self) -> &str {
        self.remote_path.as_deref().unwrap_or(&self.raw)
    }
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

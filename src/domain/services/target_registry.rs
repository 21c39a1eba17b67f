//! Target Registry
//!
//! Holds the configured target strings and decides which one applies when
//! the session has no explicit choice.

use crate::domain::value_objects::RemoteTarget;
use crate::error::{SyncError, SyncResult};

/// Configured remote targets, in configuration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegistry {
    configured: Vec<String>,
}

impl TargetRegistry {
    pub fn new(configured: Vec<String>) -> Self {
        Self { configured }
    }

    /// The raw configured strings (empty when unset)
    pub fn list_configured(&self) -> &[String] {
        &self.configured
    }

    /// Parse a target string, turning the unusable cases into an error
    pub fn validate(raw: &str) -> SyncResult<RemoteTarget> {
        RemoteTarget::parse(raw).ok_or_else(|| SyncError::InvalidTarget {
            raw: raw.to_string(),
        })
    }

    /// The implicit target when nothing was chosen.
    ///
    /// Only a single configured target is an implicit default. With several
    /// the user has to pick one explicitly.
    pub fn resolve_default(&self) -> SyncResult<RemoteTarget> {
        match self.configured.as_slice() {
            [] => Err(SyncError::NoTargetConfigured),
            [only] => Self::validate(only),
            many => Err(SyncError::AmbiguousTarget { count: many.len() }),
        }
    }

    /// Configured entries that cannot be parsed
    pub fn invalid_entries(&self) -> Vec<&str> {
        self.configured
            .iter()
            .filter(|raw| RemoteTarget::parse(raw).is_none())
            .map(String::as_str)
            .collect()
    }
}

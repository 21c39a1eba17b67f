//! Session State Store
//!
//! Owns the one piece of mutable engine state: the chosen target and the
//! auto-sync flag. The store lives on the event loop and is not `Send`;
//! transfers only ever see snapshots.

use serde_json::Value;
use tracing::warn;

use crate::domain::ports::{MemoryStateBackend, StateBackend};
use crate::domain::value_objects::RemoteTarget;

/// Keys held by the session store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    CurrentTarget,
    AutoSyncEnabled,
}

impl SessionKey {
    pub const ALL: [SessionKey; 2] = [SessionKey::CurrentTarget, SessionKey::AutoSyncEnabled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentTarget => "currentTarget",
            Self::AutoSyncEnabled => "autoSyncEnabled",
        }
    }
}

/// Snapshot of the session, read at call time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_target: Option<RemoteTarget>,
    pub auto_sync_enabled: bool,
}

/// Process-lifetime key/value store for session state
pub struct SessionStore {
    backend: Box<dyn StateBackend>,
}

impl SessionStore {
    /// Open a store over `backend`, discarding whatever an earlier session
    /// left behind. Every session starts with no target and auto-sync off.
    pub fn new(backend: impl StateBackend + 'static) -> Self {
        let mut store = Self {
            backend: Box::new(backend),
        };
        for key in SessionKey::ALL {
            store.clear(key);
        }
        store
    }

    /// Store that is never written anywhere
    pub fn in_memory() -> Self {
        Self::new(MemoryStateBackend::new())
    }

    pub fn get(&self, key: SessionKey) -> Option<Value> {
        self.backend.get(key.as_str())
    }

    pub fn set(&mut self, key: SessionKey, value: Value) {
        if let Err(e) = self.backend.set(key.as_str(), value) {
            warn!(key = key.as_str(), error = %e, "failed to persist session value");
        }
    }

    pub fn clear(&mut self, key: SessionKey) {
        if let Err(e) = self.backend.remove(key.as_str()) {
            warn!(key = key.as_str(), error = %e, "failed to clear session value");
        }
    }

    /// The chosen target, if one was chosen and still parses
    pub fn current_target(&self) -> Option<RemoteTarget> {
        self.get(SessionKey::CurrentTarget)
            .and_then(|v| v.as_str().and_then(RemoteTarget::parse))
    }

    /// Auto-sync flag; absent means off
    pub fn auto_sync_enabled(&self) -> bool {
        self.get(SessionKey::AutoSyncEnabled)
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            current_target: self.current_target(),
            auto_sync_enabled: self.auto_sync_enabled(),
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get(SessionKey::CurrentTarget), None);
        assert_eq!(store.get(SessionKey::AutoSyncEnabled), None);
        assert_eq!(store.state(), SessionState::default());
    }

    #[test]
    fn leftovers_from_backend_are_discarded() {
        let backend = MemoryStateBackend::new()
            .with_value("currentTarget", Value::from("old:/srv"))
            .with_value("autoSyncEnabled", Value::Bool(true));

        let store = SessionStore::new(backend);

        assert_eq!(store.get(SessionKey::CurrentTarget), None);
        assert_eq!(store.get(SessionKey::AutoSyncEnabled), None);
        assert!(!store.auto_sync_enabled());
    }

    #[test]
    fn set_and_clear_round_trip() {
        let mut store = SessionStore::in_memory();
        store.set(SessionKey::CurrentTarget, Value::from("host:/srv"));
        store.set(SessionKey::AutoSyncEnabled, Value::Bool(true));

        let state = store.state();
        assert_eq!(state.current_target.unwrap().raw(), "host:/srv");
        assert!(state.auto_sync_enabled);

        store.clear(SessionKey::AutoSyncEnabled);
        assert_eq!(store.get(SessionKey::AutoSyncEnabled), None);
    }

    #[test]
    fn unparseable_target_reads_as_absent() {
        let mut store = SessionStore::in_memory();
        store.set(SessionKey::CurrentTarget, Value::from("host:"));
        assert_eq!(store.current_target(), None);
    }
}

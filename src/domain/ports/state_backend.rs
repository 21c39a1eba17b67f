//! State Backend Port
//!
//! Key/value storage underneath the session state store. The backend may
//! outlive a process (a state file); the store never trusts what it finds
//! there.

use std::collections::HashMap;
use std::io;

use serde_json::Value;

/// Raw key/value storage for session state
pub trait StateBackend {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value) -> io::Result<()>;

    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Backend that only lives as long as the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStateBackend {
    values: HashMap<String, Value>,
}

impl MemoryStateBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value, e.g. to simulate leftovers from an earlier session
    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }
}

impl StateBackend for MemoryStateBackend {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> io::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

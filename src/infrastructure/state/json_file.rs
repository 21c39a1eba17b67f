//! JSON state file
//!
//! Mirrors the live session to `<workspace>/.simple-sync/state.json` so other
//! processes can see which target a running `watch` session uses. The file is
//! never used to restore a session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::ports::StateBackend;

pub const STATE_FILE: &str = "state.json";

/// State backend stored as a flat JSON object
#[derive(Debug, Clone)]
pub struct JsonStateFile {
    path: PathBuf,
    values: Map<String, Value>,
}

impl JsonStateFile {
    /// Open `<dir>/state.json`, reading whatever is already there
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(STATE_FILE);
        let values = Self::read(&path).unwrap_or_default();
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a state file without taking it over
    pub fn read(path: &Path) -> Option<Map<String, Value>> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)
    }
}

impl StateBackend for JsonStateFile {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> io::Result<()> {
        self.values.insert(key.to_string(), value);
        self.save()
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        if self.values.remove(key).is_some() || self.path.exists() {
            self.save()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_state_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let state = JsonStateFile::open(dir.path());
        assert_eq!(state.get("currentTarget"), None);
        assert!(!state.path().exists());
    }

    #[test]
    fn test_state_save_and_read() {
        let dir = tempdir().unwrap();
        let mut state = JsonStateFile::open(&dir.path().join(".simple-sync"));
        state.set("currentTarget", Value::from("host:/srv")).unwrap();

        let map = JsonStateFile::read(state.path()).unwrap();
        assert_eq!(map.get("currentTarget"), Some(&Value::from("host:/srv")));

        let reopened = JsonStateFile::open(&dir.path().join(".simple-sync"));
        assert_eq!(reopened.get("currentTarget"), Some(Value::from("host:/srv")));
    }

    #[test]
    fn test_state_remove_rewrites_file() {
        let dir = tempdir().unwrap();
        let mut state = JsonStateFile::open(dir.path());
        state.set("autoSyncEnabled", Value::Bool(true)).unwrap();
        state.remove("autoSyncEnabled").unwrap();

        let map = JsonStateFile::read(state.path()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_state_remove_without_file_does_not_create_one() {
        let dir = tempdir().unwrap();
        let mut state = JsonStateFile::open(dir.path());
        state.remove("autoSyncEnabled").unwrap();
        assert!(!state.path().exists());
    }

    #[test]
    fn test_state_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STATE_FILE), "not json").unwrap();
        let state = JsonStateFile::open(dir.path());
        assert_eq!(state.get("currentTarget"), None);
    }
}

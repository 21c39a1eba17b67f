//! Watch options and debounce state

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Folders to watch recursively
    pub folders: Vec<PathBuf>,
    /// Quiet period before a burst of events counts as one save
    pub debounce: Duration,
    /// File or directory names whose subtrees never trigger a save
    pub ignore: Vec<String>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            folders: Vec::new(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            ignore: Vec::new(),
        }
    }
}

/// Watcher state for debouncing
pub struct WatcherState {
    pending_changes: HashSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl WatcherState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            pending_changes: HashSet::new(),
            last_change: None,
            debounce,
        }
    }

    pub fn add_change(&mut self, path: PathBuf) {
        self.pending_changes.insert(path);
        self.last_change = Some(Instant::now());
    }

    pub fn should_sync(&self) -> bool {
        match self.last_change {
            Some(last) => !self.pending_changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// Drain pending paths in a stable order
    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        let mut changes: Vec<_> = self.pending_changes.drain().collect();
        changes.sort();
        self.last_change = None;
        changes
    }

    pub fn has_pending(&self) -> bool {
        !self.pending_changes.is_empty()
    }
}

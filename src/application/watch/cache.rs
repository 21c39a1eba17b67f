//! Change filtering for watch events

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Hash file content for change detection
pub fn compute_content_hash(content: &[u8]) -> String {
    let digest = Sha256::digest(content);
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("sha256:{}", hex)
}

/// Decides which file-system events are real saves.
///
/// Editors and the OS emit several events per save (and some for mere
/// metadata touches). Only regular files outside ignored directories whose
/// content differs from the last seen version pass.
#[derive(Debug, Default)]
pub struct ChangeFilter {
    ignore: Vec<String>,
    content_hashes: HashMap<PathBuf, String>,
}

impl ChangeFilter {
    pub fn new(ignore: Vec<String>) -> Self {
        Self {
            ignore,
            content_hashes: HashMap::new(),
        }
    }

    /// Any path component matches an ignore entry
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.components().any(|c| {
            let name = c.as_os_str().to_string_lossy();
            self.ignore.iter().any(|ignored| ignored == name.as_ref())
        })
    }

    /// Record the current content of `path`; `true` if it changed since last
    /// time (or was never seen).
    pub fn record(&mut self, path: &Path, content: &[u8]) -> bool {
        let hash = compute_content_hash(content);
        match self.content_hashes.get(path) {
            Some(old) if *old == hash => false,
            _ => {
                self.content_hashes.insert(path.to_path_buf(), hash);
                true
            }
        }
    }

    /// Drop the recorded content of `path` so its next save passes even if
    /// unchanged. Used when the sync of that content failed.
    pub fn forget(&mut self, path: &Path) {
        self.content_hashes.remove(path);
    }

    /// Full check for an event path: ignored paths, directories and files
    /// that cannot be read are dropped.
    pub fn accept(&mut self, path: &Path) -> bool {
        if self.is_ignored(path) || !path.is_file() {
            return false;
        }
        match std::fs::read(path) {
            Ok(content) => self.record(path, &content),
            Err(_) => false,
        }
    }
}

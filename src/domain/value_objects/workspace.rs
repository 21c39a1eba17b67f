//! Workspace value objects.

use std::path::{Path, PathBuf};

/// A root folder that relative paths are computed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceFolder {
    root: PathBuf,
}

impl WorkspaceFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Base name of the folder, used as the directory name on the target.
    ///
    /// `None` for roots without a final component (e.g. `/`), which cannot
    /// be synced.
    pub fn name(&self) -> Option<String> {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
    }
}

/// A file located inside a workspace folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub workspace_root: PathBuf,
    pub workspace_name: String,
    /// Path relative to `workspace_root`, `/`-separated. Empty for the root
    /// itself.
    pub relative_path: String,
}

/// A whole workspace folder prepared for sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWorkspace {
    pub workspace_root: PathBuf,
    pub workspace_name: String,
}

//! Sync request entity

use std::path::PathBuf;

use crate::domain::value_objects::{RemoteTarget, ResolvedFile, ResolvedWorkspace};

/// Everything the command builder needs for one sync call.
///
/// Built per call and never persisted. The target is a snapshot taken when
/// the request was made; later target changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    /// Source handed to the transfer tool
    pub local_path: PathBuf,
    pub workspace_root: PathBuf,
    pub workspace_name: String,
    /// `/`-separated path below the workspace root, empty for whole-workspace syncs
    pub relative_path: String,
    pub target: RemoteTarget,
    /// Suppress progress and success notifications (failures still surface)
    pub silent: bool,
}

impl SyncRequest {
    /// Request for a single file
    pub fn for_file(
        local_path: impl Into<PathBuf>,
        resolved: ResolvedFile,
        target: RemoteTarget,
        silent: bool,
    ) -> Self {
        Self {
            local_path: local_path.into(),
            workspace_root: resolved.workspace_root,
            workspace_name: resolved.workspace_name,
            relative_path: resolved.relative_path,
            target,
            silent,
        }
    }

    /// Request for a whole workspace folder
    pub fn for_workspace(resolved: ResolvedWorkspace, target: RemoteTarget, silent: bool) -> Self {
        Self {
            local_path: resolved.workspace_root.clone(),
            workspace_root: resolved.workspace_root,
            workspace_name: resolved.workspace_name,
            relative_path: String::new(),
            target,
            silent,
        }
    }

    /// Short human-readable description, e.g. `proj/src/a.ts -> host:/srv`
    pub fn label(&self) -> String {
        if self.relative_path.is_empty() {
            format!("{} -> {}", self.workspace_name, self.target)
        } else {
            format!(
                "{}/{} -> {}",
                self.workspace_name, self.relative_path, self.target
            )
        }
    }
}

//! Path Resolver
//!
//! Maps a file or folder to its workspace root, workspace name and the
//! `/`-separated path below that root.

use std::path::Path;

use crate::domain::value_objects::{ResolvedFile, ResolvedWorkspace, WorkspaceFolder};
use crate::error::{SyncError, SyncResult};

/// Stateless resolver over the open workspace folders
pub struct PathResolver;

impl PathResolver {
    /// Find the workspace folder containing `file` and the path relative to it.
    ///
    /// Nested folders resolve to the deepest match. Matching is per path
    /// component, so `/code/app` does not contain `/code/application/x`.
    /// A folder without a base name (`/`) is rejected rather than dropped
    /// from the destination.
    pub fn resolve_file(file: &Path, folders: &[WorkspaceFolder]) -> SyncResult<ResolvedFile> {
        let folder = folders
            .iter()
            .filter(|folder| file.starts_with(folder.root()))
            .max_by_key(|folder| folder.root().components().count())
            .ok_or_else(|| SyncError::NoWorkspace {
                path: file.to_path_buf(),
            })?;

        let relative = file
            .strip_prefix(folder.root())
            .map_err(|_| SyncError::NoWorkspace {
                path: file.to_path_buf(),
            })?;

        Ok(ResolvedFile {
            workspace_root: folder.root().to_path_buf(),
            workspace_name: workspace_name(folder)?,
            relative_path: to_slash_path(relative),
        })
    }

    /// Root and name for a whole-folder sync
    pub fn resolve_workspace(folder: &WorkspaceFolder) -> SyncResult<ResolvedWorkspace> {
        Ok(ResolvedWorkspace {
            workspace_root: folder.root().to_path_buf(),
            workspace_name: workspace_name(folder)?,
        })
    }
}

fn workspace_name(folder: &WorkspaceFolder) -> SyncResult<String> {
    folder.name().ok_or_else(|| SyncError::UnnamedWorkspace {
        path: folder.root().to_path_buf(),
    })
}

/// Join path components with `/` regardless of platform
fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

//! Error types for simple-sync
//!
//! Uses `thiserror` for library errors; the CLI layer wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for engine operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for sync operations
///
/// Every variant is recoverable: it aborts the single sync attempt that
/// produced it and is shown to the user once.
#[derive(Error, Debug)]
pub enum SyncError {
    /// `sync` was invoked without a file to sync
    #[error("no active file to sync")]
    NoActiveFile,

    /// The file does not live under any workspace folder
    #[error("'{path}' is not inside an open workspace folder")]
    NoWorkspace { path: PathBuf },

    /// The workspace folder has no base name to create on the target
    #[error("workspace folder '{path}' has no name to use on the target")]
    UnnamedWorkspace { path: PathBuf },

    /// Nothing configured and nothing chosen
    #[error("no remote targets configured - add `remote_targets` to .simple-sync/config.toml")]
    NoTargetConfigured,

    /// Several targets configured and none chosen for this session
    #[error("{count} remote targets configured - choose one first (e.g. `--target <TARGET>`)")]
    AmbiguousTarget { count: usize },

    /// A configured or supplied target string cannot be a destination
    #[error("invalid remote target '{raw}'")]
    InvalidTarget { raw: String },

    /// The transfer tool ran and exited non-zero
    #[error("sync failed: {stderr}")]
    TransferFailed { stderr: String },

    /// The transfer tool could not be started
    #[error("failed to start transfer: {reason}")]
    SpawnFailed { reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

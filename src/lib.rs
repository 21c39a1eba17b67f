//! simple-sync - push workspace files to remote or local targets
//!
//! Keeps a session target, builds `rsync` command lines for single files and
//! whole workspace folders, and runs them as independent background
//! transfers. A save hook syncs files automatically when auto-sync is on.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{SyncEngine, TargetChoice, TransferExecutor, TransferHandle};
pub use config::Config;
pub use domain::entities::{SyncRequest, TransferOutcome, TransferState};
pub use domain::ports::{SyncEvent, SyncEventSink, TargetChooser, TransferTool};
pub use domain::services::{CommandBuilder, PathResolver, TargetRegistry};
pub use domain::value_objects::{RemoteTarget, WorkspaceFolder};
pub use error::{SyncError, SyncResult};

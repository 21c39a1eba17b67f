//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and the host UI provide concrete implementations.

pub mod state_backend;
pub mod sync_events;
pub mod target_chooser;
pub mod transfer_tool;

pub use state_backend::{MemoryStateBackend, StateBackend};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
pub use target_chooser::{PresetChooser, TargetChooser};
pub use transfer_tool::TransferTool;

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `transfer/` - Transfer tools (shell subprocess)
//! - `state/` - Session state file
//! - `events/` - Event sinks (console, NDJSON)

pub mod events;
pub mod state;
pub mod transfer;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use state::JsonStateFile;
pub use transfer::ShellTransferTool;

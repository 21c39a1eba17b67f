//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - ConsoleEventSink: Timestamped status lines
//! - JsonEventSink: NDJSON output for scripts

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;

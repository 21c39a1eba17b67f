//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for scripts and editor integrations.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}", event.to_json());
        let _ = writer.flush();
    }
}

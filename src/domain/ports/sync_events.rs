//! Sync Event Port
//!
//! Status feedback for the host UI: progress, completion and failures of
//! transfers, plus session changes.

use serde::Serialize;

/// Event emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SyncEvent {
    /// A non-silent transfer is about to be spawned
    TransferStarted { label: String },

    /// A non-silent transfer exited successfully
    TransferSucceeded { label: String },

    /// A transfer failed; emitted for silent transfers too
    TransferFailed { label: String, stderr: String },

    /// A target was chosen for this session
    TargetSelected { target: String, auto_sync: bool },

    /// Watching started for the listed workspace folders
    WatchStarted { folders: Vec<String> },

    /// A save was detected and handed to the save hook
    FileSaved { path: String },

    /// A user-facing error outside of a transfer
    Error { message: String },

    /// Watching stopped
    Shutdown,
}

impl SyncEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Whether this event reports a problem
    pub fn is_error(&self) -> bool {
        matches!(self, Self::TransferFailed { .. } | Self::Error { .. })
    }
}

/// Trait for receiving sync events
///
/// Implementations can be:
/// - ConsoleEventSink: Timestamped status lines in the terminal
/// - JsonEventSink: NDJSON event stream for scripts
/// - NoopEventSink: Silent operation
pub trait SyncEventSink: Send + Sync {
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<SyncEvent>>>,
    }

    impl SyncEventSink for RecordingEventSink {
        fn on_event(&self, event: SyncEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(SyncEvent::TransferStarted {
            label: "proj -> host:/srv".to_string(),
        });
        sink.on_event(SyncEvent::Shutdown);

        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn events_serialize_with_snake_case_tag() {
        let event = SyncEvent::TransferFailed {
            label: "proj/a.txt -> /backup".to_string(),
            stderr: "boom".to_string(),
        };
        assert_eq!(
            event.to_json(),
            r#"{"event":"transfer_failed","label":"proj/a.txt -> /backup","stderr":"boom"}"#
        );
    }

    #[test]
    fn only_failures_are_errors() {
        assert!(SyncEvent::Error {
            message: "x".to_string()
        }
        .is_error());
        assert!(!SyncEvent::TransferSucceeded {
            label: "x".to_string()
        }
        .is_error());
    }
}

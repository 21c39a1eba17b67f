//! Console Event Sink
//!
//! One timestamped line per event. Errors go to stderr, everything else to
//! stdout. Writes are serialized so concurrent transfers never interleave a
//! line.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use crossterm::style::Stylize;

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Human-readable event sink
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stdio(color: bool, unicode: bool) -> Self {
        Self {
            out: Mutex::new(Box::new(io::stdout())),
            err: Mutex::new(Box::new(io::stderr())),
            color,
            unicode,
        }
    }

    /// Sink writing both streams to custom writers (for testing)
    #[allow(dead_code)]
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color: false,
            unicode: false,
        }
    }

    fn icon(&self, event: &SyncEvent) -> &'static str {
        match (self.unicode, event) {
            (true, SyncEvent::TransferStarted { .. }) => "↑",
            (true, SyncEvent::TransferSucceeded { .. }) => "✓",
            (true, SyncEvent::TransferFailed { .. } | SyncEvent::Error { .. }) => "✗",
            (true, SyncEvent::TargetSelected { .. }) => "◆",
            (true, SyncEvent::WatchStarted { .. }) => "◉",
            (true, SyncEvent::FileSaved { .. }) => "•",
            (true, SyncEvent::Shutdown) => "■",
            (false, SyncEvent::TransferStarted { .. }) => "^",
            (false, SyncEvent::TransferSucceeded { .. }) => "+",
            (false, SyncEvent::TransferFailed { .. } | SyncEvent::Error { .. }) => "x",
            (false, SyncEvent::TargetSelected { .. }) => "*",
            (false, SyncEvent::WatchStarted { .. }) => "o",
            (false, SyncEvent::FileSaved { .. }) => "-",
            (false, SyncEvent::Shutdown) => "#",
        }
    }

    fn message(event: &SyncEvent) -> String {
        match event {
            SyncEvent::TransferStarted { label } => format!("Syncing {}...", label),
            SyncEvent::TransferSucceeded { label } => format!("Synced {}", label),
            SyncEvent::TransferFailed { label, stderr } => {
                format!("Sync failed: {}\n{}", label, stderr)
            }
            SyncEvent::TargetSelected { target, auto_sync } => format!(
                "Remote target set to: {} (auto-sync {})",
                target,
                if *auto_sync { "on" } else { "off" }
            ),
            SyncEvent::WatchStarted { folders } => format!("Watching {}", folders.join(", ")),
            SyncEvent::FileSaved { path } => format!("Saved {}", path),
            SyncEvent::Error { message } => message.clone(),
            SyncEvent::Shutdown => "Stopped watching".to_string(),
        }
    }

    pub fn render(&self, timestamp: &str, event: &SyncEvent) -> String {
        let icon = self.icon(event);
        let message = Self::message(event);
        if !self.color {
            return format!("[{}] {} {}\n", timestamp, icon, message);
        }

        let icon = match event {
            SyncEvent::TransferSucceeded { .. } => icon.green().to_string(),
            SyncEvent::TransferFailed { .. } | SyncEvent::Error { .. } => {
                icon.red().to_string()
            }
            SyncEvent::TransferStarted { .. } => icon.cyan().to_string(),
            _ => icon.dark_grey().to_string(),
        };
        format!("{} {} {}\n", timestamp.dark_grey(), icon, message)
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = self.render(&timestamp, &event);
        let stream = if event.is_error() { &self.err } else { &self.out };
        // A writer poisoned by a panicking thread is still usable
        let mut writer = stream.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.write_all(rendered.as_bytes());
        let _ = writer.flush();
    }
}

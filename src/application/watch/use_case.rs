//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::debug;

use crate::application::{SyncEngine, TransferHandle};
use crate::domain::entities::TransferState;
use crate::domain::ports::{SyncEvent, SyncEventSink};
use crate::error::{SyncError, SyncResult};

use super::cache::ChangeFilter;
use super::event::{WatchOptions, WatcherState};

/// Poll interval of the watch loop
const TICK: Duration = Duration::from_millis(50);

/// Notify tends to replay events for existing files right after
/// registration; these are drained unprocessed.
const STARTUP_COOLDOWN: Duration = Duration::from_millis(500);

/// Watch Use Case
///
/// Drives the engine's save hook from file-system events. This is the main
/// entry point for the `simple-sync watch` command.
pub struct WatchUseCase {
    options: WatchOptions,
    events: Arc<dyn SyncEventSink>,
}

impl WatchUseCase {
    pub fn new(options: WatchOptions, events: Arc<dyn SyncEventSink>) -> Self {
        Self { options, events }
    }

    /// Watch until `running` is cleared.
    ///
    /// Transfers started by saves are not cancelled on shutdown; the loop
    /// waits for them before returning.
    pub async fn start(&self, engine: &SyncEngine, running: Arc<AtomicBool>) -> SyncResult<()> {
        self.events.on_event(SyncEvent::WatchStarted {
            folders: self
                .options
                .folders
                .iter()
                .map(|f| f.display().to_string())
                .collect(),
        });

        let (tx, mut rx) = mpsc::unbounded_channel::<PathBuf>();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .map_err(|e| SyncError::Io(std::io::Error::other(e.to_string())))?;

        for folder in &self.options.folders {
            watcher
                .watch(folder, RecursiveMode::Recursive)
                .map_err(|e| SyncError::Io(std::io::Error::other(e.to_string())))?;
        }

        let cooldown_end = Instant::now() + STARTUP_COOLDOWN;
        while Instant::now() < cooldown_end {
            let _ = tokio::time::timeout(TICK, rx.recv()).await;
        }

        let mut filter = ChangeFilter::new(self.options.ignore.clone());
        let mut state = WatcherState::new(self.options.debounce);
        let mut in_flight: Vec<(PathBuf, TransferHandle)> = Vec::new();

        while running.load(Ordering::SeqCst) {
            if let Ok(Some(path)) = tokio::time::timeout(TICK, rx.recv()).await {
                let path = path.canonicalize().unwrap_or(path);
                if filter.accept(&path) {
                    state.add_change(path);
                }
            }

            if state.should_sync() {
                for path in state.take_changes() {
                    self.events.on_event(SyncEvent::FileSaved {
                        path: path.display().to_string(),
                    });
                    match engine.on_save(&path) {
                        Ok(Some(handle)) => in_flight.push((path, handle)),
                        Ok(None) => debug!(path = %path.display(), "auto-sync off, save ignored"),
                        Err(e) => self.events.on_event(SyncEvent::Error {
                            message: e.to_string(),
                        }),
                    }
                }
            }

            reap_finished(&mut in_flight, &mut filter);
        }

        drop(watcher);
        for (_, handle) in in_flight {
            handle.outcome().await;
        }

        self.events.on_event(SyncEvent::Shutdown);
        Ok(())
    }
}

/// Drop finished transfers. A failed one makes its file eligible again, so
/// saving the same content retries the sync.
pub(super) fn reap_finished(
    in_flight: &mut Vec<(PathBuf, TransferHandle)>,
    filter: &mut ChangeFilter,
) {
    in_flight.retain(|(path, handle)| {
        if !handle.is_finished() {
            return true;
        }
        if handle.state() == TransferState::Failed {
            debug!(path = %path.display(), "sync failed, next save retries");
            filter.forget(path);
        }
        false
    });
}

//! Transfer Executor
//!
//! Spawns built commands onto the event loop and reports how they end.
//! Each call gets its own task and its own child process; nothing is queued,
//! deduplicated or cancelled.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::entities::{TransferOutcome, TransferState};
use crate::domain::ports::{SyncEvent, SyncEventSink, TransferTool};

/// Runs transfer commands through a [`TransferTool`]
#[derive(Clone)]
pub struct TransferExecutor {
    tool: Arc<dyn TransferTool>,
    events: Arc<dyn SyncEventSink>,
}

impl TransferExecutor {
    pub fn new(tool: Arc<dyn TransferTool>, events: Arc<dyn SyncEventSink>) -> Self {
        Self { tool, events }
    }

    /// Start `command` and return immediately.
    ///
    /// Must be called from within a tokio runtime. Unless `silent`, a
    /// `TransferStarted` event is emitted before spawning and a
    /// `TransferSucceeded` event on success. `TransferFailed` is emitted
    /// regardless of `silent`. A tool that is not installed fails the
    /// transfer as a spawn failure without running anything.
    pub fn run(&self, command: String, label: String, silent: bool) -> TransferHandle {
        if !silent {
            self.events.on_event(SyncEvent::TransferStarted {
                label: label.clone(),
            });
        }

        let transfer: BoxFuture<'static, TransferOutcome> = if self.tool.is_available() {
            debug!(tool = self.tool.name(), %command, "spawning transfer");
            self.tool.execute(command)
        } else {
            let reason = format!(
                "transfer program '{}' not found - install it or set `transfer.program`",
                self.tool.name()
            );
            Box::pin(async move { TransferOutcome::SpawnFailed { reason } })
        };

        let events = self.events.clone();
        let task_label = label.clone();
        let (state_tx, state) = watch::channel(TransferState::Running);

        let inner = tokio::spawn(async move {
            let outcome = transfer.await;
            let _ = state_tx.send(outcome.state());
            match &outcome {
                TransferOutcome::Succeeded => {
                    debug!(label = %task_label, "transfer succeeded");
                    if !silent {
                        events.on_event(SyncEvent::TransferSucceeded { label: task_label });
                    }
                }
                failed => {
                    let stderr = failed.stderr().unwrap_or_default().trim().to_string();
                    warn!(label = %task_label, %stderr, "transfer failed");
                    events.on_event(SyncEvent::TransferFailed {
                        label: task_label,
                        stderr,
                    });
                }
            }
            outcome
        });

        TransferHandle {
            label,
            state,
            inner,
        }
    }
}

/// Completion handle for one spawned transfer.
///
/// Dropping the handle does not stop the transfer.
#[derive(Debug)]
pub struct TransferHandle {
    label: String,
    state: watch::Receiver<TransferState>,
    inner: JoinHandle<TransferOutcome>,
}

impl TransferHandle {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// `Running` until the process exits, then `Succeeded` or `Failed`
    pub fn state(&self) -> TransferState {
        *self.state.borrow()
    }

    /// Wait for the transfer to finish
    pub async fn outcome(self) -> TransferOutcome {
        match self.inner.await {
            Ok(outcome) => outcome,
            Err(e) => TransferOutcome::SpawnFailed {
                reason: e.to_string(),
            },
        }
    }
}

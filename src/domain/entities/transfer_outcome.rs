//! Transfer outcome entity

use crate::error::SyncError;

/// Lifecycle of a single transfer: `Running -> {Succeeded, Failed}`.
///
/// A transfer is spawned as soon as it is created, so it is never observed
/// idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    Running,
    Succeeded,
    Failed,
}

/// How a transfer process ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Exit status zero
    Succeeded,
    /// Non-zero exit; carries the captured standard error
    Failed { stderr: String },
    /// The process could not be started at all
    SpawnFailed { reason: String },
}

impl TransferOutcome {
    pub fn success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Error text for failed transfers
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Succeeded => None,
            Self::Failed { stderr } => Some(stderr),
            Self::SpawnFailed { reason } => Some(reason),
        }
    }

    /// Terminal state this outcome represents
    pub fn state(&self) -> TransferState {
        if self.success() {
            TransferState::Succeeded
        } else {
            TransferState::Failed
        }
    }

    pub fn into_result(self) -> Result<(), SyncError> {
        match self {
            Self::Succeeded => Ok(()),
            Self::Failed { stderr } => Err(SyncError::TransferFailed { stderr }),
            Self::SpawnFailed { reason } => Err(SyncError::SpawnFailed { reason }),
        }
    }
}

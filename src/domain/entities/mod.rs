//! Domain Entities
//!
//! Records that live for the duration of a single sync call.
//! - `SyncRequest` - What to push and where
//! - `TransferOutcome` - How the transfer process ended

mod sync_request;
mod transfer_outcome;

pub use sync_request::SyncRequest;
pub use transfer_outcome::{TransferOutcome, TransferState};

//! Application Layer
//!
//! Use cases that orchestrate the sync flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Owns the mutable session state and the running transfers
//!
//! ## Use Cases
//!
//! - `SyncEngine` - `sync`, `choose_target`, the save hook and workspace pushes
//! - `TransferExecutor` - Spawns transfer commands and reports their outcome
//! - `SessionStore` - Active target and auto-sync flag for this process
//! - `WatchUseCase` - Turns file-system changes into save events

pub mod engine;
pub mod executor;
pub mod session;
pub mod watch;

pub use engine::{SyncEngine, TargetChoice};
pub use executor::{TransferExecutor, TransferHandle};
pub use session::{SessionKey, SessionState, SessionStore};
pub use watch::{ChangeFilter, WatchOptions, WatchUseCase, WatcherState};

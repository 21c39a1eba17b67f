//! Domain Layer
//!
//! The sync engine's pure core: target parsing, path resolution and command
//! construction. Nothing here spawns processes or touches the terminal.
//!
//! ## Structure
//!
//! - `entities/` - Per-call records (SyncRequest, TransferOutcome)
//! - `value_objects/` - Immutable value types (RemoteTarget, WorkspaceFolder)
//! - `services/` - Stateless services (TargetRegistry, PathResolver, CommandBuilder)
//! - `ports/` - Interface definitions for infrastructure and the host UI

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod remote_target;
mod workspace;

pub use remote_target::RemoteTarget;
pub use workspace::{ResolvedFile, ResolvedWorkspace, WorkspaceFolder};

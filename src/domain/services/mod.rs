//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

mod command_builder;
mod path_resolver;
mod target_registry;

pub use command_builder::{shell_quote, CommandBuilder};
pub use path_resolver::PathResolver;
pub use target_registry::TargetRegistry;

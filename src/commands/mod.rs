mod chooser;
mod common;
pub mod push;
pub mod status;
pub mod sync;
pub mod targets;
pub mod watch;

pub use common::CommandContext;

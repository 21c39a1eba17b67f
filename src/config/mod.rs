//! Configuration module for simple-sync
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SIMPLE_SYNC_*)
//! 3. Explicit `--config` file, else workspace config (.simple-sync/config.toml)
//! 4. User config (~/.config/simple-sync/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, TransferConfig, WatchConfig};

/// Per-workspace directory holding `config.toml` and the session state file
pub const PROJECT_DIR: &str = ".simple-sync";

/// Config file name inside [`PROJECT_DIR`] and the user config directory
pub const CONFIG_FILE: &str = "config.toml";

//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::WatchOptions;
use crate::domain::services::{CommandBuilder, TargetRegistry};
use crate::error::SyncResult;

use super::loader::{self, ConfigWarning};

/// Transfer tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Transfer program, may include extra flags (`rsync --delete`)
    #[serde(default = "default_program")]
    pub program: String,

    /// Remote shell for directory creation (`ssh -p 2222`)
    #[serde(default = "default_remote_shell")]
    pub remote_shell: String,

    /// Patterns never transferred (OS metadata files)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            remote_shell: default_remote_shell(),
            exclude: default_exclude(),
        }
    }
}

fn default_program() -> String {
    "rsync".to_string()
}

fn default_remote_shell() -> String {
    "ssh".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![".DS_Store".to_string()]
}

/// Watch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// File or directory names that never trigger a save
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            ignore: default_ignore(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    crate::application::watch::DEFAULT_DEBOUNCE_MS
}

fn default_ignore() -> Vec<String> {
    vec![".git".to_string(), super::PROJECT_DIR.to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Sync destinations: `host:path` or a local directory
    #[serde(default)]
    pub remote_targets: Vec<String>,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub watch: WatchConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Config file to read when none is given explicitly: the
    /// workspace's, else the user's
    pub fn find_config_file(workspace_root: Option<&Path>) -> Option<std::path::PathBuf> {
        loader::find_config_file(workspace_root)
    }

    /// Apply environment variable overrides (SIMPLE_SYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn target_registry(&self) -> TargetRegistry {
        TargetRegistry::new(self.remote_targets.clone())
    }

    pub fn command_builder(&self) -> CommandBuilder {
        CommandBuilder::new(
            self.transfer.program.clone(),
            self.transfer.remote_shell.clone(),
            self.transfer.exclude.clone(),
        )
    }

    /// Watch options for the given folders
    pub fn watch_options(&self, folders: Vec<std::path::PathBuf>) -> WatchOptions {
        WatchOptions {
            folders,
            debounce: Duration::from_millis(self.watch.debounce_ms),
            ignore: self.watch.ignore.clone(),
        }
    }
}

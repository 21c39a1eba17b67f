//! Wiring shared by the subcommands: config lookup, workspace discovery and
//! engine construction.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use simple_sync::application::{SessionStore, TransferExecutor};
use simple_sync::config::PROJECT_DIR;
use simple_sync::domain::ports::{PresetChooser, SyncEvent, SyncEventSink, TargetChooser};
use simple_sync::infrastructure::{ConsoleEventSink, JsonEventSink, ShellTransferTool};
use simple_sync::{
    Config, SyncEngine, SyncResult, TargetChoice, TransferHandle, WorkspaceFolder,
};

use crate::terminal::TerminalCapabilities;

/// Global flags and terminal facts every subcommand needs
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub json: bool,
    pub config_path: Option<PathBuf>,
    pub caps: TerminalCapabilities,
}

impl CommandContext {
    pub fn event_sink(&self) -> Arc<dyn SyncEventSink> {
        if self.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::stdio(
                self.caps.supports_color,
                self.caps.supports_unicode,
            ))
        }
    }

    /// Load config: `--config` file, else workspace or user config, then
    /// environment overrides. Unknown keys are warned about and parse
    /// errors are fatal, whichever file they come from.
    pub fn load_config(&self, workspace: Option<&Path>) -> Result<Config> {
        let path = match &self.config_path {
            Some(path) => Some(path.clone()),
            None => Config::find_config_file(workspace),
        };

        let Some(path) = path else {
            return Ok(Config::default().with_env_overrides());
        };

        let (config, warnings) = Config::load_with_warnings(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        for warning in &warnings {
            warn!("{}", warning);
        }
        Ok(config.with_env_overrides())
    }
}

/// Discover the workspace root from an invocation directory.
///
/// Walks upward from `start` and stops at the first directory holding a
/// `.simple-sync/` directory or a `.git` entry. Falls back to `start`.
pub(crate) fn discover_workspace_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PROJECT_DIR).is_dir() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Canonical workspace folders; the discovered project root if none given
pub(crate) fn workspace_roots(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if dirs.is_empty() {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        return Ok(vec![discover_workspace_root(&cwd)]);
    }

    dirs.iter()
        .map(|dir| {
            dir.canonicalize()
                .with_context(|| format!("workspace folder {} not found", dir.display()))
        })
        .collect()
}

/// Build an engine over `roots` with a fresh session
pub(crate) fn build_engine(
    config: &Config,
    roots: &[PathBuf],
    session: SessionStore,
    events: Arc<dyn SyncEventSink>,
) -> SyncEngine {
    let tool = ShellTransferTool::new(config.transfer.program.clone());
    SyncEngine::new(
        config.target_registry(),
        session,
        roots.iter().cloned().map(WorkspaceFolder::new).collect(),
        config.command_builder(),
        TransferExecutor::new(Arc::new(tool), events),
    )
}

/// Make an ad-hoc `--target` selectable by adding it to the configured list
pub(crate) fn include_target(config: &mut Config, target: Option<&str>) {
    if let Some(target) = target {
        if !config.remote_targets.iter().any(|t| t == target) {
            config.remote_targets.push(target.to_string());
        }
    }
}

/// Run `choose_target` and report the result.
///
/// Returns the initial whole-workspace transfers (empty if auto-sync is
/// off), or `None` if the prompt was dismissed.
pub(crate) fn choose_target(
    engine: &mut SyncEngine,
    chooser: &dyn TargetChooser,
    events: &dyn SyncEventSink,
) -> Result<Option<Vec<TransferHandle>>> {
    match engine.choose_target(chooser)? {
        TargetChoice::Dismissed => Ok(None),
        TargetChoice::Selected {
            target,
            auto_sync,
            initial_sync,
        } => {
            events.on_event(SyncEvent::TargetSelected {
                target: target.raw().to_string(),
                auto_sync,
            });
            Ok(Some(initial_sync))
        }
    }
}

/// Apply `--target` for one-shot commands (no auto-sync prompt)
pub(crate) fn select_explicit_target(
    engine: &mut SyncEngine,
    target: Option<String>,
    events: &dyn SyncEventSink,
) -> Result<()> {
    if target.is_some() {
        choose_target(engine, &PresetChooser::new(target, false), events)?;
    }
    Ok(())
}

/// Wait for every transfer; the first failure wins
pub(crate) async fn await_all(handles: Vec<TransferHandle>) -> SyncResult<()> {
    let mut result = Ok(());
    for handle in handles {
        let outcome = handle.outcome().await.into_result();
        if result.is_ok() {
            result = outcome;
        }
    }
    result
}

/// Exit non-zero after a failed transfer.
///
/// The event sink has already reported the failure, so nothing else is
/// printed.
pub(crate) fn exit_on_transfer_failure(result: SyncResult<()>) {
    if let Err(e) = result {
        debug!(error = %e, "exiting after failed transfer");
        std::process::exit(1);
    }
}

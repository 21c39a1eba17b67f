//! Sync Engine
//!
//! The operations the host calls into: `sync`, `choose_target` and the save
//! hook, plus whole-workspace pushes. Resolves paths and targets, builds the
//! command and hands it to the executor.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::entities::SyncRequest;
use crate::domain::ports::TargetChooser;
use crate::domain::services::{CommandBuilder, PathResolver, TargetRegistry};
use crate::domain::value_objects::{RemoteTarget, WorkspaceFolder};
use crate::error::{SyncError, SyncResult};

use super::executor::{TransferExecutor, TransferHandle};
use super::session::{SessionKey, SessionStore};

/// Result of the "choose target" operation
#[derive(Debug)]
pub enum TargetChoice {
    /// The user dismissed the picker; the session is unchanged
    Dismissed,
    /// A target is now active
    Selected {
        target: RemoteTarget,
        auto_sync: bool,
        /// Whole-workspace transfers started because auto-sync was enabled
        initial_sync: Vec<TransferHandle>,
    },
}

/// The synchronization engine
///
/// Owns the session store; everything else it holds is read-only.
pub struct SyncEngine {
    registry: TargetRegistry,
    session: SessionStore,
    workspaces: Vec<WorkspaceFolder>,
    builder: CommandBuilder,
    executor: TransferExecutor,
}

impl SyncEngine {
    pub fn new(
        registry: TargetRegistry,
        session: SessionStore,
        workspaces: Vec<WorkspaceFolder>,
        builder: CommandBuilder,
        executor: TransferExecutor,
    ) -> Self {
        Self {
            registry,
            session,
            workspaces,
            builder,
            executor,
        }
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn workspaces(&self) -> &[WorkspaceFolder] {
        &self.workspaces
    }

    /// Target for an explicit sync: the session's choice, otherwise the
    /// single configured target.
    pub fn active_target(&self) -> SyncResult<RemoteTarget> {
        match self.session.current_target() {
            Some(target) => Ok(target),
            None => self.registry.resolve_default(),
        }
    }

    /// The `sync` command: push the active file
    pub fn sync(&self, active_file: Option<&Path>) -> SyncResult<TransferHandle> {
        let file = active_file.ok_or(SyncError::NoActiveFile)?;
        self.sync_file(file, false)
    }

    /// Push one file to the active target
    pub fn sync_file(&self, file: &Path, silent: bool) -> SyncResult<TransferHandle> {
        let resolved = PathResolver::resolve_file(file, &self.workspaces)?;
        let target = self.active_target()?;
        let request = SyncRequest::for_file(file, resolved, target, silent);
        Ok(self.start_file_transfer(&request))
    }

    /// Push every workspace folder to the active target
    pub fn sync_all_workspaces(&self, silent: bool) -> SyncResult<Vec<TransferHandle>> {
        let target = self.active_target()?;
        self.start_workspace_transfers(&target, silent)
    }

    /// The `chooseTarget` command.
    ///
    /// Offers the configured targets, makes the pick active, then asks about
    /// auto-sync. Enabling auto-sync starts an immediate push of every
    /// workspace folder.
    pub fn choose_target(&mut self, chooser: &dyn TargetChooser) -> SyncResult<TargetChoice> {
        let configured = self.registry.list_configured();
        if configured.is_empty() {
            return Err(SyncError::NoTargetConfigured);
        }

        let Some(raw) = chooser.choose_target(configured)? else {
            return Ok(TargetChoice::Dismissed);
        };
        let target = TargetRegistry::validate(&raw)?;

        self.session.set(SessionKey::CurrentTarget, Value::from(target.raw()));
        info!(target = %target, "remote target selected");

        let auto_sync = chooser.confirm_auto_sync(&target)?;
        self.session.set(SessionKey::AutoSyncEnabled, Value::Bool(auto_sync));
        info!(auto_sync, "auto-sync {}", if auto_sync { "enabled" } else { "disabled" });

        let initial_sync = if auto_sync {
            self.start_workspace_transfers(&target, false)?
        } else {
            Vec::new()
        };

        Ok(TargetChoice::Selected {
            target,
            auto_sync,
            initial_sync,
        })
    }

    /// Forget the chosen target and turn auto-sync off
    pub fn reset_session(&mut self) {
        for key in SessionKey::ALL {
            self.session.clear(key);
        }
        debug!("session reset");
    }

    /// The save hook.
    ///
    /// Syncs `path` silently when auto-sync is on and a target is active;
    /// does nothing (`Ok(None)`) if either is missing.
    pub fn on_save(&self, path: &Path) -> SyncResult<Option<TransferHandle>> {
        let state = self.session.state();
        let target = match (state.auto_sync_enabled, state.current_target) {
            (true, Some(target)) => target,
            _ => return Ok(None),
        };

        let resolved = PathResolver::resolve_file(path, &self.workspaces)?;
        let request = SyncRequest::for_file(path, resolved, target, true);
        Ok(Some(self.start_file_transfer(&request)))
    }

    fn start_file_transfer(&self, request: &SyncRequest) -> TransferHandle {
        let command = self.builder.build_file_sync_command(request);
        self.executor.run(command, request.label(), request.silent)
    }

    /// One transfer per workspace folder; nothing starts unless every
    /// folder resolves.
    fn start_workspace_transfers(
        &self,
        target: &RemoteTarget,
        silent: bool,
    ) -> SyncResult<Vec<TransferHandle>> {
        let resolved = self
            .workspaces
            .iter()
            .map(PathResolver::resolve_workspace)
            .collect::<SyncResult<Vec<_>>>()?;

        Ok(resolved
            .into_iter()
            .map(|workspace| {
                let request = SyncRequest::for_workspace(workspace, target.clone(), silent);
                let command = self.builder.build_workspace_sync_command(&request);
                self.executor.run(command, request.label(), request.silent)
            })
            .collect())
    }
}

use std::path::Path;

use anyhow::{Context, Result};

use simple_sync::application::SessionStore;

use super::common::{self, CommandContext};
use crate::cli::SessionArgs;

/// `simple-sync sync <FILE>`: push one file and wait for the transfer.
pub async fn cmd_sync(
    ctx: &CommandContext,
    file: &Path,
    session: SessionArgs,
    quiet: bool,
) -> Result<()> {
    let file = file
        .canonicalize()
        .with_context(|| format!("file {} not found", file.display()))?;
    let roots = common::workspace_roots(&session.workspaces)?;

    let mut config = ctx.load_config(roots.first().map(|p| p.as_path()))?;
    common::include_target(&mut config, session.target.as_deref());

    let events = ctx.event_sink();
    let mut engine =
        common::build_engine(&config, &roots, SessionStore::in_memory(), events.clone());
    common::select_explicit_target(&mut engine, session.target, events.as_ref())?;

    let handle = if quiet {
        engine.sync_file(&file, true)?
    } else {
        engine.sync(Some(&file))?
    };

    common::exit_on_transfer_failure(handle.outcome().await.into_result());
    Ok(())
}

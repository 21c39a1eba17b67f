use anyhow::Result;

use simple_sync::application::SessionStore;

use super::common::{self, CommandContext};
use crate::cli::SessionArgs;

/// `simple-sync push`: whole-workspace sync of every folder.
pub async fn cmd_push(ctx: &CommandContext, session: SessionArgs) -> Result<()> {
    let roots = common::workspace_roots(&session.workspaces)?;

    let mut config = ctx.load_config(roots.first().map(|p| p.as_path()))?;
    common::include_target(&mut config, session.target.as_deref());

    let events = ctx.event_sink();
    let mut engine =
        common::build_engine(&config, &roots, SessionStore::in_memory(), events.clone());
    common::select_explicit_target(&mut engine, session.target, events.as_ref())?;

    let handles = engine.sync_all_workspaces(false)?;
    common::exit_on_transfer_failure(common::await_all(handles).await);
    Ok(())
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use simple_sync::application::{SessionStore, WatchUseCase};
use simple_sync::config::PROJECT_DIR;
use simple_sync::domain::ports::PresetChooser;
use simple_sync::infrastructure::JsonStateFile;

use super::chooser::DialoguerChooser;
use super::common::{self, CommandContext};
use crate::cli::SessionArgs;

/// `simple-sync watch`: choose a target, then sync on every save.
///
/// Without a terminal on stdin the target comes from `--target` (or the only
/// configured one) and auto-sync defaults to on.
pub async fn cmd_watch(
    ctx: &CommandContext,
    session: SessionArgs,
    auto_sync: Option<bool>,
) -> Result<()> {
    let roots = common::workspace_roots(&session.workspaces)?;
    let primary = roots
        .first()
        .cloned()
        .context("no workspace folder to watch")?;

    let mut config = ctx.load_config(Some(&primary))?;
    common::include_target(&mut config, session.target.as_deref());

    let events = ctx.event_sink();
    let store = SessionStore::new(JsonStateFile::open(&primary.join(PROJECT_DIR)));
    let mut engine = common::build_engine(&config, &roots, store, events.clone());

    let initial_sync = if ctx.caps.stdin_tty && !ctx.json {
        let chooser = DialoguerChooser::new(session.target, auto_sync);
        common::choose_target(&mut engine, &chooser, events.as_ref())?
    } else {
        let chooser = PresetChooser::new(session.target, auto_sync.unwrap_or(true));
        common::choose_target(&mut engine, &chooser, events.as_ref())?
    };
    let Some(initial_sync) = initial_sync else {
        anyhow::bail!("no remote target selected");
    };

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let use_case = WatchUseCase::new(config.watch_options(roots), events);
    let result = use_case.start(&engine, running).await;

    // Failures were reported as they happened
    let _ = common::await_all(initial_sync).await;
    engine.reset_session();
    result?;
    Ok(())
}

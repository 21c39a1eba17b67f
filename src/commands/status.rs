use std::path::PathBuf;

use anyhow::Result;
use serde_json::{Map, Value};

use simple_sync::application::SessionKey;
use simple_sync::config::PROJECT_DIR;
use simple_sync::infrastructure::state::STATE_FILE;
use simple_sync::infrastructure::JsonStateFile;

use super::common::{self, CommandContext};

/// `simple-sync status`: show the session a running `watch` mirrors to disk.
pub fn cmd_status(ctx: &CommandContext, workspace: Option<PathBuf>) -> Result<()> {
    let roots = common::workspace_roots(&workspace.into_iter().collect::<Vec<_>>())?;
    let Some(root) = roots.first() else {
        return Ok(());
    };
    let path = root.join(PROJECT_DIR).join(STATE_FILE);
    let values = JsonStateFile::read(&path).unwrap_or_default();

    if ctx.json {
        let output = serde_json::json!({
            "event": "status",
            "state_file": path.display().to_string(),
            "current_target": values.get(SessionKey::CurrentTarget.as_str()),
            "auto_sync_enabled": auto_sync(&values),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print!("{}", render_status(&values));
    Ok(())
}

fn auto_sync(values: &Map<String, Value>) -> bool {
    values
        .get(SessionKey::AutoSyncEnabled.as_str())
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn render_status(values: &Map<String, Value>) -> String {
    match values
        .get(SessionKey::CurrentTarget.as_str())
        .and_then(Value::as_str)
    {
        Some(target) => format!(
            "Target:    {}\nAuto-sync: {}\n",
            target,
            if auto_sync(values) { "on" } else { "off" }
        ),
        None => "No active session.\n".to_string(),
    }
}

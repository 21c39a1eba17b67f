use std::path::PathBuf;

use anyhow::Result;

use simple_sync::{Config, RemoteTarget, TargetRegistry};

use super::common::{self, CommandContext};

/// `simple-sync targets`: list configured targets.
pub fn cmd_targets(ctx: &CommandContext, workspace: Option<PathBuf>) -> Result<()> {
    let roots = common::workspace_roots(&workspace.into_iter().collect::<Vec<_>>())?;
    let config = ctx.load_config(roots.first().map(|p| p.as_path()))?;
    let registry = config.target_registry();

    if ctx.json {
        let output = serde_json::json!({
            "event": "targets",
            "targets": registry
                .list_configured()
                .iter()
                .map(|raw| target_json(raw))
                .collect::<Vec<_>>(),
            "default": default_target(&registry),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print!("{}", render_targets(&config));
    Ok(())
}

fn target_json(raw: &str) -> serde_json::Value {
    match RemoteTarget::parse(raw) {
        Some(target) => serde_json::json!({
            "raw": raw,
            "valid": true,
            "host": target.host(),
            "path": target.directory(),
        }),
        None => serde_json::json!({ "raw": raw, "valid": false }),
    }
}

fn default_target(registry: &TargetRegistry) -> Option<String> {
    registry.resolve_default().ok().map(|t| t.raw().to_string())
}

fn render_targets(config: &Config) -> String {
    let registry = config.target_registry();
    let configured = registry.list_configured();
    if configured.is_empty() {
        return "No remote targets configured.\n\
                Add `remote_targets = [\"host:/path\"]` to .simple-sync/config.toml\n"
            .to_string();
    }

    let mut out = String::new();
    for raw in configured {
        match RemoteTarget::parse(raw) {
            Some(target) => match target.host() {
                Some(host) => out.push_str(&format!(
                    "  {}  (host {}, path {})\n",
                    raw,
                    host,
                    target.directory()
                )),
                None => out.push_str(&format!("  {}  (local)\n", raw)),
            },
            None => out.push_str(&format!("  {:?}  (invalid)\n", raw)),
        }
    }

    match registry.resolve_default() {
        Ok(target) => out.push_str(&format!("Default: {}\n", target)),
        Err(e) => out.push_str(&format!("Default: none ({})\n", e)),
    }
    out
}

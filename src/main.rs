//! simple-sync CLI - push workspace files to remote hosts with rsync
//!
//! Usage: simple-sync <COMMAND>
//!
//! Commands:
//!   sync     Sync one file to the active target
//!   push     Sync every workspace folder
//!   watch    Choose a target, then sync files as they are saved
//!   targets  List configured targets
//!   status   Show the session of a running `watch`

mod cli;
mod commands;
mod terminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::CommandContext;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext {
        json: cli.json,
        config_path: cli.config.clone(),
        caps: terminal::detect_capabilities(cli.color),
    };

    match cli.command {
        Commands::Sync {
            file,
            session,
            quiet,
        } => commands::sync::cmd_sync(&ctx, &file, session, quiet).await,
        Commands::Push { session } => commands::push::cmd_push(&ctx, session).await,
        Commands::Watch {
            session,
            auto_sync,
            no_auto_sync,
        } => {
            let auto_sync = match (auto_sync, no_auto_sync) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::watch::cmd_watch(&ctx, session, auto_sync).await
        }
        Commands::Targets { workspace } => commands::targets::cmd_targets(&ctx, workspace),
        Commands::Status { workspace } => commands::status::cmd_status(&ctx, workspace),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn,simple_sync=info",
        1 => "info,simple_sync=debug",
        _ => "debug,simple_sync=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

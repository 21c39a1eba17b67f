use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// simple-sync - push workspace files to remote hosts with rsync
#[derive(Parser, Debug)]
#[command(name = "simple-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of status lines
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the workspace or user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Workspace folders and target selection shared by the sync commands
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Workspace folder (repeatable; defaults to the project containing the
    /// current directory)
    #[arg(short, long = "workspace", value_name = "DIR")]
    pub workspaces: Vec<PathBuf>,

    /// Target for this session (`host:path` or a local directory)
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync one file to the active target
    Sync {
        /// File to sync
        file: PathBuf,

        #[command(flatten)]
        session: SessionArgs,

        /// No progress or success messages (failures are still reported)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Sync every workspace folder to the active target
    Push {
        #[command(flatten)]
        session: SessionArgs,
    },

    /// Choose a target, then sync files as they are saved
    Watch {
        #[command(flatten)]
        session: SessionArgs,

        /// Enable auto-sync without asking
        #[arg(long, conflicts_with = "no_auto_sync")]
        auto_sync: bool,

        /// Disable auto-sync without asking
        #[arg(long)]
        no_auto_sync: bool,
    },

    /// List configured targets
    Targets {
        /// Workspace whose config to read
        #[arg(short, long, value_name = "DIR")]
        workspace: Option<PathBuf>,
    },

    /// Show the session of a running `watch`
    Status {
        /// Workspace the session was started in
        #[arg(short, long, value_name = "DIR")]
        workspace: Option<PathBuf>,
    },
}

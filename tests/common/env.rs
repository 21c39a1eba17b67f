//! Test environment for isolated simple-sync testing.
//!
//! Provides `TestEnv` - a temp workspace and a temp home, plus helpers to run
//! the CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a simple-sync CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {l:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment.
///
/// The workspace is canonicalized so paths printed by the CLI compare equal
/// to paths built here (macOS temp dirs live behind a symlink).
pub struct TestEnv {
    workspace_dir: TempDir,
    home_dir: TempDir,
    workspace: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let workspace_dir = TempDir::new().expect("Failed to create workspace dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let workspace = workspace_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize workspace");
        Self {
            workspace_dir,
            home_dir,
            workspace,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_simple-sync")),
        }
    }

    /// Canonical workspace root
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    pub fn workspace_path(&self, relative: &str) -> PathBuf {
        self.workspace.join(relative)
    }

    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }

    /// Name of the workspace folder as used on the target
    pub fn workspace_name(&self) -> String {
        self.workspace
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Write `.simple-sync/config.toml`
    pub fn write_config(&self, toml: &str) {
        self.write_file(".simple-sync/config.toml", toml);
    }

    /// Write a file below the workspace root
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.workspace_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Command for the CLI, run from the workspace with an isolated home
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(&self.workspace)
            .args(args)
            .env("HOME", self.home())
            .env("USERPROFILE", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("SIMPLE_SYNC_TARGETS")
            .env_remove("SIMPLE_SYNC_PROGRAM")
            .env_remove("SIMPLE_SYNC_REMOTE_SHELL")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to execute simple-sync");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

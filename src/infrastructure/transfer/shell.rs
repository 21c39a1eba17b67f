//! Shell Transfer Tool
//!
//! Runs each built command line with `sh -c` as an independent child process.
//! The child is not killed when its future is dropped: a started transfer
//! always runs to completion.

use std::process::Stdio;

use futures::future::BoxFuture;
use tokio::process::Command;
use tracing::{debug, trace};

use crate::domain::entities::TransferOutcome;
use crate::domain::ports::TransferTool;

/// POSIX shell every command line is handed to
const SHELL: &str = "sh";

/// Transfer tool backed by the system shell
#[derive(Debug, Clone)]
pub struct ShellTransferTool {
    /// Configured transfer program, used for availability checks
    program: String,
}

impl ShellTransferTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Executable name of the configured program (first word)
    fn executable(&self) -> &str {
        self.program.split_whitespace().next().unwrap_or("rsync")
    }
}

impl Default for ShellTransferTool {
    fn default() -> Self {
        Self::new("rsync")
    }
}

impl TransferTool for ShellTransferTool {
    fn name(&self) -> &str {
        self.executable()
    }

    /// Resolved like the shell would: a bare name through `PATH`, a path
    /// as given
    fn is_available(&self) -> bool {
        which::which(self.executable()).is_ok()
    }

    fn execute(&self, command: String) -> BoxFuture<'static, TransferOutcome> {
        Box::pin(async move {
            let output = Command::new(SHELL)
                .arg("-c")
                .arg(&command)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(false)
                .output()
                .await;

            match output {
                Ok(output) => {
                    trace!(stdout = %String::from_utf8_lossy(&output.stdout), "transfer output");
                    if output.status.success() {
                        TransferOutcome::Succeeded
                    } else {
                        debug!(code = ?output.status.code(), "transfer exited with failure");
                        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                        TransferOutcome::Failed {
                            stderr: if stderr.trim().is_empty() {
                                match output.status.code() {
                                    Some(code) => format!("exited with status {}", code),
                                    None => format!("terminated ({})", output.status),
                                }
                            } else {
                                stderr
                            },
                        }
                    }
                }
                Err(e) => TransferOutcome::SpawnFailed {
                    reason: format!("{}: {}", SHELL, e),
                },
            }
        })
    }
}

//! Transfer Tool Port
//!
//! The external copy tool, reduced to a single capability: run a command line
//! and report how it ended.

use futures::future::BoxFuture;

use crate::domain::entities::TransferOutcome;

/// Runs built transfer commands.
///
/// Implementations:
/// - `ShellTransferTool`: spawns `sh -c <command>` as a child process
/// - test fakes that complete on demand
pub trait TransferTool: Send + Sync {
    /// Name of the underlying tool (for logging)
    fn name(&self) -> &str;

    /// Check if the tool is installed and runnable
    fn is_available(&self) -> bool;

    /// Execute one command line to completion.
    ///
    /// The returned future owns everything it needs so it can be spawned
    /// onto the event loop independently of the caller.
    fn execute(&self, command: String) -> BoxFuture<'static, TransferOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test tool that records commands and always succeeds
    struct RecordingTool {
        commands: Arc<Mutex<Vec<String>>>,
    }

    impl TransferTool for RecordingTool {
        fn name(&self) -> &str {
            "recording"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn execute(&self, command: String) -> BoxFuture<'static, TransferOutcome> {
            self.commands.lock().unwrap().push(command);
            Box::pin(async { TransferOutcome::Succeeded })
        }
    }

    #[tokio::test]
    async fn tool_is_object_safe_and_records_commands() {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let tool: Arc<dyn TransferTool> = Arc::new(RecordingTool {
            commands: commands.clone(),
        });

        let outcome = tool.execute("rsync -avz a b".to_string()).await;

        assert!(outcome.success());
        assert_eq!(commands.lock().unwrap().as_slice(), ["rsync -avz a b"]);
    }
}

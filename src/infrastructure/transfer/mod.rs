//! Transfer tools
//!
//! Implements `TransferTool` by running command lines through the system
//! shell.

mod shell;

pub use shell::ShellTransferTool;

//! Common test utilities for simple-sync CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace and home directories plus CLI helpers
//! - Fake transfer tools that log their arguments instead of copying

#![allow(dead_code)]

pub mod env;
pub mod fake_tools;

pub use env::*;
pub use fake_tools::*;

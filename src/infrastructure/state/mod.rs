//! Session state persistence

mod json_file;

pub use json_file::{JsonStateFile, STATE_FILE};

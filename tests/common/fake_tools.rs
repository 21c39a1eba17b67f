//! Fake `rsync`/`ssh` executables.
//!
//! Each script appends its arguments (one line per invocation) to a log file
//! and exits with a fixed status, so tests can assert on the exact command
//! without network access or a real transfer tool.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct FakeTool {
    pub path: PathBuf,
    pub log: PathBuf,
}

impl FakeTool {
    /// Install an executable `name` in `bin_dir` that logs and exits `status`.
    ///
    /// A non-zero exit also prints `stderr` to standard error.
    pub fn install(bin_dir: &Path, name: &str, status: i32, stderr: &str) -> Self {
        fs::create_dir_all(bin_dir).unwrap();
        let path = bin_dir.join(name);
        let log = bin_dir.join(format!("{name}.log"));
        fs::write(
            &path,
            format!(
                r#"#!/bin/sh
printf '%s\n' "$*" >> "{log}"
if [ {status} -ne 0 ]; then
  echo "{stderr}" >&2
fi
exit {status}
"#,
                log = log.display(),
                status = status,
                stderr = stderr,
            ),
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Self { path, log }
    }

    /// Logged invocations, one argument string per call
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn program(&self) -> String {
        self.path.display().to_string()
    }
}

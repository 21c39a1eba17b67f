//! Command Builder
//!
//! Produces the exact shell command line for a sync request. Paths are
//! single-quoted as opaque strings; this is quoting, not sanitizing, and the
//! result is still handed to `sh -c`.

use crate::domain::entities::SyncRequest;

/// Archive, verbose, compress
const TRANSFER_FLAGS: &str = "-avz";

/// Builds transfer command lines from configured tool settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    /// Transfer tool invocation, inserted verbatim (may carry extra flags)
    program: String,
    /// Remote shell used for directory creation, inserted verbatim
    remote_shell: String,
    /// Patterns passed as `--exclude`
    excludes: Vec<String>,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new("rsync", "ssh", vec![".DS_Store".to_string()])
    }
}

impl CommandBuilder {
    pub fn new(
        program: impl Into<String>,
        remote_shell: impl Into<String>,
        excludes: Vec<String>,
    ) -> Self {
        Self {
            program: program.into(),
            remote_shell: remote_shell.into(),
            excludes,
        }
    }

    /// Destination of a single-file sync: `<target>/<workspace>/<relative>`
    pub fn file_destination(req: &SyncRequest) -> String {
        join_destination(
            req.target.raw(),
            &[req.workspace_name.as_str(), req.relative_path.as_str()],
        )
    }

    /// Destination of a workspace sync: `<target>/`
    ///
    /// The trailing slash makes the tool copy the workspace folder into the
    /// target as a subdirectory instead of replacing the target.
    pub fn workspace_destination(req: &SyncRequest) -> String {
        format!("{}/", req.target.raw().trim_end_matches('/'))
    }

    /// Transfer command for one file
    pub fn build_file_sync_command(&self, req: &SyncRequest) -> String {
        self.transfer(
            &req.local_path.display().to_string(),
            &Self::file_destination(req),
        )
    }

    /// Directory creation followed by a transfer of the whole workspace.
    ///
    /// The transfer only runs if the directory step succeeded.
    pub fn build_workspace_sync_command(&self, req: &SyncRequest) -> String {
        let mkdir = match req.target.host() {
            Some(host) => {
                let remote_cmd = format!("mkdir -p {}", quote_remote_path(req.target.directory()));
                format!(
                    "{} {} {}",
                    self.remote_shell,
                    shell_quote(host),
                    shell_quote(&remote_cmd)
                )
            }
            None => format!("mkdir -p {}", shell_quote(req.target.raw())),
        };

        let transfer = self.transfer(
            &req.workspace_root.display().to_string(),
            &Self::workspace_destination(req),
        );

        format!("{} && {}", mkdir, transfer)
    }

    fn transfer(&self, source: &str, destination: &str) -> String {
        let mut parts = vec![self.program.clone(), TRANSFER_FLAGS.to_string()];
        for pattern in &self.excludes {
            parts.push("--exclude".to_string());
            parts.push(shell_quote(pattern));
        }
        parts.push(shell_quote(source));
        parts.push(shell_quote(destination));
        parts.join(" ")
    }
}

/// POSIX single-quote a string
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote a path for the remote shell, keeping a leading `~` expandable
fn quote_remote_path(path: &str) -> String {
    if path == "~" {
        return "~".to_string();
    }
    match path.strip_prefix("~/") {
        Some("") => "~/".to_string(),
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None => shell_quote(path),
    }
}

/// Append `/`-separated segments, skipping empty ones so no `//` appears
fn join_destination(base: &str, segments: &[&str]) -> String {
    let mut dest = base.trim_end_matches('/').to_string();
    for segment in segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
    {
        dest.push('/');
        dest.push_str(segment);
    }
    if dest.is_empty() {
        dest.push('/');
    }
    dest
}

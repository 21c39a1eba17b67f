//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};

use super::types::Config;
use super::{CONFIG_FILE, PROJECT_DIR};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SyncError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: the workspace's, then the user's
pub fn find_config_file(workspace_root: Option<&Path>) -> Option<PathBuf> {
    let project_config = workspace_root.map(|root| root.join(PROJECT_DIR).join(CONFIG_FILE));
    project_config
        .into_iter()
        .chain(user_config_path())
        .find(|path| path.exists())
}

/// Apply environment variable overrides (SIMPLE_SYNC_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // SIMPLE_SYNC_TARGETS (comma-separated)
    if let Ok(targets) = std::env::var("SIMPLE_SYNC_TARGETS") {
        let parsed: Vec<String> = targets
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.remote_targets = parsed;
        }
    }

    // SIMPLE_SYNC_PROGRAM
    if let Ok(program) = std::env::var("SIMPLE_SYNC_PROGRAM") {
        if !program.trim().is_empty() {
            config.transfer.program = program;
        }
    }

    // SIMPLE_SYNC_REMOTE_SHELL
    if let Ok(shell) = std::env::var("SIMPLE_SYNC_REMOTE_SHELL") {
        if !shell.trim().is_empty() {
            config.transfer.remote_shell = shell;
        }
    }

    config
}

/// `<user config dir>/simple-sync/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("simple-sync").join(CONFIG_FILE))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote_targets",
        "transfer",
        "program",
        "remote_shell",
        "exclude",
        "watch",
        "debounce_ms",
        "ignore",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("ignore", "ignore"), 0);
        assert_eq!(levenshtein("ignor", "ignore"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn suggests_close_keys_only() {
        assert_eq!(suggest_key("remote_target"), Some("remote_targets".to_string()));
        assert_eq!(suggest_key("progam"), Some("program".to_string()));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn warning_display_includes_suggestion() {
        let warning = ConfigWarning {
            key: "progam".to_string(),
            file: PathBuf::from(".simple-sync/config.toml"),
            line: Some(3),
            suggestion: Some("program".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown key 'progam' in .simple-sync/config.toml:3 (did you mean 'program'?)"
        );
    }
}

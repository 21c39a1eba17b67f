//! Target Chooser Port
//!
//! The host UI's half of "choose target": pick one of the configured targets,
//! then decide whether auto-sync should be on.

use crate::domain::value_objects::RemoteTarget;
use crate::error::SyncResult;

/// Trait for asking the user about the session target.
///
/// Implementations can be:
/// - `DialoguerChooser`: Terminal prompts
/// - `PresetChooser`: Answers given up front (CLI flags, tests)
pub trait TargetChooser {
    /// Pick one entry from `targets`. `Ok(None)` means the user dismissed
    /// the prompt.
    fn choose_target(&self, targets: &[String]) -> SyncResult<Option<String>>;

    /// Ask whether saves should sync automatically to `target`.
    fn confirm_auto_sync(&self, target: &RemoteTarget) -> SyncResult<bool>;
}

/// Chooser with fixed answers
#[derive(Debug, Clone, Default)]
pub struct PresetChooser {
    /// Target to pick; `None` picks the only configured one, if any
    pub target: Option<String>,
    pub auto_sync: bool,
}

impl PresetChooser {
    pub fn new(target: Option<String>, auto_sync: bool) -> Self {
        Self { target, auto_sync }
    }
}

impl TargetChooser for PresetChooser {
    fn choose_target(&self, targets: &[String]) -> SyncResult<Option<String>> {
        match &self.target {
            Some(target) => Ok(Some(target.clone())),
            None if targets.len() == 1 => Ok(targets.first().cloned()),
            None => Ok(None),
        }
    }

    fn confirm_auto_sync(&self, _target: &RemoteTarget) -> SyncResult<bool> {
        Ok(self.auto_sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_returns_explicit_target_even_if_unlisted() {
        let chooser = PresetChooser::new(Some("/adhoc".to_string()), false);
        let picked = chooser.choose_target(&["a:/x".to_string()]).unwrap();
        assert_eq!(picked.as_deref(), Some("/adhoc"));
    }

    #[test]
    fn preset_without_target_picks_single_entry() {
        let chooser = PresetChooser::new(None, true);
        let picked = chooser.choose_target(&["a:/x".to_string()]).unwrap();
        assert_eq!(picked.as_deref(), Some("a:/x"));
    }

    #[test]
    fn preset_without_target_declines_plural_entries() {
        let chooser = PresetChooser::default();
        let picked = chooser
            .choose_target(&["a:/x".to_string(), "b:/y".to_string()])
            .unwrap();
        assert_eq!(picked, None);
    }
}

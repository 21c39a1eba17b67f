//! Terminal prompts for `choose_target`.

use dialoguer::{Confirm, FuzzySelect};

use simple_sync::domain::ports::TargetChooser;
use simple_sync::{RemoteTarget, SyncError, SyncResult};

/// Asks on the terminal for whatever was not given on the command line
#[derive(Debug, Clone, Default)]
pub struct DialoguerChooser {
    target: Option<String>,
    auto_sync: Option<bool>,
}

impl DialoguerChooser {
    pub fn new(target: Option<String>, auto_sync: Option<bool>) -> Self {
        Self { target, auto_sync }
    }
}

impl TargetChooser for DialoguerChooser {
    fn choose_target(&self, targets: &[String]) -> SyncResult<Option<String>> {
        if let Some(target) = &self.target {
            return Ok(Some(target.clone()));
        }

        let picked = FuzzySelect::new()
            .with_prompt("Select remote target")
            .items(targets)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(picked.and_then(|i| targets.get(i).cloned()))
    }

    fn confirm_auto_sync(&self, target: &RemoteTarget) -> SyncResult<bool> {
        if let Some(auto_sync) = self.auto_sync {
            return Ok(auto_sync);
        }

        // Escape counts as "no"
        let answer = Confirm::new()
            .with_prompt(format!("Enable auto-sync on save to {}?", target))
            .default(true)
            .interact_opt()
            .map_err(prompt_error)?;
        Ok(answer.unwrap_or(false))
    }
}

fn prompt_error(e: dialoguer::Error) -> SyncError {
    SyncError::Io(std::io::Error::other(e.to_string()))
}

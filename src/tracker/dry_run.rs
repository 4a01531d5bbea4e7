use super::IssueTracker;
use crate::errors::TrackerError;

/// Logs the calls it would make and reports success for all of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunTracker;

impl DryRunTracker {
    pub fn new() -> Self {
        Self
    }
}

impl IssueTracker for DryRunTracker {
    fn add_label(&self, issue: &str, label: &str) -> Result<(), TrackerError> {
        log::info!("[dry-run] would add label '{}' to issue {}", label, issue);
        Ok(())
    }

    fn remove_label(&self, issue: &str, label: &str) -> Result<(), TrackerError> {
        log::info!("[dry-run] would remove label '{}' from issue {}", label, issue);
        Ok(())
    }

    fn post_comment(&self, issue: &str, body: &str) -> Result<(), TrackerError> {
        log::info!("[dry-run] would comment on issue {}: {}", issue, body);
        Ok(())
    }
}

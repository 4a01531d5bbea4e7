//! The issue tracker collaborator.
//!
//! The scorer never talks to a hosting platform directly; every mutation goes
//! through [`IssueTracker`]. Each call stands alone and reports its own
//! failure, so one rejected call does not prevent the next.

mod dry_run;
mod gh_cli;

pub use dry_run::DryRunTracker;
pub use gh_cli::GhCliTracker;

use crate::errors::TrackerError;

/// Label, unlabel and comment operations on a single issue.
pub trait IssueTracker {
    fn add_label(&self, issue: &str, label: &str) -> Result<(), TrackerError>;

    fn remove_label(&self, issue: &str, label: &str) -> Result<(), TrackerError>;

    fn post_comment(&self, issue: &str, body: &str) -> Result<(), TrackerError>;
}

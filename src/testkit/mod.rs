//! Test doubles for the issue tracker collaborator.
//!
//! [`RecordingTracker`] keeps every call in memory and can be told to reject
//! specific operations, so dispatch behaviour can be checked without a
//! network or the `gh` CLI.
//!
//! ```rust
//! use sevscore::testkit::{RecordingTracker, TrackerCall, TrackerOp};
//! use sevscore::tracker::IssueTracker;
//!
//! let tracker = RecordingTracker::new().failing_on(TrackerOp::RemoveLabel);
//! assert!(tracker.remove_label("1", "pager-duty").is_err());
//! assert!(tracker.add_label("1", "urgent").is_ok());
//! assert_eq!(
//!     tracker.calls(),
//!     vec![
//!         TrackerCall::RemoveLabel { issue: "1".into(), label: "pager-duty".into() },
//!         TrackerCall::AddLabel { issue: "1".into(), label: "urgent".into() },
//!     ]
//! );
//! ```

mod recording;

pub use recording::{RecordingTracker, TrackerCall, TrackerOp};

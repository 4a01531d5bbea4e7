use crate::errors::TrackerError;
use crate::tracker::IssueTracker;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerOp {
    AddLabel,
    RemoveLabel,
    PostComment,
}

impl TrackerOp {
    fn name(self) -> &'static str {
        match self {
            TrackerOp::AddLabel => "add label",
            TrackerOp::RemoveLabel => "remove label",
            TrackerOp::PostComment => "post comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    AddLabel { issue: String, label: String },
    RemoveLabel { issue: String, label: String },
    PostComment { issue: String, body: String },
}

/// In-memory tracker that records calls, including rejected ones.
#[derive(Debug, Default)]
pub struct RecordingTracker {
    calls: Mutex<Vec<TrackerCall>>,
    failing: HashSet<TrackerOp>,
}

impl RecordingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every call of `op`.
    pub fn failing_on(mut self, op: TrackerOp) -> Self {
        self.failing.insert(op);
        self
    }

    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn is_untouched(&self) -> bool {
        self.calls().is_empty()
    }

    fn record(&self, op: TrackerOp, issue: &str, call: TrackerCall) -> Result<(), TrackerError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.failing.contains(&op) {
            Err(TrackerError::rejected(op.name(), issue, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

impl IssueTracker for RecordingTracker {
    fn add_label(&self, issue: &str, label: &str) -> Result<(), TrackerError> {
        self.record(
            TrackerOp::AddLabel,
            issue,
            TrackerCall::AddLabel {
                issue: issue.to_string(),
                label: label.to_string(),
            },
        )
    }

    fn remove_label(&self, issue: &str, label: &str) -> Result<(), TrackerError> {
        self.record(
            TrackerOp::RemoveLabel,
            issue,
            TrackerCall::RemoveLabel {
                issue: issue.to_string(),
                label: label.to_string(),
            },
        )
    }

    fn post_comment(&self, issue: &str, body: &str) -> Result<(), TrackerError> {
        self.record(
            TrackerOp::PostComment,
            issue,
            TrackerCall::PostComment {
                issue: issue.to_string(),
                body: body.to_string(),
            },
        )
    }
}

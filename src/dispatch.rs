//! Turns a score into tracker calls.
//!
//! A scored issue always gets a comment with its score. Urgent issues get the
//! urgent label, and issues at or below the threshold lose the pager-duty
//! label. Every call is attempted regardless of how the previous one went;
//! failures are logged and recorded in the [`DispatchReport`].

use crate::scoring::ScoreResult;
use crate::tracker::IssueTracker;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the score in the comment template.
pub const SCORE_PLACEHOLDER: &str = "{score}";

/// Label names and comment template used when acting on a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub urgent: String,
    pub pager_duty: String,
    pub comment: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            urgent: "urgent".to_string(),
            pager_duty: "pager-duty".to_string(),
            comment: format!("Severity Score: {}", SCORE_PLACEHOLDER),
        }
    }
}

impl LabelConfig {
    pub fn render_comment(&self, score: f64) -> String {
        self.comment.replace(SCORE_PLACEHOLDER, &format_score(score))
    }
}

/// Whole scores print without a fractional part.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Action {
    Comment(String),
    AddLabel(String),
    RemoveLabel(String),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Comment(body) => write!(f, "comment \"{}\"", body),
            Action::AddLabel(label) => write!(f, "add label '{}'", label),
            Action::RemoveLabel(label) => write!(f, "remove label '{}'", label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum ActionStatus {
    Applied,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    pub action: Action,
    pub status: ActionStatus,
}

impl ActionReport {
    pub fn succeeded(&self) -> bool {
        self.status == ActionStatus::Applied
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub actions: Vec<ActionReport>,
}

impl DispatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &ActionReport> {
        self.actions.iter().filter(|report| !report.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Actions a score calls for, in the order they are applied.
pub fn plan_actions(result: &ScoreResult, labels: &LabelConfig) -> Vec<Action> {
    let mut actions = vec![Action::Comment(labels.render_comment(result.final_score))];
    if result.is_urgent {
        actions.push(Action::AddLabel(labels.urgent.clone()));
    }
    if result.should_unlabel {
        actions.push(Action::RemoveLabel(labels.pager_duty.clone()));
    }
    actions
}

pub struct ActionDispatcher<'a, T: IssueTracker + ?Sized> {
    tracker: &'a T,
    labels: &'a LabelConfig,
}

impl<'a, T: IssueTracker + ?Sized> ActionDispatcher<'a, T> {
    pub fn new(tracker: &'a T, labels: &'a LabelConfig) -> Self {
        Self { tracker, labels }
    }

    pub fn dispatch(&self, issue: &str, result: &ScoreResult) -> DispatchReport {
        let actions = plan_actions(result, self.labels)
            .into_iter()
            .map(|action| self.apply(issue, action))
            .collect();
        DispatchReport { actions }
    }

    fn apply(&self, issue: &str, action: Action) -> ActionReport {
        let outcome = match &action {
            Action::Comment(body) => self.tracker.post_comment(issue, body),
            Action::AddLabel(label) => self.tracker.add_label(issue, label),
            Action::RemoveLabel(label) => self.tracker.remove_label(issue, label),
        };

        let status = match outcome {
            Ok(()) => {
                log::info!("Issue {}: {}", issue, action);
                ActionStatus::Applied
            }
            Err(e) => {
                log::warn!("Issue {}: failed to {}: {}", issue, action, e);
                ActionStatus::Failed(e.to_string())
            }
        };
        ActionReport { action, status }
    }
}

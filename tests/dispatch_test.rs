//! Tracker failures are isolated per call and never abort a run.

use pretty_assertions::assert_eq;
use sevscore::dispatch::{Action, ActionDispatcher, ActionStatus, LabelConfig};
use sevscore::testkit::{RecordingTracker, TrackerCall, TrackerOp};
use sevscore::{ResolvedWeights, ScoreResult, ScorerConfig, SeverityScorer};

fn urgent_low_score() -> ScoreResult {
    ScoreResult {
        final_score: 90.0,
        is_urgent: true,
        should_unlabel: true,
        weights: ResolvedWeights::default(),
    }
}

#[test]
fn test_failed_comment_does_not_block_labels() {
    let tracker = RecordingTracker::new().failing_on(TrackerOp::PostComment);
    let labels = LabelConfig::default();

    let report = ActionDispatcher::new(&tracker, &labels).dispatch("5", &urgent_low_score());

    assert_eq!(tracker.calls().len(), 3);
    assert!(!report.all_succeeded());
    let failed: Vec<_> = report.failures().map(|r| r.action.clone()).collect();
    assert_eq!(failed, vec![Action::Comment("Severity Score: 90".into())]);
}

#[test]
fn test_absent_label_failure_is_reported_with_raw_error() {
    let tracker = RecordingTracker::new().failing_on(TrackerOp::RemoveLabel);
    let labels = LabelConfig::default();

    let report = ActionDispatcher::new(&tracker, &labels).dispatch("5", &urgent_low_score());

    let last = report.actions.last().unwrap();
    assert_eq!(last.action, Action::RemoveLabel("pager-duty".into()));
    match &last.status {
        ActionStatus::Failed(error) => assert!(error.contains("simulated failure")),
        ActionStatus::Applied => panic!("remove label should have failed"),
    }
    assert!(report.actions[..2].iter().all(|r| r.succeeded()));
}

#[test]
fn test_every_call_failing_still_attempts_all() {
    let tracker = RecordingTracker::new()
        .failing_on(TrackerOp::PostComment)
        .failing_on(TrackerOp::AddLabel)
        .failing_on(TrackerOp::RemoveLabel);
    let labels = LabelConfig::default();

    let report = ActionDispatcher::new(&tracker, &labels).dispatch("5", &urgent_low_score());

    assert_eq!(report.failures().count(), 3);
    assert_eq!(
        tracker.calls(),
        vec![
            TrackerCall::PostComment {
                issue: "5".into(),
                body: "Severity Score: 90".into(),
            },
            TrackerCall::AddLabel {
                issue: "5".into(),
                label: "urgent".into(),
            },
            TrackerCall::RemoveLabel {
                issue: "5".into(),
                label: "pager-duty".into(),
            },
        ]
    );
}

#[test]
fn test_run_summary_carries_action_reports() {
    let body = "### Affected areas\n\nOther\n\n### Prod/Non-prod environments\n\nNon-prod\n\n### Is User unblocked?\n\nYes\n";
    let scorer = SeverityScorer::new(ScorerConfig::new("9", body).with_threshold(300.0)).unwrap();
    let tracker = RecordingTracker::new().failing_on(TrackerOp::RemoveLabel);

    let summary = scorer.run(&tracker);

    assert_eq!(summary.outcome.score().unwrap().final_score, 10.0);
    assert_eq!(summary.actions.len(), 2);
    assert!(summary.actions[0].succeeded());
    assert!(!summary.actions[1].succeeded());
}

//! Property-based tests for weight resolution and scoring
//!
//! - Every table label resolves to its own weight, anything else to 0
//! - Scoring the same text twice gives the same result
//! - A missing mandatory answer always skips

use proptest::prelude::*;
use sevscore::extraction::{Answer, Section};
use sevscore::scoring::{final_score, ScoreCalculator, ScoreOutcome, ScoreWeights, UrgencyPolicy};
use sevscore::{ResolvedWeights, ScorerConfig, SeverityScorer, WeightResolver};

fn section() -> impl Strategy<Value = Section> {
    prop::sample::select(Section::ALL.to_vec())
}

fn label_of(section: Section) -> impl Strategy<Value = (&'static str, f64)> {
    prop::sample::select(ScoreWeights::table_for(section).entries().to_vec())
}

fn answer_line(section: Section) -> impl Strategy<Value = String> {
    let labels: Vec<String> = ScoreWeights::table_for(section)
        .entries()
        .iter()
        .map(|(label, _)| label.to_string())
        .collect();
    prop_oneof![prop::sample::select(labels), "[A-Za-z /]{0,20}"]
}

fn issue_body() -> impl Strategy<Value = String> {
    (
        answer_line(Section::AffectedAreas),
        answer_line(Section::AdditionalAffectedAreas),
        answer_line(Section::Environment),
        answer_line(Section::UserUnblocked),
        answer_line(Section::UnblockReason),
    )
        .prop_map(|(area, extra, env, unblocked, reason)| {
            format!(
                "### Affected areas\n\n{area}\n\n### Additional affected areas\n\n{extra}\n\n\
                 ### Prod/Non-prod environments\n\n{env}\n\n### Is User unblocked?\n\n{unblocked}\n\n\
                 ### How was the user un-blocked?\n\n{reason}\n"
            )
        })
}

fn weight() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), Just(1.5), Just(2.0), Just(3.0), Just(30.0), Just(100.0)]
}

proptest! {
    #[test]
    fn prop_table_labels_resolve_to_their_weight(
        (section, (label, expected)) in section().prop_flat_map(|s| (Just(s), label_of(s)))
    ) {
        let resolver = WeightResolver::new();
        prop_assert_eq!(resolver.weight_of(section, &Answer::Label(label.to_string())), expected);
    }

    #[test]
    fn prop_unknown_labels_resolve_to_zero(section in section(), label in "[a-z ]{1,30}") {
        prop_assume!(!ScoreWeights::table_for(section).contains(&label));
        let resolver = WeightResolver::new();
        prop_assert_eq!(resolver.weight_of(section, &Answer::Label(label)), 0.0);
    }

    #[test]
    fn prop_scoring_is_deterministic(body in issue_body()) {
        let scorer = SeverityScorer::new(ScorerConfig::new("1", body).with_threshold(300.0)).unwrap();
        prop_assert_eq!(scorer.evaluate(), scorer.evaluate());
    }

    #[test]
    fn prop_missing_mandatory_weight_skips(
        area in weight(), extra in weight(), env in weight(), unblocked in weight(), reason in weight()
    ) {
        let weights = ResolvedWeights { area, additional_area: extra, environment: env, unblocked, reason };
        let outcome = ScoreCalculator::new(300.0, Box::new(UrgencyPolicy::ReasonOrOutage)).calculate(weights);

        if area == 0.0 || env == 0.0 || unblocked == 0.0 {
            prop_assert!(outcome.is_skipped());
        } else {
            match outcome {
                ScoreOutcome::Scored(result) => {
                    let effective = if reason == 0.0 { 1.0 } else { reason };
                    prop_assert_eq!(result.weights.reason, effective);
                    prop_assert_eq!(result.final_score, final_score(&result.weights));
                    prop_assert_eq!(result.should_unlabel, result.final_score <= 300.0);
                }
                ScoreOutcome::Skipped { .. } => prop_assert!(false, "scored weights were skipped"),
            }
        }
    }
}

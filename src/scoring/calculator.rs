//! Score calculation.
//!
//! `final_score = (area + additional_area) * environment * unblocked * reason`
//!
//! The affected area, environment and user-unblocked answers are mandatory: if
//! any of them resolves to 0 the issue cannot be scored and the outcome is
//! [`ScoreOutcome::Skipped`]. A missing unblock reason counts as the mildest
//! multiplier, 1.

use super::urgency::UrgencyRule;
use super::weights::ResolvedWeights;
use crate::extraction::Section;
use serde::Serialize;

/// Multiplier used when no unblock reason could be resolved.
pub const DEFAULT_REASON_WEIGHT: f64 = 1.0;

/// A computed score and the decisions derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub final_score: f64,
    pub is_urgent: bool,
    pub should_unlabel: bool,
    /// Weights the score was computed from, after default substitution.
    pub weights: ResolvedWeights,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Scored(ScoreResult),
    /// One or more mandatory answers resolved to 0.
    Skipped {
        missing: Vec<Section>,
        weights: ResolvedWeights,
    },
}

impl ScoreOutcome {
    pub fn score(&self) -> Option<&ScoreResult> {
        match self {
            ScoreOutcome::Scored(result) => Some(result),
            ScoreOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ScoreOutcome::Skipped { .. })
    }
}

/// Mandatory sections whose weight is 0.
pub fn missing_mandatory(weights: &ResolvedWeights) -> Vec<Section> {
    Section::MANDATORY
        .into_iter()
        .filter(|section| weights.get(*section) == 0.0)
        .collect()
}

/// Replace a zero reason weight with [`DEFAULT_REASON_WEIGHT`].
pub fn with_default_reason(weights: ResolvedWeights) -> ResolvedWeights {
    if weights.reason == 0.0 {
        ResolvedWeights {
            reason: DEFAULT_REASON_WEIGHT,
            ..weights
        }
    } else {
        weights
    }
}

pub fn final_score(weights: &ResolvedWeights) -> f64 {
    (weights.area + weights.additional_area)
        * weights.environment
        * weights.unblocked
        * weights.reason
}

/// Applies the gate, the formula, the urgency rule and the threshold.
pub struct ScoreCalculator {
    threshold: f64,
    urgency: Box<dyn UrgencyRule>,
}

impl ScoreCalculator {
    pub fn new(threshold: f64, urgency: Box<dyn UrgencyRule>) -> Self {
        Self { threshold, urgency }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn calculate(&self, weights: ResolvedWeights) -> ScoreOutcome {
        let missing = missing_mandatory(&weights);
        if !missing.is_empty() {
            log::debug!("Mandatory answers missing: {:?}", missing);
            return ScoreOutcome::Skipped { missing, weights };
        }

        let weights = with_default_reason(weights);
        let final_score = final_score(&weights);
        let result = ScoreResult {
            final_score,
            is_urgent: self.urgency.is_urgent(&weights),
            should_unlabel: final_score <= self.threshold,
            weights,
        };

        log::debug!(
            "Computed score {} (threshold {}, urgent: {})",
            final_score,
            self.threshold,
            result.is_urgent
        );
        ScoreOutcome::Scored(result)
    }
}

impl std::fmt::Debug for ScoreCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCalculator")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

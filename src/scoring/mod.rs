//! Severity scoring: weight tables, the score formula and urgency policies.

pub mod calculator;
pub mod urgency;
pub mod weights;

pub use calculator::{
    final_score, missing_mandatory, with_default_reason, ScoreCalculator, ScoreOutcome,
    ScoreResult, DEFAULT_REASON_WEIGHT,
};
pub use urgency::{UrgencyPolicy, UrgencyRule};
pub use weights::{ResolvedWeights, ScoreWeights, WeightResolver, WeightTable};

//! The severity scorer: extraction, weighting, scoring and dispatch for one
//! issue event.
//!
//! All inputs arrive through [`ScorerConfig`]; nothing is read from the
//! process environment here.
//!
//! ```rust
//! use sevscore::extraction::ExtractionStyle;
//! use sevscore::scorer::{ScorerConfig, SeverityScorer};
//! use sevscore::scoring::UrgencyPolicy;
//!
//! let body = "### Affected areas\n\nLogin issues\n\n\
//!             ### Prod/Non-prod environments\n\nProd\n\n\
//!             ### Is User unblocked?\n\nNo\n";
//! let config = ScorerConfig::new("42", body)
//!     .with_threshold(300.0)
//!     .with_urgency_policy(UrgencyPolicy::ReasonOnly)
//!     .with_extraction(ExtractionStyle::FreeText);
//!
//! let scorer = SeverityScorer::new(config).unwrap();
//! let evaluation = scorer.evaluate();
//! assert_eq!(evaluation.outcome.score().map(|s| s.final_score), Some(200.0));
//! ```

use crate::dispatch::{ActionDispatcher, ActionReport, LabelConfig};
use crate::errors::ScorerError;
use crate::extraction::{ExtractionStyle, FieldExtractor, IssueSubmission};
use crate::scoring::{ScoreCalculator, ScoreOutcome, UrgencyPolicy, UrgencyRule, WeightResolver};
use crate::tracker::IssueTracker;
use serde::Serialize;

/// Everything a single scoring run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    pub issue_id: String,
    pub issue_body: String,
    /// Scores at or below this value lose the pager-duty label. Must be set.
    pub score_threshold: Option<f64>,
    pub urgency_policy: UrgencyPolicy,
    pub extraction: ExtractionStyle,
    pub labels: LabelConfig,
}

impl ScorerConfig {
    pub fn new(issue_id: impl Into<String>, issue_body: impl Into<String>) -> Self {
        Self {
            issue_id: issue_id.into(),
            issue_body: issue_body.into(),
            score_threshold: None,
            urgency_policy: UrgencyPolicy::default(),
            extraction: ExtractionStyle::FreeText,
            labels: LabelConfig::default(),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    pub fn with_urgency_policy(mut self, policy: UrgencyPolicy) -> Self {
        self.urgency_policy = policy;
        self
    }

    pub fn with_extraction(mut self, extraction: ExtractionStyle) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn with_labels(mut self, labels: LabelConfig) -> Self {
        self.labels = labels;
        self
    }

    fn validated_threshold(&self) -> Result<f64, ScorerError> {
        match self.score_threshold {
            None => Err(ScorerError::configuration("score threshold is not set")),
            Some(t) if !t.is_finite() => Err(ScorerError::configuration(format!(
                "score threshold must be a finite number, got {}",
                t
            ))),
            Some(t) => Ok(t),
        }
    }
}

/// Extracted answers and the outcome computed from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub submission: IssueSubmission,
    pub outcome: ScoreOutcome,
}

/// What a run computed and which tracker calls it made.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub issue_id: String,
    pub threshold: f64,
    pub urgency_policy: UrgencyPolicy,
    pub submission: IssueSubmission,
    pub outcome: ScoreOutcome,
    pub actions: Vec<ActionReport>,
}

impl RunSummary {
    pub fn is_skipped(&self) -> bool {
        self.outcome.is_skipped()
    }
}

pub struct SeverityScorer {
    config: ScorerConfig,
    extractor: Box<dyn FieldExtractor>,
    resolver: WeightResolver,
    calculator: ScoreCalculator,
}

impl SeverityScorer {
    /// Build a scorer, failing fast on an unset or non-finite threshold or a
    /// blank issue id.
    pub fn new(config: ScorerConfig) -> Result<Self, ScorerError> {
        let threshold = config.validated_threshold()?;
        if config.issue_id.trim().is_empty() {
            return Err(ScorerError::configuration("issue id is not set"));
        }

        Ok(Self {
            extractor: config.extraction.extractor(),
            resolver: WeightResolver::new(),
            calculator: ScoreCalculator::new(threshold, Box::new(config.urgency_policy)),
            config,
        })
    }

    /// Replace the configured urgency policy with a custom rule.
    pub fn with_urgency_rule(mut self, rule: Box<dyn UrgencyRule>) -> Self {
        self.calculator = ScoreCalculator::new(self.calculator.threshold(), rule);
        self
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Extract, weigh and score without touching the tracker.
    pub fn evaluate(&self) -> Evaluation {
        let submission = self.extractor.submission(&self.config.issue_body);
        let weights = self.resolver.resolve(&submission);
        log::debug!("Resolved weights for issue {}: {:?}", self.config.issue_id, weights);

        Evaluation {
            outcome: self.calculator.calculate(weights),
            submission,
        }
    }

    /// Evaluate and, when the issue could be scored, apply the resulting
    /// actions. Skipped issues make no tracker calls.
    pub fn run<T: IssueTracker + ?Sized>(&self, tracker: &T) -> RunSummary {
        let Evaluation {
            submission,
            outcome,
        } = self.evaluate();

        let actions = match &outcome {
            ScoreOutcome::Scored(result) => {
                log::info!(
                    "Issue {} scored {}",
                    self.config.issue_id,
                    result.final_score
                );
                ActionDispatcher::new(tracker, &self.config.labels)
                    .dispatch(&self.config.issue_id, result)
                    .actions
            }
            ScoreOutcome::Skipped { missing, .. } => {
                let names: Vec<&str> = missing.iter().map(|s| s.title()).collect();
                log::info!(
                    "Issue {} not scored, missing: {}",
                    self.config.issue_id,
                    names.join(", ")
                );
                Vec::new()
            }
        };

        RunSummary {
            issue_id: self.config.issue_id.clone(),
            threshold: self.calculator.threshold(),
            urgency_policy: self.config.urgency_policy,
            submission,
            outcome,
            actions,
        }
    }
}

impl std::fmt::Debug for SeverityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeverityScorer")
            .field("config", &self.config)
            .field("calculator", &self.calculator)
            .finish_non_exhaustive()
    }
}

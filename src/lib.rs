// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod scorer;
pub mod scoring;
pub mod testkit;
pub mod tracker;

// Re-export commonly used types
pub use crate::dispatch::{ActionDispatcher, DispatchReport, LabelConfig};
pub use crate::errors::{ScorerError, TrackerError};
pub use crate::extraction::{Answer, ExtractionStyle, FieldExtractor, IssueSubmission, Section};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::scorer::{Evaluation, RunSummary, ScorerConfig, SeverityScorer};
pub use crate::scoring::{
    ResolvedWeights, ScoreCalculator, ScoreOutcome, ScoreResult, ScoreWeights, UrgencyPolicy,
    UrgencyRule, WeightResolver,
};
pub use crate::tracker::{DryRunTracker, GhCliTracker, IssueTracker};

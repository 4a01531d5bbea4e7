//! Field extraction from raw issue bodies.
//!
//! Issue bodies follow a question/answer template: a section header followed by
//! the submitter's answer. Two historical conventions exist for how that answer is
//! written down, and each one is a [`FieldExtractor`] strategy:
//!
//! - [`FreeTextExtractor`]: the answer is free text between two headers, as
//!   rendered by GitHub issue forms.
//! - [`CountMarkerExtractor`]: the answer carries its weight in a parenthesized
//!   suffix, e.g. `- [x] Login issues (50)`.
//!
//! Absence is an expected outcome. Extractors never fail; a missing section or
//! an empty answer resolves to [`Answer::None`].
//!
//! # Example
//!
//! ```rust
//! use sevscore::extraction::{Answer, FieldExtractor, FreeTextExtractor, Section};
//!
//! let body = "### Affected areas\n\nLogin issues\n\n### Prod/Non-prod environments\n\nProd\n";
//! let extractor = FreeTextExtractor::new();
//!
//! assert_eq!(
//!     extractor.extract(body, Section::AffectedAreas),
//!     Answer::Label("Login issues".to_string())
//! );
//! assert_eq!(extractor.extract(body, Section::UserUnblocked), Answer::None);
//! ```

mod count_marker;
mod free_text;
mod sections;

pub use count_marker::CountMarkerExtractor;
pub use free_text::FreeTextExtractor;
pub use sections::{find_section_body, Section};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An answer captured from one section of an issue body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// The section or its answer was not found.
    None,
    /// Free text answer, matched against a weight table.
    Label(String),
    /// Raw contents of a parenthesized marker, parsed as the weight itself.
    Marker(String),
}

impl Answer {
    pub fn is_none(&self) -> bool {
        matches!(self, Answer::None)
    }

    /// Text of the answer, `"None"` for the sentinel.
    pub fn as_str(&self) -> &str {
        match self {
            Answer::None => "None",
            Answer::Label(text) | Answer::Marker(text) => text,
        }
    }
}

/// The five answers of a single issue submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSubmission {
    pub affected_area: Answer,
    pub additional_affected_area: Answer,
    pub environment: Answer,
    pub user_unblocked: Answer,
    pub unblock_reason: Answer,
}

impl IssueSubmission {
    /// Answer recorded for a given section.
    pub fn answer(&self, section: Section) -> &Answer {
        match section {
            Section::AffectedAreas => &self.affected_area,
            Section::AdditionalAffectedAreas => &self.additional_affected_area,
            Section::Environment => &self.environment,
            Section::UserUnblocked => &self.user_unblocked,
            Section::UnblockReason => &self.unblock_reason,
        }
    }
}

/// Capability of pulling one section's answer out of an issue body.
pub trait FieldExtractor: Send + Sync {
    /// Locate `section` in `body` and capture its answer.
    fn extract(&self, body: &str, section: Section) -> Answer;

    /// Extract every section of the template.
    fn submission(&self, body: &str) -> IssueSubmission {
        IssueSubmission {
            affected_area: self.extract(body, Section::AffectedAreas),
            additional_affected_area: self.extract(body, Section::AdditionalAffectedAreas),
            environment: self.extract(body, Section::Environment),
            user_unblocked: self.extract(body, Section::UserUnblocked),
            unblock_reason: self.extract(body, Section::UnblockReason),
        }
    }
}

/// Which text convention the issue bodies follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionStyle {
    /// Free text answers between section headers
    FreeText,
    /// Weights embedded as a parenthesized numeric suffix
    CountMarker,
}

impl ExtractionStyle {
    pub fn extractor(self) -> Box<dyn FieldExtractor> {
        match self {
            ExtractionStyle::FreeText => Box::new(FreeTextExtractor::new()),
            ExtractionStyle::CountMarker => Box::new(CountMarkerExtractor::new()),
        }
    }
}

impl std::fmt::Display for ExtractionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStyle::FreeText => write!(f, "free-text"),
            ExtractionStyle::CountMarker => write!(f, "count-marker"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "### Affected areas\n\nCI\n\n### Prod/Non-prod environments\n\nNon-prod\n";

    #[test]
    fn test_submission_collects_all_sections() {
        let submission = FreeTextExtractor::new().submission(BODY);

        assert_eq!(submission.affected_area, Answer::Label("CI".into()));
        assert_eq!(submission.environment, Answer::Label("Non-prod".into()));
        assert!(submission.additional_affected_area.is_none());
        assert!(submission.user_unblocked.is_none());
        assert!(submission.unblock_reason.is_none());
    }

    #[test]
    fn test_answer_lookup_by_section() {
        let submission = FreeTextExtractor::new().submission(BODY);
        assert_eq!(submission.answer(Section::AffectedAreas).as_str(), "CI");
        assert_eq!(submission.answer(Section::UnblockReason).as_str(), "None");
    }

    #[test]
    fn test_style_selects_strategy() {
        let body = "### Affected areas\n\n- [x] CI (30)\n";
        assert_eq!(
            ExtractionStyle::FreeText
                .extractor()
                .extract(body, Section::AffectedAreas),
            Answer::Label("CI (30)".into())
        );
        assert_eq!(
            ExtractionStyle::CountMarker
                .extractor()
                .extract(body, Section::AffectedAreas),
            Answer::Marker("30".into())
        );
    }
}

//! Presets for the two issue template conventions in use.
//!
//! - **IssueForms**: GitHub issue forms, free text answers, urgent on a
//!   disabled critical functionality or a full dashboard outage, threshold 300.
//! - **Checkbox**: markdown checklists with weights in parentheses, urgent
//!   only on a disabled critical functionality, no threshold (it must be
//!   supplied by the caller).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::extraction::ExtractionStyle;
use crate::scoring::UrgencyPolicy;

pub const DEFAULT_THRESHOLD: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PresetLevel {
    /// GitHub issue forms with free text answers (default)
    #[default]
    IssueForms,
    /// Markdown checklists carrying weights in parentheses
    Checkbox,
}

impl PresetLevel {
    pub fn extraction(self) -> ExtractionStyle {
        match self {
            PresetLevel::IssueForms => ExtractionStyle::FreeText,
            PresetLevel::Checkbox => ExtractionStyle::CountMarker,
        }
    }

    pub fn urgency_policy(self) -> UrgencyPolicy {
        match self {
            PresetLevel::IssueForms => UrgencyPolicy::ReasonOrOutage,
            PresetLevel::Checkbox => UrgencyPolicy::ReasonOnly,
        }
    }

    pub fn threshold(self) -> Option<f64> {
        match self {
            PresetLevel::IssueForms => Some(DEFAULT_THRESHOLD),
            PresetLevel::Checkbox => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PresetLevel::IssueForms => "issue-forms",
            PresetLevel::Checkbox => "checkbox",
        }
    }
}

impl std::fmt::Display for PresetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

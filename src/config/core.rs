use serde::{Deserialize, Serialize};

use super::presets::PresetLevel;
use crate::dispatch::LabelConfig;
use crate::extraction::ExtractionStyle;
use crate::scoring::UrgencyPolicy;

/// Root of `.sevscore.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SevscoreConfig {
    /// Base preset the other sections refine
    #[serde(default)]
    pub preset: Option<PresetLevel>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub labels: Option<LabelConfig>,

    #[serde(default)]
    pub tracker: Option<TrackerConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default)]
    pub threshold: Option<f64>,

    #[serde(default)]
    pub urgency_policy: Option<UrgencyPolicy>,

    #[serde(default)]
    pub extraction: Option<ExtractionStyle>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    /// `owner/name`; defaults to the repository of the working directory
    #[serde(default)]
    pub repo: Option<String>,
}

impl SevscoreConfig {
    pub fn threshold(&self) -> Option<f64> {
        self.scoring.as_ref().and_then(|s| s.threshold)
    }

    pub fn urgency_policy(&self) -> Option<UrgencyPolicy> {
        self.scoring.as_ref().and_then(|s| s.urgency_policy)
    }

    pub fn extraction(&self) -> Option<ExtractionStyle> {
        self.scoring.as_ref().and_then(|s| s.extraction)
    }

    pub fn repo(&self) -> Option<&str> {
        self.tracker.as_ref().and_then(|t| t.repo.as_deref())
    }
}

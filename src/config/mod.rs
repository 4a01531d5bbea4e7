//! Run configuration.
//!
//! Settings come from three layers, highest precedence first:
//!
//! 1. command line flags (and the CI environment variables backing them),
//! 2. `.sevscore.toml`, found by walking up from the working directory,
//! 3. the selected [`PresetLevel`].

mod core;
mod loader;
pub mod presets;

pub use self::core::{ScoringConfig, SevscoreConfig, TrackerConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use presets::{PresetLevel, DEFAULT_THRESHOLD};

use crate::dispatch::LabelConfig;
use crate::extraction::ExtractionStyle;
use crate::scorer::ScorerConfig;
use crate::scoring::UrgencyPolicy;

/// Values given explicitly for this run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub preset: Option<PresetLevel>,
    pub threshold: Option<f64>,
    pub urgency_policy: Option<UrgencyPolicy>,
    pub extraction: Option<ExtractionStyle>,
    pub repo: Option<String>,
}

/// Fully layered settings. The threshold may still be unset; the scorer
/// refuses to start in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub preset: PresetLevel,
    pub threshold: Option<f64>,
    pub urgency_policy: UrgencyPolicy,
    pub extraction: ExtractionStyle,
    pub labels: LabelConfig,
    pub repo: Option<String>,
}

impl Settings {
    pub fn resolve(overrides: &SettingsOverrides, file: &SevscoreConfig) -> Self {
        let preset = overrides.preset.or(file.preset).unwrap_or_default();

        Self {
            preset,
            threshold: overrides
                .threshold
                .or_else(|| file.threshold())
                .or_else(|| preset.threshold()),
            urgency_policy: overrides
                .urgency_policy
                .or_else(|| file.urgency_policy())
                .unwrap_or_else(|| preset.urgency_policy()),
            extraction: overrides
                .extraction
                .or_else(|| file.extraction())
                .unwrap_or_else(|| preset.extraction()),
            labels: file.labels.clone().unwrap_or_default(),
            repo: overrides
                .repo
                .clone()
                .or_else(|| file.repo().map(str::to_string)),
        }
    }

    pub fn scorer_config(
        &self,
        issue_id: impl Into<String>,
        issue_body: impl Into<String>,
    ) -> ScorerConfig {
        ScorerConfig {
            issue_id: issue_id.into(),
            issue_body: issue_body.into(),
            score_threshold: self.threshold,
            urgency_policy: self.urgency_policy,
            extraction: self.extraction,
            labels: self.labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_issue_forms_preset() {
        let settings = Settings::resolve(&SettingsOverrides::default(), &SevscoreConfig::default());
        assert_eq!(settings.preset, PresetLevel::IssueForms);
        assert_eq!(settings.threshold, Some(DEFAULT_THRESHOLD));
        assert_eq!(settings.urgency_policy, UrgencyPolicy::ReasonOrOutage);
        assert_eq!(settings.extraction, ExtractionStyle::FreeText);
    }

    #[test]
    fn test_file_refines_preset() {
        let file = SevscoreConfig {
            preset: Some(PresetLevel::Checkbox),
            scoring: Some(ScoringConfig {
                threshold: Some(150.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let settings = Settings::resolve(&SettingsOverrides::default(), &file);

        assert_eq!(settings.threshold, Some(150.0));
        assert_eq!(settings.extraction, ExtractionStyle::CountMarker);
        assert_eq!(settings.urgency_policy, UrgencyPolicy::ReasonOnly);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = SevscoreConfig {
            scoring: Some(ScoringConfig {
                threshold: Some(150.0),
                urgency_policy: Some(UrgencyPolicy::ReasonOnly),
                extraction: None,
            }),
            tracker: Some(TrackerConfig {
                repo: Some("a/b".into()),
            }),
            ..Default::default()
        };
        let overrides = SettingsOverrides {
            threshold: Some(500.0),
            urgency_policy: Some(UrgencyPolicy::ReasonOrOutage),
            repo: Some("c/d".into()),
            ..Default::default()
        };
        let settings = Settings::resolve(&overrides, &file);

        assert_eq!(settings.threshold, Some(500.0));
        assert_eq!(settings.urgency_policy, UrgencyPolicy::ReasonOrOutage);
        assert_eq!(settings.repo.as_deref(), Some("c/d"));
    }

    #[test]
    fn test_checkbox_without_threshold_stays_unset() {
        let overrides = SettingsOverrides {
            preset: Some(PresetLevel::Checkbox),
            ..Default::default()
        };
        let settings = Settings::resolve(&overrides, &SevscoreConfig::default());
        assert_eq!(settings.threshold, None);
        assert_eq!(settings.scorer_config("1", "").score_threshold, None);
    }
}

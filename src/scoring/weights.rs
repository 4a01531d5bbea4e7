//! Static weight tables and the resolver that applies them.

use crate::extraction::{Answer, IssueSubmission, Section};
use serde::Serialize;

/// Immutable label → weight table with exact, case-sensitive lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    name: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl WeightTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, f64)]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        self.entries
    }

    /// Weight of `label`, 0 for anything outside the table.
    pub fn lookup(&self, label: &str) -> f64 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map_or(0.0, |(_, weight)| *weight)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.iter().any(|(candidate, _)| *candidate == label)
    }
}

/// Affected areas, shared by the primary and additional area sections.
pub static AFFECTED_AREAS: WeightTable = WeightTable::new(
    "affected areas",
    &[
        ("Devtron dashboard completely down", 100.0),
        ("Login issues", 50.0),
        ("RBAC issues", 40.0),
        ("Security features", 40.0),
        ("CI", 30.0),
        ("CD", 30.0),
        ("App creation", 30.0),
        ("Deployment", 30.0),
        ("Devtron installation", 20.0),
        ("Helm apps", 20.0),
        ("Other", 10.0),
        ("None", 0.0),
    ],
);

pub static ENVIRONMENTS: WeightTable = WeightTable::new(
    "environments",
    &[("Prod", 2.0), ("Non-prod", 1.0), ("None", 0.0)],
);

pub static USER_UNBLOCKED: WeightTable = WeightTable::new(
    "user unblocked",
    &[("No", 2.0), ("Yes", 1.0), ("None", 0.0)],
);

pub static UNBLOCK_REASONS: WeightTable = WeightTable::new(
    "unblock reasons",
    &[
        ("By doing some changes from the backend/DB", 1.0),
        ("By applying a workaround from the UI", 1.0),
        ("By restarting a service", 1.5),
        ("By upgrading or downgrading Devtron", 2.0),
        ("By disabling a CRITICAL functionality", 3.0),
        ("None", 0.0),
    ],
);

/// The process-wide weight tables, indexed by section.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights;

impl ScoreWeights {
    /// Table that prices answers to `section`.
    pub fn table_for(section: Section) -> &'static WeightTable {
        match section {
            Section::AffectedAreas | Section::AdditionalAffectedAreas => &AFFECTED_AREAS,
            Section::Environment => &ENVIRONMENTS,
            Section::UserUnblocked => &USER_UNBLOCKED,
            Section::UnblockReason => &UNBLOCK_REASONS,
        }
    }

    /// Distinct tables, in display order.
    pub fn tables() -> [&'static WeightTable; 4] {
        [
            &AFFECTED_AREAS,
            &ENVIRONMENTS,
            &USER_UNBLOCKED,
            &UNBLOCK_REASONS,
        ]
    }
}

/// Numeric weight for each of the five scoring inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResolvedWeights {
    pub area: f64,
    pub additional_area: f64,
    pub environment: f64,
    pub unblocked: f64,
    pub reason: f64,
}

impl ResolvedWeights {
    pub fn get(&self, section: Section) -> f64 {
        match section {
            Section::AffectedAreas => self.area,
            Section::AdditionalAffectedAreas => self.additional_area,
            Section::Environment => self.environment,
            Section::UserUnblocked => self.unblocked,
            Section::UnblockReason => self.reason,
        }
    }
}

/// Maps extracted answers to weights.
///
/// Labels go through [`ScoreWeights`]; markers are parsed as the weight itself,
/// as an integer for every section but the unblock reason, which accepts a
/// decimal. Anything unparsable resolves to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightResolver;

impl WeightResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, submission: &IssueSubmission) -> ResolvedWeights {
        ResolvedWeights {
            area: self.weight_of(Section::AffectedAreas, &submission.affected_area),
            additional_area: self.weight_of(
                Section::AdditionalAffectedAreas,
                &submission.additional_affected_area,
            ),
            environment: self.weight_of(Section::Environment, &submission.environment),
            unblocked: self.weight_of(Section::UserUnblocked, &submission.user_unblocked),
            reason: self.weight_of(Section::UnblockReason, &submission.unblock_reason),
        }
    }

    pub fn weight_of(&self, section: Section, answer: &Answer) -> f64 {
        match answer {
            Answer::None => 0.0,
            Answer::Label(label) => ScoreWeights::table_for(section).lookup(label),
            Answer::Marker(marker) => parse_marker(section, marker),
        }
    }
}

fn parse_marker(section: Section, marker: &str) -> f64 {
    let marker = marker.trim();
    match section {
        Section::UnblockReason => marker
            .parse::<f64>()
            .ok()
            .filter(|weight| weight.is_finite() && *weight >= 0.0)
            .unwrap_or(0.0),
        _ => marker.parse::<u32>().map_or(0.0, f64::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_labels() {
        assert_eq!(AFFECTED_AREAS.lookup("Login issues"), 50.0);
        assert_eq!(AFFECTED_AREAS.lookup("Devtron dashboard completely down"), 100.0);
        assert_eq!(ENVIRONMENTS.lookup("Prod"), 2.0);
        assert_eq!(USER_UNBLOCKED.lookup("No"), 2.0);
        assert_eq!(UNBLOCK_REASONS.lookup("By disabling a CRITICAL functionality"), 3.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(ENVIRONMENTS.lookup("prod"), 0.0);
        assert_eq!(AFFECTED_AREAS.lookup("login issues"), 0.0);
    }

    #[test]
    fn test_none_maps_to_zero_in_every_table() {
        for table in ScoreWeights::tables() {
            assert!(table.contains("None"), "{} lacks None", table.name());
            assert_eq!(table.lookup("None"), 0.0);
        }
    }

    #[test]
    fn test_area_sections_share_one_table() {
        assert!(std::ptr::eq(
            ScoreWeights::table_for(Section::AffectedAreas),
            ScoreWeights::table_for(Section::AdditionalAffectedAreas)
        ));
    }

    #[test]
    fn test_unblock_reasons_has_five_methods() {
        let methods = UNBLOCK_REASONS
            .entries()
            .iter()
            .filter(|(label, _)| *label != "None")
            .count();
        assert_eq!(methods, 5);
    }

    #[test]
    fn test_marker_parsing() {
        let resolver = WeightResolver::new();
        let marker = |s: &str| Answer::Marker(s.to_string());

        assert_eq!(resolver.weight_of(Section::AffectedAreas, &marker("50")), 50.0);
        assert_eq!(resolver.weight_of(Section::AffectedAreas, &marker("1.5")), 0.0);
        assert_eq!(resolver.weight_of(Section::Environment, &marker("abc")), 0.0);
        assert_eq!(resolver.weight_of(Section::UnblockReason, &marker("1.5")), 1.5);
        assert_eq!(resolver.weight_of(Section::UnblockReason, &marker("x")), 0.0);
        assert_eq!(resolver.weight_of(Section::UnblockReason, &marker("NaN")), 0.0);
    }

    #[test]
    fn test_sentinel_resolves_to_zero() {
        let resolver = WeightResolver::new();
        for section in Section::ALL {
            assert_eq!(resolver.weight_of(section, &Answer::None), 0.0);
        }
    }
}

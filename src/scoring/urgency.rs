//! Urgency policies.
//!
//! Whether an issue gets the urgent label is a predicate over its resolved
//! weights. Two policies exist in the wild and neither is authoritative, so
//! both are available and callers may also plug in their own [`UrgencyRule`].

use super::weights::ResolvedWeights;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reason weight for "By disabling a CRITICAL functionality".
pub const CRITICAL_REASON_WEIGHT: f64 = 3.0;

/// Area weight for "Devtron dashboard completely down".
pub const OUTAGE_AREA_WEIGHT: f64 = 100.0;

/// Decides whether a scored issue is urgent.
pub trait UrgencyRule: Send + Sync {
    fn is_urgent(&self, weights: &ResolvedWeights) -> bool;
}

impl<F> UrgencyRule for F
where
    F: Fn(&ResolvedWeights) -> bool + Send + Sync,
{
    fn is_urgent(&self, weights: &ResolvedWeights) -> bool {
        self(weights)
    }
}

/// Built-in urgency policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum UrgencyPolicy {
    /// Urgent only when a critical functionality was disabled
    ReasonOnly,
    /// Urgent when a critical functionality was disabled or the dashboard is down
    #[default]
    ReasonOrOutage,
}

impl UrgencyPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyPolicy::ReasonOnly => "reason-only",
            UrgencyPolicy::ReasonOrOutage => "reason-or-outage",
        }
    }
}

impl UrgencyRule for UrgencyPolicy {
    fn is_urgent(&self, weights: &ResolvedWeights) -> bool {
        let critical = weights.reason == CRITICAL_REASON_WEIGHT;
        match self {
            UrgencyPolicy::ReasonOnly => critical,
            UrgencyPolicy::ReasonOrOutage => critical || weights.area == OUTAGE_AREA_WEIGHT,
        }
    }
}

impl std::fmt::Display for UrgencyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

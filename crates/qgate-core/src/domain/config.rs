//! Gate configuration: weights, threshold, fallbacks and penalties.
//!
//! Built once at startup and passed explicitly to the loader and evaluator.

use serde::{Deserialize, Serialize};

use super::characteristic::Characteristic;

/// Weight of each scored characteristic in the overall score.
///
/// # Invariants
///
/// Weights lie in `[0, 1]` and sum to 1.0 over the table. This holds by
/// construction of [`WeightTable::standard`]; it is not re-checked at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    entries: Vec<(Characteristic, f64)>,
}

impl WeightTable {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                (Characteristic::PerformanceEfficiency, 0.30),
                (Characteristic::Security, 0.25),
                (Characteristic::Usability, 0.20),
                (Characteristic::FunctionalSuitability, 0.15),
                (Characteristic::Compatibility, 0.10),
            ],
        }
    }

    pub fn weight(&self, characteristic: Characteristic) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == characteristic)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Characteristic, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }
}

/// Scores substituted when a report is missing or unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackPolicy {
    /// A broken performance run is itself disqualifying.
    pub performance_efficiency: f64,
    pub security: f64,
    pub usability: f64,
    pub functional_suitability: f64,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            performance_efficiency: 0.0,
            security: 85.0,
            usability: 85.0,
            functional_suitability: 85.0,
        }
    }
}

/// Points deducted per finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalties {
    pub per_high_risk_alert: f64,
    pub per_accessibility_violation: f64,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            per_high_risk_alert: 20.0,
            per_accessibility_violation: 5.0,
        }
    }
}

/// Complete quality gate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    pub weights: WeightTable,
    /// Minimum overall score (inclusive) for a PASS.
    pub threshold: f64,
    pub fallbacks: FallbackPolicy,
    pub penalties: Penalties,
}

impl GateConfig {
    /// Standard gate: ISO 25010 weights, threshold 70.
    pub fn standard() -> Self {
        Self {
            weights: WeightTable::standard(),
            threshold: 70.0,
            fallbacks: FallbackPolicy::default(),
            penalties: Penalties::default(),
        }
    }

    /// Override the threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the fallback policy.
    pub fn with_fallbacks(mut self, fallbacks: FallbackPolicy) -> Self {
        self.fallbacks = fallbacks;
        self
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::standard()
    }
}

//! Quality characteristics and the per-characteristic score mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A quality characteristic measured against the deployed site.
///
/// Declaration order is the order used in breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    PerformanceEfficiency,
    /// Informational only; carries no weight.
    Seo,
    Security,
    Usability,
    FunctionalSuitability,
    /// Weighted, but no report currently feeds it.
    Compatibility,
}

impl Characteristic {
    pub const ALL: [Characteristic; 6] = [
        Self::PerformanceEfficiency,
        Self::Seo,
        Self::Security,
        Self::Usability,
        Self::FunctionalSuitability,
        Self::Compatibility,
    ];

    /// Stable snake_case key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerformanceEfficiency => "performance_efficiency",
            Self::Seo => "seo",
            Self::Security => "security",
            Self::Usability => "usability",
            Self::FunctionalSuitability => "functional_suitability",
            Self::Compatibility => "compatibility",
        }
    }

    /// Label used in the human-readable summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::PerformanceEfficiency => "Performance Efficiency",
            Self::Seo => "SEO",
            Self::Security => "Security",
            Self::Usability => "Usability",
            Self::FunctionalSuitability => "Functional Suitability",
            Self::Compatibility => "Compatibility",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores in `[0, 100]` keyed by characteristic, iterated in characteristic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacteristicScores(BTreeMap<Characteristic, f64>);

impl CharacteristicScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a score, clamped into `[0, 100]`.
    pub fn insert(&mut self, characteristic: Characteristic, score: f64) {
        self.0.insert(characteristic, clamp_percent(score));
    }

    pub fn get(&self, characteristic: Characteristic) -> Option<f64> {
        self.0.get(&characteristic).copied()
    }

    pub fn contains(&self, characteristic: Characteristic) -> bool {
        self.0.contains_key(&characteristic)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Characteristic, f64)> + '_ {
        self.0.iter().map(|(c, s)| (*c, *s))
    }
}

impl FromIterator<(Characteristic, f64)> for CharacteristicScores {
    fn from_iter<I: IntoIterator<Item = (Characteristic, f64)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (characteristic, score) in iter {
            scores.insert(characteristic, score);
        }
        scores
    }
}

fn clamp_percent(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for c in Characteristic::ALL {
            let json = serde_json::to_string(&c).expect("serialize");
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
    }

    #[test]
    fn test_iteration_follows_declaration_order() {
        let scores: CharacteristicScores = [
            (Characteristic::FunctionalSuitability, 85.0),
            (Characteristic::Seo, 90.0),
            (Characteristic::PerformanceEfficiency, 10.0),
        ]
        .into_iter()
        .collect();

        let order: Vec<Characteristic> = scores.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![
                Characteristic::PerformanceEfficiency,
                Characteristic::Seo,
                Characteristic::FunctionalSuitability,
            ]
        );
    }

    #[test]
    fn test_insert_clamps_out_of_range() {
        let mut scores = CharacteristicScores::new();
        scores.insert(Characteristic::Security, 140.0);
        scores.insert(Characteristic::Usability, -3.0);
        scores.insert(Characteristic::Seo, f64::NAN);

        assert_eq!(scores.get(Characteristic::Security), Some(100.0));
        assert_eq!(scores.get(Characteristic::Usability), Some(0.0));
        assert_eq!(scores.get(Characteristic::Seo), Some(0.0));
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let scores: CharacteristicScores = [(Characteristic::Security, 85.0)].into_iter().collect();
        let json = serde_json::to_value(&scores).expect("serialize");
        assert_eq!(json, serde_json::json!({ "security": 85.0 }));
    }
}

//! Gate verdict types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::characteristic::CharacteristicScores;

/// Binary gate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateOutcome {
    Pass,
    Fail,
}

impl GateOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of evaluating characteristic scores against a gate config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Weighted overall score, rounded to two decimals.
    pub overall_score: f64,
    /// Every characteristic present in the evaluated mapping.
    pub breakdown: CharacteristicScores,
    /// Whether the gate passed.
    pub passed: bool,
    /// Threshold the overall score was compared against.
    pub threshold: f64,
    /// Summary message.
    pub message: String,
}

impl Verdict {
    pub fn outcome(&self) -> GateOutcome {
        if self.passed {
            GateOutcome::Pass
        } else {
            GateOutcome::Fail
        }
    }
}

//! Quality gate evaluator.
//!
//! Combines [`CharacteristicScores`] under a [`GateConfig`] weight table into a
//! single overall score and produces the [`Verdict`] that blocks or allows a
//! deployment. Evaluation is a pure function of its inputs.

use tracing::debug;

use crate::domain::{CharacteristicScores, GateConfig, Verdict};

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Weighted sum over every weight-table entry.
///
/// A characteristic absent from `scores` contributes 0. Fallback substitution
/// is the loader's job, not the evaluator's.
pub fn weighted_score(scores: &CharacteristicScores, config: &GateConfig) -> f64 {
    config
        .weights
        .iter()
        .map(|(characteristic, weight)| scores.get(characteristic).unwrap_or(0.0) * weight)
        .sum()
}

/// Slack for float noise in the weighted sum (e.g. `100 × 0.15`). Far below
/// the two-decimal display precision.
const SCORE_EPSILON: f64 = 1e-9;

/// Round to two decimals, half away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Evaluate `scores` against `config`, returning a [`Verdict`].
///
/// The unrounded weighted sum is compared against the threshold; the
/// two-decimal rounding only applies to the reported `overall_score`.
pub fn evaluate(scores: &CharacteristicScores, config: &GateConfig) -> Verdict {
    let raw = weighted_score(scores, config);
    let passed = raw >= config.threshold - SCORE_EPSILON;
    let overall_score = round_cents(raw);

    let message = if passed {
        "Quality gate PASSED".to_string()
    } else {
        format!(
            "Quality gate FAILED. Score below threshold ({}%)",
            config.threshold
        )
    };

    debug!(raw, overall_score, threshold = config.threshold, passed, "gate evaluated");

    Verdict {
        overall_score,
        breakdown: scores.clone(),
        passed,
        threshold: config.threshold,
        message,
    }
}

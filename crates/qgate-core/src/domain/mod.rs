//! Domain models for the quality gate.
//!
//! - `Characteristic` / `CharacteristicScores`: what is measured and the scores
//! - `GateConfig`: weights, threshold, fallbacks and penalties
//! - `Verdict`: the pass/fail decision

pub mod characteristic;
pub mod config;
pub mod error;
pub mod verdict;

pub use characteristic::{Characteristic, CharacteristicScores};
pub use config::{FallbackPolicy, GateConfig, Penalties, WeightTable};
pub use error::{GateError, Result};
pub use verdict::{GateOutcome, Verdict};

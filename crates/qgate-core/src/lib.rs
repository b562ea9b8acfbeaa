//! Quality gate core library.
//!
//! Loads black-box check reports (Lighthouse, ZAP, axe, smoke test) from a
//! results directory, combines them into a weighted ISO 25010 quality score
//! and decides whether a deployment may proceed.

pub mod domain;
pub mod gate;
pub mod loader;
pub mod output;
pub mod telemetry;

pub use domain::{
    Characteristic, CharacteristicScores, FallbackPolicy, GateConfig, GateError, GateOutcome,
    Penalties, Result, Verdict, WeightTable,
};
pub use gate::{evaluate, weighted_score};
pub use loader::{
    accessibility_score, load_reports, ratio_to_percent, security_score, ArtifactKind,
    ArtifactStatus, LoadedReports,
};
pub use output::{annotations, render_summary, Annotation};
pub use telemetry::init_tracing;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

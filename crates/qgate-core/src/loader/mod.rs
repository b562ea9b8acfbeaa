//! Report loader.
//!
//! Reads the four scanner artifacts from a results directory and turns each
//! into a characteristic score in `[0, 100]`. A missing or malformed artifact
//! never aborts loading: it is resolved to the configured fallback score.
//! The only hard failure is a results directory that cannot be created or
//! listed.

pub mod schema;

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Characteristic, CharacteristicScores, GateConfig, GateError, Result};
use schema::{AxeReport, FunctionalScore, LighthouseReport, ReportSchema, ZapReport};

/// The report artifacts consumed by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Performance,
    Security,
    Accessibility,
    Functional,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] = [
        Self::Performance,
        Self::Security,
        Self::Accessibility,
        Self::Functional,
    ];

    /// File name inside the results directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Performance => "lighthouse-report.json",
            Self::Security => "zap-report.json",
            Self::Accessibility => "accessibility-report.json",
            Self::Functional => "functional-score.json",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Performance => "performance",
            Self::Security => "security",
            Self::Accessibility => "accessibility",
            Self::Functional => "functional",
        };
        f.write_str(name)
    }
}

/// How one artifact was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactStatus {
    Loaded,
    Missing,
    Malformed { reason: String },
}

/// Loader output: scores plus the per-artifact resolution, in load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadedReports {
    pub scores: CharacteristicScores,
    pub statuses: Vec<(ArtifactKind, ArtifactStatus)>,
}

impl LoadedReports {
    pub fn status(&self, kind: ArtifactKind) -> Option<&ArtifactStatus> {
        self.statuses
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, status)| status)
    }
}

/// Why an artifact could not be used. Never leaves the loader.
#[derive(Debug, thiserror::Error)]
enum ArtifactError {
    #[error("not found")]
    Missing,

    #[error("unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(&'static str),
}

fn status_of(err: &ArtifactError) -> ArtifactStatus {
    match err {
        ArtifactError::Missing => ArtifactStatus::Missing,
        other => ArtifactStatus::Malformed {
            reason: other.to_string(),
        },
    }
}

/// Score for a security scan: each high-risk alert costs `penalty` points, floor 0.
pub fn security_score(high_risk_alerts: usize, penalty: f64) -> f64 {
    (100.0 - high_risk_alerts as f64 * penalty).max(0.0)
}

/// Score for an accessibility audit: each violation costs `penalty` points, floor 0.
pub fn accessibility_score(violations: usize, penalty: f64) -> f64 {
    (100.0 - violations as f64 * penalty).max(0.0)
}

/// Scale a `[0, 1]` ratio to a percentage.
pub fn ratio_to_percent(ratio: f64) -> f64 {
    ratio * 100.0
}

/// Load every artifact in `results_dir` and resolve it to scores.
///
/// The directory is created if absent. Returns [`GateError::ResultsDir`] if
/// it cannot be created or listed; every other failure is resolved to a
/// fallback score.
pub fn load_reports(results_dir: &Path, config: &GateConfig) -> Result<LoadedReports> {
    prepare_results_dir(results_dir)?;

    let mut loaded = LoadedReports::default();
    let fallbacks = &config.fallbacks;
    let penalties = &config.penalties;

    // Performance: a broken report scores the fallback (0), and SEO is only
    // reported when the file itself parsed.
    let performance = read_artifact::<LighthouseReport>(results_dir);
    if let Ok(report) = &performance {
        if let Some(seo) = report.seo_ratio() {
            loaded.scores.insert(Characteristic::Seo, ratio_to_percent(seo));
        }
    }
    let performance = performance.and_then(|report| {
        report
            .performance_ratio()
            .map(ratio_to_percent)
            .ok_or(ArtifactError::Invalid("performance score is null"))
    });
    resolve(
        &mut loaded,
        ArtifactKind::Performance,
        Characteristic::PerformanceEfficiency,
        performance,
        fallbacks.performance_efficiency,
    );

    let security = read_artifact::<ZapReport>(results_dir).map(|report| {
        let high = report.high_risk_count();
        debug!(high_risk_alerts = high, sites = report.site.len(), "security scan parsed");
        security_score(high, penalties.per_high_risk_alert)
    });
    resolve(
        &mut loaded,
        ArtifactKind::Security,
        Characteristic::Security,
        security,
        fallbacks.security,
    );

    let usability = read_artifact::<AxeReport>(results_dir).map(|report| {
        for violation in &report.violations {
            debug!(
                id = violation.id.as_deref().unwrap_or("unknown"),
                impact = violation.impact.as_deref().unwrap_or("unknown"),
                "accessibility violation"
            );
        }
        accessibility_score(
            report.violations.len(),
            penalties.per_accessibility_violation,
        )
    });
    resolve(
        &mut loaded,
        ArtifactKind::Accessibility,
        Characteristic::Usability,
        usability,
        fallbacks.usability,
    );

    let functional = read_artifact::<FunctionalScore>(results_dir).and_then(|report| {
        if report.score.is_finite() {
            Ok(report.score)
        } else {
            Err(ArtifactError::Invalid("functional score is not a finite number"))
        }
    });
    resolve(
        &mut loaded,
        ArtifactKind::Functional,
        Characteristic::FunctionalSuitability,
        functional,
        fallbacks.functional_suitability,
    );

    Ok(loaded)
}

fn prepare_results_dir(path: &Path) -> Result<()> {
    let to_err = |source: std::io::Error| GateError::ResultsDir {
        path: path.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(path).map_err(to_err)?;
    std::fs::read_dir(path).map_err(to_err)?;
    Ok(())
}

fn read_artifact<R: ReportSchema>(dir: &Path) -> std::result::Result<R, ArtifactError> {
    let path = dir.join(R::KIND.file_name());
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArtifactError::Missing)
        }
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
}

fn resolve(
    loaded: &mut LoadedReports,
    kind: ArtifactKind,
    characteristic: Characteristic,
    outcome: std::result::Result<f64, ArtifactError>,
    fallback: f64,
) {
    let status = match outcome {
        Ok(score) => {
            debug!(artifact = %kind, %characteristic, score, "report loaded");
            loaded.scores.insert(characteristic, score);
            ArtifactStatus::Loaded
        }
        Err(err) => {
            match &err {
                ArtifactError::Missing => info!(
                    artifact = %kind,
                    file = kind.file_name(),
                    fallback,
                    "report not found; using fallback score"
                ),
                other => warn!(
                    artifact = %kind,
                    file = kind.file_name(),
                    fallback,
                    error = %other,
                    "report malformed; using fallback score"
                ),
            }
            loaded.scores.insert(characteristic, fallback);
            status_of(&err)
        }
    };
    loaded.statuses.push((kind, status));
}

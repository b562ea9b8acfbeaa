//! Typed schemas for the report artifacts produced by external scanners.
//!
//! Only the fields the gate reads are modelled. Unknown fields are ignored;
//! a missing required field fails deserialization, which the loader treats
//! the same as an unreadable file.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ArtifactKind;

/// A report artifact with a fixed file name in the results directory.
pub trait ReportSchema: DeserializeOwned {
    const KIND: ArtifactKind;
}

// ── lighthouse-report.json ────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LighthouseReport {
    pub categories: LighthouseCategories,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LighthouseCategories {
    pub performance: LighthouseCategory,
    pub seo: Option<LighthouseCategory>,
}

/// Lighthouse writes `"score": null` for a category that errored.
#[derive(Debug, Clone, Deserialize)]
pub struct LighthouseCategory {
    pub score: Option<f64>,
}

impl LighthouseReport {
    pub fn performance_ratio(&self) -> Option<f64> {
        self.categories.performance.score
    }

    pub fn seo_ratio(&self) -> Option<f64> {
        self.categories.seo.as_ref().and_then(|c| c.score)
    }
}

impl ReportSchema for LighthouseReport {
    const KIND: ArtifactKind = ArtifactKind::Performance;
}

// ── zap-report.json ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ZapReport {
    pub site: Vec<ZapSite>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZapSite {
    pub alerts: Vec<ZapAlert>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZapAlert {
    pub risk: AlertRisk,
}

/// ZAP risk label. Labels outside the known set map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AlertRisk {
    High,
    Medium,
    Low,
    Informational,
    #[serde(other)]
    Other,
}

impl ZapReport {
    /// Alerts at the highest risk tier, across every scanned site.
    pub fn high_risk_count(&self) -> usize {
        self.site
            .iter()
            .flat_map(|site| &site.alerts)
            .filter(|alert| alert.risk == AlertRisk::High)
            .count()
    }
}

impl ReportSchema for ZapReport {
    const KIND: ArtifactKind = ArtifactKind::Security;
}

// ── accessibility-report.json ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AxeReport {
    pub violations: Vec<AxeViolation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AxeViolation {
    pub id: Option<String>,
    pub impact: Option<String>,
}

impl ReportSchema for AxeReport {
    const KIND: ArtifactKind = ArtifactKind::Accessibility;
}

// ── functional-score.json ─────────────────────────────────────────────────

/// Percentage of smoke-tested paths that answered successfully.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionalScore {
    pub score: f64,
}

impl ReportSchema for FunctionalScore {
    const KIND: ArtifactKind = ArtifactKind::Functional;
}

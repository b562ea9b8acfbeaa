//! Verdict rendering for humans and for CI.
//!
//! The annotation lines follow the legacy `::set-output name=<key>::<value>`
//! workflow-command format. Existing pipeline parsers depend on it, so the
//! format must not change when the internal types do.

use std::fmt;

use crate::domain::Verdict;

/// One machine-readable key/value line for the surrounding CI system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::set-output name={}::{}", self.key, self.value)
    }
}

/// The `score`, `result` and `message` annotations, in that order.
pub fn annotations(verdict: &Verdict) -> Vec<Annotation> {
    vec![
        Annotation {
            key: "score",
            value: format!("{:.2}", verdict.overall_score),
        },
        Annotation {
            key: "result",
            value: verdict.outcome().to_string(),
        },
        Annotation {
            key: "message",
            value: verdict.message.clone(),
        },
    ]
}

/// Human-readable summary with the per-characteristic breakdown.
pub fn render_summary(verdict: &Verdict, target_url: &str) -> String {
    let mut out = format!("🔎 Quality Assessment for: {}\n", target_url);
    out.push_str(&format!(
        "📊 Overall Quality Score: {:.2}%\n",
        verdict.overall_score
    ));

    out.push_str("\n📈 Detailed Results:\n");
    for (characteristic, score) in verdict.breakdown.iter() {
        out.push_str(&format!("  - {}: {:.2}%\n", characteristic.label(), score));
    }

    let marker = if verdict.passed { "✅" } else { "❌" };
    out.push_str(&format!("{} {}\n", marker, verdict.message));
    out
}

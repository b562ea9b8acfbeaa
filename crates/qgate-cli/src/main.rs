//! Quality gate CLI
//!
//! Aggregates the black-box check reports in a results directory into a
//! weighted quality score and exits 0 (PASS) or 1 (FAIL / error) so a
//! deployment pipeline can block on it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, Level};

use qgate_core::{annotations, evaluate, load_reports, render_summary, GateConfig};

const DEFAULT_TARGET_URL: &str = "https://jpteunm.com";
const DEFAULT_RESULTS_DIR: &str = "tests/results";

#[derive(Parser)]
#[command(name = "quality-gate")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Weighted quality gate over website check reports", long_about = None)]
struct Cli {
    /// Site the reports were produced for (display only)
    #[arg(env = "TARGET_URL", default_value = DEFAULT_TARGET_URL)]
    target_url: String,

    /// Directory holding the scanner reports
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let json_logs = std::env::var("QGATE_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    qgate_core::init_tracing(json_logs, Level::INFO);

    let config = GateConfig::standard();
    debug!(config = ?config, "gate configuration");
    info!(
        version = qgate_core::VERSION,
        target = %cli.target_url,
        results_dir = %cli.results_dir.display(),
        "evaluating quality gate"
    );

    let loaded = load_reports(&cli.results_dir, &config)
        .with_context(|| format!("Failed to load reports from {:?}", cli.results_dir))?;
    let verdict = evaluate(&loaded.scores, &config);

    print!("{}", render_summary(&verdict, &cli.target_url));
    for annotation in annotations(&verdict) {
        println!("{}", annotation);
    }

    info!(
        outcome = %verdict.outcome(),
        score = verdict.overall_score,
        "quality gate finished"
    );

    Ok(if verdict.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

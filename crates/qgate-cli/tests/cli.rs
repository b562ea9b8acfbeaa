use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::tempdir;

fn quality_gate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quality-gate"))
        .args(args)
        .env_remove("TARGET_URL")
        .env("RUST_LOG", "warn")
        .output()
        .expect("run quality-gate")
}

fn write_json(dir: &Path, name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(name), value.to_string()).expect("write report");
}

#[test]
fn missing_reports_fail_the_gate() {
    let dir = tempdir().expect("tempdir");
    let results = dir.path().to_str().expect("utf-8 path");

    let out = quality_gate(&["--results-dir", results]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout.contains("Quality Assessment for: https://jpteunm.com"));
    assert!(stdout.contains("::set-output name=score::51.00"));
    assert!(stdout.contains("::set-output name=result::FAIL"));
}

#[test]
fn healthy_reports_pass_the_gate() {
    let dir = tempdir().expect("tempdir");
    write_json(
        dir.path(),
        "lighthouse-report.json",
        json!({ "categories": { "performance": { "score": 0.95 }, "seo": { "score": 1.0 } } }),
    );
    write_json(dir.path(), "zap-report.json", json!({ "site": [ { "alerts": [] } ] }));
    write_json(dir.path(), "accessibility-report.json", json!({ "violations": [] }));
    write_json(dir.path(), "functional-score.json", json!({ "score": 100 }));
    let results = dir.path().to_str().expect("utf-8 path");

    let out = quality_gate(&["https://staging.example.org", "--results-dir", results]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout.contains("Quality Assessment for: https://staging.example.org"));
    assert!(stdout.contains("  - SEO: 100.00%"));
    assert!(stdout.ends_with(
        "::set-output name=score::88.50\n\
         ::set-output name=result::PASS\n\
         ::set-output name=message::Quality gate PASSED\n"
    ));
}

#[test]
fn target_url_falls_back_to_environment() {
    let dir = tempdir().expect("tempdir");
    let results = dir.path().to_str().expect("utf-8 path");

    let out = Command::new(env!("CARGO_BIN_EXE_quality-gate"))
        .args(["--results-dir", results])
        .env("TARGET_URL", "https://preview.example.org")
        .env("RUST_LOG", "warn")
        .output()
        .expect("run quality-gate");

    assert!(String::from_utf8_lossy(&out.stdout)
        .contains("Quality Assessment for: https://preview.example.org"));
}

#[test]
fn unusable_results_dir_exits_without_verdict() {
    let dir = tempdir().expect("tempdir");
    let file = dir.path().join("results");
    std::fs::write(&file, b"plain file").expect("write");

    let out = quality_gate(&["--results-dir", file.to_str().expect("utf-8 path")]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&out.stdout).contains("::set-output"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to load reports"));
}

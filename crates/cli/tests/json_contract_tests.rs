// Integration tests enforcing the --json stdout contract.
//
// Stdout from --json commands must be:
//   1. Valid JSON
//   2. Exactly one JSON value (no extra lines, no banners)
//   3. The correct shape for its command type
//
// Run with: cargo test -p loanaudit-cli --test json_contract_tests

use std::path::Path;
use std::process::Command;

fn laudit(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_laudit"));
    cmd.current_dir(dir);
    cmd
}

/// Assert stdout is a single, parseable JSON value with no extra lines.
fn assert_single_json(stdout: &str) -> serde_json::Value {
    let trimmed = stdout.trim();
    assert!(!trimmed.is_empty(), "stdout should not be empty");

    let val: serde_json::Value = serde_json::from_str(trimmed).unwrap_or_else(|e| {
        panic!(
            "stdout must be valid JSON.\nParse error: {}\nstdout:\n{}",
            e, trimmed
        )
    });

    val
}

fn fixture(dir: &Path) {
    std::fs::write(
        dir.join("staged_loan_data.csv"),
        "Exposure_Default,Interest_Rate,Risk_Rating,Account_Status\n\
         100.0,10.0,A,Current\n\
         200.0,12.0,B,Current\n\
         ,12.0,C,Current\n",
    )
    .unwrap();
    std::fs::write(dir.join("audit.toml"), "name = \"JSON Contract\"\n").unwrap();
}

#[test]
fn run_json_has_full_shape() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let output = laudit(dir.path())
        .args(["run", "audit.toml", "--json"])
        .output()
        .expect("laudit run --json");

    // one rejected row: business-outcome exit, JSON still intact
    assert_eq!(output.status.code(), Some(5));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let val = assert_single_json(&stdout);

    assert_eq!(val["meta"]["name"], "JSON Contract");
    assert_eq!(val["governance"]["total"], 3);
    assert_eq!(val["governance"]["clean"], 2);
    assert_eq!(val["governance"]["rejected"], 1);
    assert_eq!(val["portfolio"]["total_exposure"], 300.0);

    let rows = val["recon"]["rows"].as_array().expect("recon rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["risk_rating"], "A");
    assert_eq!(rows[0]["gl_exposure"], 100.5);
    assert_eq!(rows[0]["status"], "Pass");
    assert_eq!(rows[1]["status"], "Pass");
    assert_eq!(val["recon"]["summary"]["total_ratings"], 2);
}

#[test]
fn run_output_file_matches_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let output = laudit(dir.path())
        .args(["run", "audit.toml", "--json", "--output", "result.json"])
        .output()
        .expect("laudit run --json --output");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let from_stdout = assert_single_json(&stdout);

    let file = std::fs::read_to_string(dir.path().join("result.json")).unwrap();
    let from_file: serde_json::Value = serde_json::from_str(&file).unwrap();

    assert_eq!(from_stdout, from_file);
}

#[test]
fn govern_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let output = laudit(dir.path())
        .args(["govern", "audit.toml", "--json"])
        .output()
        .expect("laudit govern --json");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let val = assert_single_json(&stdout);

    assert!(val.get("governance").is_some());
    assert!(val.get("recon").is_none(), "govern must not reconcile");
    let score = val["governance"]["quality_score"].as_f64().unwrap();
    assert!((score - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn stats_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let output = laudit(dir.path())
        .args(["stats", "audit.toml", "--json"])
        .output()
        .expect("laudit stats --json");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let val = assert_single_json(&stdout);

    // weighted by exposure: (100*10 + 200*12) / 300
    assert_eq!(val["portfolio"]["weighted_avg_rate"], 11.33);
    let buckets = val["portfolio"]["exposure_by_rating"].as_array().unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0]["risk_rating"], "A");
}

#[test]
fn human_mode_prints_no_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let output = laudit(dir.path())
        .args(["run", "audit.toml"])
        .output()
        .expect("laudit run");

    assert!(
        output.stdout.is_empty(),
        "human mode keeps stdout clean: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

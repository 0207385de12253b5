//! End-to-end CLI tests for the text-producing subcommands.

use assert_cmd::Command;
use predicates::prelude::*;

fn tool() -> Command {
    Command::cargo_bin("rhodamine-y2h").expect("binary not found")
}

#[test]
fn help_lists_subcommands() {
    tool()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("efflux-30"))
        .stdout(predicate::str::contains("beta-gal"));
}

#[test]
fn stats_prints_four_summaries() {
    tool()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("[dif_1_30]"))
        .stdout(predicate::str::contains("[dif_10_42]"))
        .stdout(predicate::str::contains("nobs = 4"))
        .stdout(predicate::str::contains("[beta_gal]").not());
}

#[test]
fn stats_json_is_parseable() {
    let output = tool()
        .args(["stats", "--format", "json", "--with-activity"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4]["name"], "beta_gal");
    assert_eq!(entries[4]["nobs"], 11);
}

#[test]
fn activity_prints_pairs_and_z_scores() {
    tool()
        .arg("activity")
        .assert()
        .success()
        .stdout(predicate::str::contains("orf1_orf1 = od600 2.6400 od420 0.4000 activity 0.5051"))
        .stdout(predicate::str::contains("[z_scores]"));
}

#[test]
fn exclusions_can_be_replaced() {
    tool()
        .args(["activity", "--exclude", "orf1_orf1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orf2_orf1 = ").count(2))
        .stdout(predicate::str::contains("orf1_orf1 = ").count(1));
}

#[test]
fn invalid_dilution_factor_is_rejected_at_parse_time() {
    for bad in ["0", "-1", "NaN"] {
        tool()
            .args(["activity", "--dilution-factor", bad])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("positive finite"));
    }
}

#[test]
fn unknown_highlight_reports_the_chart() {
    tool()
        .args(["beta-gal", "--highlight", "orf9_orf9", "--out", "never-written.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beta-gal"))
        .stderr(predicate::str::contains("orf9_orf9"));
}

#[test]
fn efflux_chart_is_written_to_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("x.png");
    tool()
        .arg("efflux-30")
        .arg("--out")
        .arg(&path)
        .assert()
        .success();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn beta_gal_chart_defaults_to_stem_in_working_dir() {
    let dir = tempfile::tempdir().unwrap();
    tool().current_dir(dir.path()).arg("beta-gal").assert().success();
    assert!(dir.path().join("beta-gal.png").is_file());
}

#[test]
fn excluding_a_highlighted_pair_still_draws_the_activity_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beta.png");
    tool()
        .args(["beta-gal", "--exclude", "orf2_orf1", "--exclude", "cheR_orf1", "--out"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.is_file());
}

#[test]
fn highlights_can_be_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beta.png");
    tool()
        .args(["beta-gal", "--highlight", "cheW_cheW", "--out"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.is_file());
}

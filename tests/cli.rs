//! End-to-end tests for the abcompute binary
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn abcompute() -> Command {
    Command::cargo_bin("abcompute").unwrap()
}

#[test]
fn test_reconcile_defaults_solve_power() {
    abcompute()
        .arg("reconcile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Effect size         0.400"))
        .stdout(predicate::str::contains("Sample size         10 per group"))
        .stdout(predicate::str::contains("Power               0.14"));
}

#[test]
fn test_reconcile_solves_sample_size() {
    abcompute()
        .args(["reconcile", "--power", "0.8", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sample_size\": 99"))
        .stdout(predicate::str::contains("\"target\": \"sample_size\""));
}

#[test]
fn test_reconcile_negative_mean() {
    abcompute()
        .args(["reconcile", "--mean-a", "-1", "--mean-b", "1", "--std-a", "2", "--std-b", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Effect size         1.000"));
}

#[test]
fn test_reconcile_degenerate_groups_fail() {
    abcompute()
        .args(["reconcile", "--std-a", "0", "--std-b", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("both standard deviations are zero"));
}

#[test]
fn test_reconcile_zero_effect_power_mode_fails() {
    abcompute()
        .args(["reconcile", "--mean-b", "50", "--power", "0.8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("insufficient effect size"));
}

#[test]
fn test_sample_size_and_power_conflict() {
    abcompute()
        .args(["reconcile", "-n", "20", "-p", "0.8"])
        .assert()
        .failure();
}

#[test]
fn test_simulate_seeded_is_reproducible() {
    let run = || {
        abcompute()
            .args(["simulate", "-n", "50", "--seed", "42", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());

    let value: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(value["simulation"]["seed"], 42);
    assert_eq!(value["simulation"]["sample_size"], 50);
    assert_eq!(value["simulation"]["summary"]["strategy"], "t_test");
    let counts_a = value["simulation"]["histogram"]["counts_a"]
        .as_array()
        .unwrap();
    let total: u64 = counts_a.iter().map(|c| c.as_u64().unwrap()).sum();
    assert_eq!(total, 50);
}

#[test]
fn test_simulate_proportion_text() {
    abcompute()
        .args(["simulate", "-n", "30", "--seed", "7", "--strategy", "proportion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation (seed 7)"))
        .stdout(predicate::str::contains("Share B > A"))
        .stdout(predicate::str::contains("Distribution of simulated values"));
}

#[test]
fn test_simulate_empirical_power() {
    abcompute()
        .args(["simulate", "-n", "20", "--seed", "3", "--reps", "50", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"empirical_power\""));
}

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[group_a]
mean = 75.0
std_dev = 10.0

[group_b]
mean = 55.0
std_dev = 10.0

[experiment]
significance_level = 0.01
controlled = "power"
power = 0.9

[simulation]
strategy = "welch"
seed = 11
bins = 5
"#
    )
    .unwrap();

    let output = abcompute()
        .args(["simulate", "--format", "json", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["reconciliation"]["effect_size"], -2.0);
    assert_eq!(value["reconciliation"]["significance_level"], 0.01);
    assert_eq!(value["simulation"]["histogram"]["counts_a"].as_array().unwrap().len(), 5);
}

#[test]
fn test_config_flag_overrides_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[experiment]\nsample_size = 40").unwrap();

    abcompute()
        .args(["reconcile", "--mean-b", "52.5", "-n", "64", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample size         64 per group"))
        .stdout(predicate::str::contains("Effect size         0.500"))
        .stdout(predicate::str::contains("Power               0.80"));
}

#[test]
fn test_config_unknown_key_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[experiment]\nsample_sise = 40").unwrap();

    abcompute()
        .args(["reconcile", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("while loading configuration"));
}

#[test]
fn test_config_missing_file_fails() {
    abcompute()
        .args(["reconcile", "--config", "/nonexistent/abcompute.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("while loading configuration"));
}

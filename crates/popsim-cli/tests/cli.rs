use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const SPEC: &str = r#"
version: 1
defaults:
  logistic: { k: 1000, time_max: 20 }
logistic:
  - { p0: 10, r: 0.5 }
  - { p0: 10, r: 0.9, time_max: 10, description: fast }
exponential:
  - { p0: 100, r: 0.2, time_max: 10 }
  - { p0: 100, r: 0.4, time_max: 10 }
"#;

fn write_spec(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("scenarios.yaml");
    fs::write(&path, contents).unwrap();
    path
}

/// Empty config so the user's ~/.popsim/config.toml never leaks into tests.
fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, "").unwrap();
    path
}

fn popsim(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("popsim").unwrap();
    cmd.arg("--config").arg(write_config(dir));
    cmd
}

#[test]
fn run_prints_tables_and_cards() {
    let dir = tempdir().unwrap();
    let spec = write_spec(dir.path(), SPEC);
    popsim(dir.path())
        .arg("run")
        .arg(&spec)
        .assert()
        .success()
        .stdout(predicate::str::contains("== Logistic model (time in years) =="))
        .stdout(predicate::str::contains("Time to reach 50% of K: 9.2 years"))
        .stdout(predicate::str::contains("== Exponential model (time in hours) =="))
        .stdout(predicate::str::contains("Fastest: Scenario 2 (r = 0.4)"))
        .stdout(predicate::str::contains("Time to reach 1000 individuals").not());
}

#[test]
fn run_writes_json_report() {
    let dir = tempdir().unwrap();
    let spec = write_spec(dir.path(), SPEC);
    let out = dir.path().join("report.json");
    let output = popsim(dir.path())
        .args(["run", spec.to_str().unwrap(), "--format", "json", "--out"])
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    for report in [&stdout, &written] {
        let logistic = &report["logistic"];
        assert_eq!(logistic["chart"]["axis"].as_array().unwrap().len(), 21);
        assert_eq!(logistic["list"].as_array().unwrap().len(), 2);
        // the shorter scenario has gaps after t = 10
        assert!(logistic["chart"]["series"][1]["points"][11][1].is_null());
    }
}

#[test]
fn run_emits_csv_rows() {
    let dir = tempdir().unwrap();
    let spec = write_spec(dir.path(), SPEC);
    popsim(dir.path())
        .args(["run", spec.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("model,scenario,label,t,population"))
        .stdout(predicate::str::contains("exponential,1,"));
}

#[test]
fn logistic_one_shot_uses_flags() {
    let dir = tempdir().unwrap();
    popsim(dir.path())
        .args([
            "logistic", "--p0", "10", "--r", "0.5", "--k", "1000", "--time-max", "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Behavior: Growing toward K"));
}

#[test]
fn exponential_one_shot_reports_doubling_time() {
    let dir = tempdir().unwrap();
    popsim(dir.path())
        .args(["exponential", "--r", "0.3", "--time-max", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Doubling time: 2.3 hours"));
}

#[test]
fn scenarios_validate_and_list() {
    let dir = tempdir().unwrap();
    let spec = write_spec(dir.path(), SPEC);
    popsim(dir.path())
        .args(["scenarios", "validate", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("validated successfully"));
    popsim(dir.path())
        .args(["scenarios", "list", spec.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("fast"))
        .stdout(predicate::str::contains("exponential"));
}

#[test]
fn invalid_spec_fails() {
    let dir = tempdir().unwrap();
    let spec = write_spec(dir.path(), "logistic:\n  - { p0: 10 }\n");
    popsim(dir.path())
        .args(["scenarios", "validate", spec.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logistic scenario #1"));
}

#[test]
fn config_palette_is_applied() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[core]\npalette = [\"teal\"]\n").unwrap();
    Command::cargo_bin("popsim")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["exponential", "--p0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[teal] Scenario 1"));
}

#[test]
fn shell_adds_and_removes() {
    let dir = tempdir().unwrap();
    popsim(dir.path())
        .arg("shell")
        .write_stdin(
            "add logistic 10 0.5 1000 20\n\
             add exponential 100 0.2 10\n\
             remove exponential 1\n\
             clear\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("added logistic scenario 1"))
        .stdout(predicate::str::contains("added exponential scenario 1"))
        .stdout(predicate::str::contains("No scenarios added"));
}

#[test]
fn shell_survives_invalid_utf8() {
    let dir = tempdir().unwrap();
    popsim(dir.path())
        .arg("shell")
        .write_stdin(&b"\xff\xfe\nadd exponential 100 0.2 10\nquit\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("added exponential scenario 1"))
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn json_output_keeps_overflowed_values() {
    let dir = tempdir().unwrap();
    let output = popsim(dir.path())
        .args(["exponential", "--r", "100", "--time-max", "10", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let points = report["exponential"]["chart"]["series"][0]["points"]
        .as_array()
        .unwrap();
    assert_eq!(points.last().unwrap()[1], "inf");
}

#[test]
fn completions_for_bash() {
    let dir = tempdir().unwrap();
    popsim(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_popsim"));
}

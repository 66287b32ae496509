use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn demo_run_writes_outputs() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let mut cmd = Command::cargo_bin("nof1-burden").unwrap();
    cmd.args(["run", "--demo", "--json", "--csv", "--tsv", "--out"])
        .arg(&out);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Trend: growing"));
    assert!(stdout.contains("Progression risk: 82.8 %"));

    assert!(out.join("nof1_burden.json").exists());
    assert!(out.join("trajectory.tsv").exists());
    let csv = fs::read_to_string(out.join("n_of_1_predictions.csv")).unwrap();
    assert!(csv.starts_with("horizon_days,predicted_value,predicted_date\n30,"));
}

#[test]
fn single_row_input_fails_with_insufficient_data() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("p.csv");
    fs::write(&input, "date,sum_mm\n2022-03-17,182\n").unwrap();
    let mut cmd = Command::cargo_bin("nof1-burden").unwrap();
    cmd.args(["run", "--input"]).arg(&input);
    let assert = cmd.assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("not enough data to predict"));
}

#[test]
fn empty_input_fails_with_no_data() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("p.csv");
    fs::write(&input, "date,sum_mm\n2022-03-17,\n").unwrap();
    let mut cmd = Command::cargo_bin("nof1-burden").unwrap();
    cmd.args(["validate", "--input"]).arg(&input);
    let assert = cmd.assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("no usable measurements"));
}

#[test]
fn validate_reports_counts() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("p.csv");
    fs::write(&input, "date,sum_mm\n2022-03-17,10\n2022-03-20,\n2022-04-01,12\n").unwrap();
    let mut cmd = Command::cargo_bin("nof1-burden").unwrap();
    cmd.args(["validate", "--input"]).arg(&input);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("points: 2"));
    assert!(stdout.contains("dropped: 1"));
    assert!(stdout.contains("origin: 2022-03-17"));
}

#[test]
fn no_forecast_run_reports_empty_table() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("out");
    let mut cmd = Command::cargo_bin("nof1-burden").unwrap();
    cmd.args(["run", "--demo", "--no-forecast", "--csv", "--out"])
        .arg(&out);
    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Forecasts: none"));
    assert!(stdout.contains("- no forecast horizons requested"));
    let csv = fs::read_to_string(out.join("n_of_1_predictions.csv")).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

//! End-to-end tests for the `tradedays` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn tradedays() -> Command {
    let mut cmd = Command::cargo_bin("tradedays").unwrap();
    cmd.env_remove("TRADEDAYS_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn json_output(args: &[&str]) -> serde_json::Value {
    let output = tradedays()
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn markets_lists_every_profile() {
    let markets = json_output(&["markets"]);
    let codes: Vec<&str> = markets
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["code"].as_str().unwrap())
        .collect();
    assert_eq!(
        codes,
        ["NYSE", "LSE", "LME", "BOVESPA", "ASX", "TSX", "FSE", "MIL", "TSE"]
    );
    assert_eq!(markets[0]["default"], true);
}

#[test]
fn check_reports_holiday_name() {
    let report = json_output(&["check", "2012-07-04", "--market", "nyse"]);
    assert_eq!(report["market"], "NYSE");
    assert_eq!(report["holiday"], "Independence Day");
    assert_eq!(report["business_day"], false);
    assert_eq!(report["next_business_day"], "2012-07-05");
}

#[test]
fn check_table_output() {
    tradedays()
        .args(["check", "2012-06-05", "--market", "LSE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diamond Jubilee"));
}

#[test]
fn unknown_market_fails() {
    tradedays()
        .args(["check", "2012-01-03", "--market", "NASDAQ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such holiday profile: NASDAQ"));
}

#[test]
fn invalid_date_fails() {
    tradedays()
        .args(["check", "2012-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn holidays_skip_weekend_dates() {
    let holidays = json_output(&["holidays", "--year", "2012", "--market", "NYSE"]);
    let dates: Vec<&str> = holidays
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["date"].as_str().unwrap())
        .collect();
    assert!(dates.contains(&"2012-01-02"));
    assert!(dates.contains(&"2012-07-04"));
    assert!(!dates.contains(&"2012-01-01"));
}

#[test]
fn offset_steps_back_over_christmas() {
    let nyse = json_output(&["offset", "2008-12-30T09:30:00", "--n", "-2", "--market", "NYSE"]);
    assert_eq!(nyse["result"], "2008-12-26T09:30:00");

    let lse = json_output(&["offset", "2008-12-30T09:30:00", "--n", "-2", "--market", "LSE"]);
    assert_eq!(lse["result"], "2008-12-24T09:30:00");
}

#[test]
fn offset_normalize_and_extra_hours() {
    let report = json_output(&[
        "offset",
        "2009-09-18T15:00:00",
        "--n",
        "1",
        "--market",
        "TSE",
        "--normalize",
        "--extra-hours",
        "9",
    ]);
    assert_eq!(report["result"], "2009-09-24T09:00:00");
}

#[test]
fn offset_rejects_extra_hours_beyond_duration_range() {
    tradedays()
        .args(["offset", "2009-09-18T15:00:00", "--extra-hours", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--extra-hours 9223372036854775807 is out of range"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn offset_reports_overflowing_trailing_hours() {
    tradedays()
        .args(["offset", "2009-09-18T15:00:00", "--extra-hours", "2562047788015"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Date arithmetic overflowed"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn adjust_with_convention() {
    let report = json_output(&[
        "adjust",
        "2012-12-25",
        "--convention",
        "preceding",
        "--market",
        "NYSE",
    ]);
    assert_eq!(report["adjusted"], "2012-12-24");
    assert_eq!(report["convention"], "preceding");

    tradedays()
        .args(["adjust", "2012-12-25", "--convention", "sideways"])
        .assert()
        .failure();
}

#[test]
fn cashflow_analytics() {
    let report = json_output(&["cashflow", "--amounts", "-100,10,110", "--rate", "0.05"]);
    let pv = report["present_value"].as_f64().unwrap();
    let irr = report["irr"].as_f64().unwrap();
    let macaulay = report["macaulay_duration"].as_f64().unwrap();
    assert!((pv - 9.297052154).abs() < 1e-8);
    assert!((irr - 0.1).abs() < 1e-7);
    assert!((macaulay - 1.909090909).abs() < 1e-6);
    assert_eq!(report["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn cashflow_without_irr_still_reports_pv() {
    let report = json_output(&["cashflow", "--amounts", "100,10"]);
    assert!(report["irr"].is_null());
    assert!(report["present_value"].as_f64().unwrap() > 100.0);
}

#[test]
fn bond_schedule_rolls_onto_business_days() {
    let report = json_output(&[
        "bond",
        "--start",
        "2012-01-01",
        "--maturity",
        "2015-01-01",
        "--coupon",
        "0.05",
        "--market",
        "NYSE",
    ]);
    assert_eq!(report["description"], "01/01/15_0.05");
    let payments = report["payments"].as_array().unwrap();
    assert_eq!(payments.len(), 7);
    assert_eq!(payments[0]["date"], "2012-01-03");
    assert_eq!(payments[0]["amount"], -100.0);
    assert_eq!(payments[6]["amount"], 102.5);
}

#[test]
fn config_file_sets_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_market = \"LSE\"\noutput_format = \"json\"").unwrap();

    let output = tradedays()
        .args(["check", "1999-12-31"])
        .env("TRADEDAYS_CONFIG", file.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["market"], "LSE");
    assert_eq!(report["holiday"], "Millennium Eve");
}

#[test]
fn no_normalize_overrides_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "normalize = true").unwrap();

    let run = |extra: &[&str]| {
        let output = tradedays()
            .args(["offset", "2012-07-03T09:30:00", "--market", "NYSE", "--format", "json"])
            .args(extra)
            .env("TRADEDAYS_CONFIG", file.path())
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
    };

    assert_eq!(run(&[])["result"], "2012-07-05T00:00:00");
    assert_eq!(run(&["--no-normalize"])["result"], "2012-07-05T09:30:00");
}

#[test]
fn normalize_flags_conflict() {
    tradedays()
        .args(["offset", "2012-07-03", "--normalize", "--no-normalize"])
        .assert()
        .failure();
}

#[test]
fn broken_config_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_market = [").unwrap();

    tradedays()
        .args(["markets", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

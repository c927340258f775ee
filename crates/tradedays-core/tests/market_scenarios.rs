//! Holiday and offset scenarios for every market, driven by a JSON fixture.

use std::fs;

use serde::Deserialize;
use tradedays_core::calendars::{profile, BusinessCalendar};
use tradedays_core::offset::BusinessDayOffset;
use tradedays_core::types::Date;

const SCENARIO_FILE: &str = "tests/fixtures/holiday_scenarios.json";

#[derive(Debug, Deserialize)]
struct Scenarios {
    days: Vec<DayScenario>,
    offsets: Vec<OffsetScenario>,
}

#[derive(Debug, Deserialize)]
struct DayScenario {
    market: String,
    date: String,
    weekend: bool,
    holiday: bool,
    business_day: bool,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OffsetScenario {
    market: String,
    start: String,
    n: i32,
    expected: String,
}

fn parse_date(s: &str) -> Date {
    Date::parse(s).unwrap_or_else(|_| panic!("Failed to parse date: {}", s))
}

fn load_scenarios() -> Scenarios {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let path = std::path::Path::new(&manifest_dir).join(SCENARIO_FILE);

    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read scenario file at {:?}: {}", path, e));

    serde_json::from_str(&data).unwrap_or_else(|e| panic!("Failed to parse scenario JSON: {}", e))
}

#[test]
fn test_day_scenarios() {
    let scenarios = load_scenarios();
    let mut failures = Vec::new();

    for case in &scenarios.days {
        let cal = profile(&case.market).unwrap();
        let date = parse_date(&case.date);

        let observed = (
            cal.is_weekend(date),
            cal.is_holiday(date),
            cal.is_business_day(date),
        );
        if observed != (case.weekend, case.holiday, case.business_day) {
            failures.push(format!(
                "{} {}: expected (weekend, holiday, business) = ({}, {}, {}), got {:?}",
                case.market, case.date, case.weekend, case.holiday, case.business_day, observed
            ));
        }

        if let Some(name) = &case.name {
            if cal.holiday_name(date) != Some(name.as_str()) {
                failures.push(format!(
                    "{} {}: expected holiday '{}', got {:?}",
                    case.market,
                    case.date,
                    name,
                    cal.holiday_name(date)
                ));
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_offset_scenarios() {
    let scenarios = load_scenarios();

    for case in &scenarios.offsets {
        let offset = BusinessDayOffset::for_market(case.n, &case.market).unwrap();
        let result = offset.apply_date(parse_date(&case.start)).unwrap();
        assert_eq!(
            result,
            parse_date(&case.expected),
            "{} {} {:+} business days",
            case.market,
            case.start,
            case.n
        );
    }
}

#[test]
fn test_profiles_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let market = ["NYSE", "LSE", "TSE", "BOVESPA"][i % 4];
                let cal = profile(market).unwrap();
                cal.holidays_in_year(2012).len()
            })
        })
        .collect();

    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, count) in counts.iter().enumerate() {
        assert_eq!(*count, counts[i % 4]);
        assert!(*count > 0);
    }
}

#[test]
fn test_long_round_trip() {
    let nyse = BusinessDayOffset::for_market(10_000, "NYSE").unwrap();
    let start = parse_date("2012-07-05");
    let forward = nyse.apply_date(start).unwrap();
    let back = (-nyse).apply_date(forward).unwrap();
    assert_eq!(back, start);
}

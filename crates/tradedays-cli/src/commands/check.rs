//! Check command implementation.
//!
//! Reports whether a date is a weekend, a holiday or a business day.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tradedays_core::{BusinessCalendar, Date};

use crate::commands::parse_date;
use crate::config::Settings;
use crate::output::{print_report, yes_no, KeyValue};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD)
    pub date: String,

    /// Market code (NYSE, LSE, LME, BOVESPA, ASX, TSX, FSE, MIL, TSE)
    #[arg(short, long)]
    pub market: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    date: Date,
    market: &'static str,
    weekday: String,
    weekend: bool,
    holiday: Option<&'static str>,
    business_day: bool,
    next_business_day: Date,
    previous_business_day: Date,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, settings: &Settings) -> Result<()> {
    let date = parse_date(&args.date)?;
    let profile = settings.profile(args.market.as_deref())?;

    let report = CheckReport {
        date,
        market: profile.name(),
        weekday: date.weekday().to_string(),
        weekend: profile.is_weekend(date),
        holiday: profile.holiday_name(date),
        business_day: profile.is_business_day(date),
        next_business_day: profile.next_business_day(date.add_days(1)),
        previous_business_day: profile.previous_business_day(date.add_days(-1)),
    };

    let rows = vec![
        KeyValue::new("Date", report.date.to_string()),
        KeyValue::new("Market", report.market),
        KeyValue::new("Weekday", report.weekday.clone()),
        KeyValue::new("Weekend", yes_no(report.weekend)),
        KeyValue::new("Holiday", report.holiday.unwrap_or("-")),
        KeyValue::new("Business day", yes_no(report.business_day)),
        KeyValue::new("Next business day", report.next_business_day.to_string()),
        KeyValue::new("Previous business day", report.previous_business_day.to_string()),
    ];

    print_report("Business Day Check", &report, &rows, settings.format)
}

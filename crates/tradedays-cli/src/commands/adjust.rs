//! Adjust command implementation.
//!
//! Rolls a date onto a business day with a business day convention.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tradedays_core::calendars::BusinessDayConvention;
use tradedays_core::{BusinessCalendar, Date};

use crate::commands::parse_date;
use crate::config::Settings;
use crate::output::{print_report, KeyValue};

/// Arguments for the adjust command.
#[derive(Args, Debug)]
pub struct AdjustArgs {
    /// Date to adjust (YYYY-MM-DD)
    pub date: String,

    /// Convention: following, modified-following, preceding,
    /// modified-preceding, nearest or unadjusted
    #[arg(short, long, default_value = "following")]
    pub convention: BusinessDayConvention,

    /// Market code (NYSE, LSE, LME, BOVESPA, ASX, TSX, FSE, MIL, TSE)
    #[arg(short, long)]
    pub market: Option<String>,
}

#[derive(Debug, Serialize)]
struct AdjustReport {
    date: Date,
    market: &'static str,
    convention: BusinessDayConvention,
    adjusted: Date,
}

/// Execute the adjust command.
pub fn execute(args: AdjustArgs, settings: &Settings) -> Result<()> {
    let date = parse_date(&args.date)?;
    let profile = settings.profile(args.market.as_deref())?;

    let report = AdjustReport {
        date,
        market: profile.name(),
        convention: args.convention,
        adjusted: profile.adjust(date, args.convention),
    };

    let rows = vec![
        KeyValue::new("Date", report.date.to_string()),
        KeyValue::new("Market", report.market),
        KeyValue::new("Convention", report.convention.to_string()),
        KeyValue::new("Adjusted", report.adjusted.to_string()),
    ];

    print_report("Date Adjustment", &report, &rows, settings.format)
}

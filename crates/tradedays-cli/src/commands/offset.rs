//! Offset command implementation.
//!
//! Shifts a date or timestamp by a number of business days of a market.

use anyhow::Result;
use chrono::{Duration, NaiveDateTime};
use clap::Args;
use serde::Serialize;
use tradedays_core::BusinessDayOffset;

use crate::commands::parse_timestamp;
use crate::config::Settings;
use crate::error::CliError;
use crate::output::{print_report, KeyValue};

/// Arguments for the offset command.
#[derive(Args, Debug)]
pub struct OffsetArgs {
    /// Date (YYYY-MM-DD) or timestamp (YYYY-MM-DDTHH:MM:SS)
    pub timestamp: String,

    /// Number of business days to move (negative moves backwards)
    #[arg(short, long, allow_hyphen_values = true, default_value = "1")]
    pub n: i32,

    /// Market code (NYSE, LSE, LME, BOVESPA, ASX, TSX, FSE, MIL, TSE)
    #[arg(short, long)]
    pub market: Option<String>,

    /// Truncate the result to midnight
    #[arg(long)]
    pub normalize: bool,

    /// Keep the time of day even when the config file normalizes
    #[arg(long, conflicts_with = "normalize")]
    pub no_normalize: bool,

    /// Hours added after the business-day step
    #[arg(long, allow_hyphen_values = true)]
    pub extra_hours: Option<i64>,
}

#[derive(Debug, Serialize)]
struct OffsetReport {
    input: NaiveDateTime,
    offset: String,
    result: NaiveDateTime,
}

/// Execute the offset command.
pub fn execute(args: OffsetArgs, settings: &Settings) -> Result<()> {
    let timestamp = parse_timestamp(&args.timestamp)?;
    let profile = settings.profile(args.market.as_deref())?;

    let normalize = !args.no_normalize && (args.normalize || settings.normalize);
    let mut offset = BusinessDayOffset::new(args.n, profile).with_normalize(normalize);
    if let Some(hours) = args.extra_hours {
        let extra = Duration::try_hours(hours).ok_or(CliError::OutOfRange {
            flag: "--extra-hours",
            value: hours,
        })?;
        offset = offset.with_offset(extra);
    }

    let report = OffsetReport {
        input: timestamp,
        offset: offset.to_string(),
        result: offset.apply_to(timestamp).map_err(CliError::from)?,
    };

    let rows = vec![
        KeyValue::new("Input", report.input.to_string()),
        KeyValue::new("Offset", report.offset.clone()),
        KeyValue::new("Result", report.result.to_string()),
    ];

    print_report("Business Day Offset", &report, &rows, settings.format)
}

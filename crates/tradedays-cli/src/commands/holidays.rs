//! Holidays command implementation.
//!
//! Lists the holidays of a year that close the market on a weekday.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tradedays_core::BusinessCalendar;

use crate::config::Settings;
use crate::output::print_output;

/// Arguments for the holidays command.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Calendar year
    #[arg(short, long)]
    pub year: i32,

    /// Market code (NYSE, LSE, LME, BOVESPA, ASX, TSX, FSE, MIL, TSE)
    #[arg(short, long)]
    pub market: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct HolidayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Weekday")]
    weekday: String,
    #[tabled(rename = "Holiday")]
    name: &'static str,
}

/// Execute the holidays command.
pub fn execute(args: HolidaysArgs, settings: &Settings) -> Result<()> {
    let profile = settings.profile(args.market.as_deref())?;
    let holidays = profile.holidays_in_year(args.year);
    tracing::debug!(market = profile.name(), year = args.year, count = holidays.len(), "holidays");

    let rows: Vec<HolidayRow> = holidays
        .into_iter()
        .map(|holiday| HolidayRow {
            date: holiday.date.to_string(),
            weekday: holiday.date.weekday().to_string(),
            name: holiday.name,
        })
        .collect();

    print_output(&rows, settings.format)
}

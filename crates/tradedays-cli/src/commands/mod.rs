//! CLI command implementations.

pub mod adjust;
pub mod bond;
pub mod cashflow;
pub mod check;
pub mod holidays;
pub mod markets;
pub mod offset;

pub use adjust::AdjustArgs;
pub use bond::BondArgs;
pub use cashflow::CashflowArgs;
pub use check::CheckArgs;
pub use holidays::HolidaysArgs;
pub use offset::OffsetArgs;

use chrono::NaiveDateTime;
use tradedays_core::Date;

use crate::error::{CliError, CliResult};

/// Timestamp layouts accepted in addition to a plain date.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a timestamp, accepting a plain date as midnight.
pub fn parse_timestamp(s: &str) -> CliResult<NaiveDateTime> {
    let trimmed = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map_or_else(|| parse_date(trimmed).map(|d| d.at_midnight()), Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2012-07-04").unwrap(), Date::from_ymd(2012, 7, 4).unwrap());
        assert!(matches!(parse_date("04/07/2012"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2008-12-30T09:30:00").unwrap();
        assert_eq!(ts.to_string(), "2008-12-30 09:30:00");
        let ts = parse_timestamp("2008-12-30 16:45").unwrap();
        assert_eq!(ts.to_string(), "2008-12-30 16:45:00");
        let midnight = parse_timestamp("2008-12-30").unwrap();
        assert_eq!(midnight.to_string(), "2008-12-30 00:00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }
}

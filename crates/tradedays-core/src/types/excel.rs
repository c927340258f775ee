//! Excel serial date conversion.
//!
//! Excel stores timestamps as a day count from an epoch plus a fractional
//! day. Workbooks use one of two epochs, selected by the date mode.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Day number (counted from 0001-01-01 as day 1) of 1899-12-30.
const EPOCH_1900: i64 = 693_594;

/// Days between the 1900 and 1904 epochs.
const OFFSET_1904: i64 = 1_462;

const SECONDS_PER_DAY: i64 = 86_400;

/// The epoch a workbook counts serial numbers from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateMode {
    /// 1900 date system (Windows default, flag 0).
    #[default]
    Windows1900,
    /// 1904 date system (classic Mac, flag 1).
    Mac1904,
}

impl DateMode {
    /// Maps a workbook's date-mode flag to a `DateMode`.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidDateMode` for anything other than 0 or 1.
    pub fn from_flag(mode: u8) -> CalendarResult<Self> {
        match mode {
            0 => Ok(Self::Windows1900),
            1 => Ok(Self::Mac1904),
            _ => Err(CalendarError::InvalidDateMode { mode }),
        }
    }

    fn epoch(self) -> i64 {
        match self {
            Self::Windows1900 => EPOCH_1900,
            Self::Mac1904 => EPOCH_1900 + OFFSET_1904,
        }
    }
}

/// Result of converting an Excel serial number.
///
/// Serials below one day carry no date and come back as a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcelValue {
    /// A pure time of day.
    Time(NaiveTime),
    /// A full timestamp.
    DateTime(NaiveDateTime),
}

/// Converts an Excel serial number into a timestamp.
///
/// The fractional part is rounded to the nearest second; a fraction that
/// rounds to a whole day rolls over into the next date.
///
/// # Errors
///
/// Returns `CalendarError::ExcelDate` when the serial is negative or NaN,
/// is 100,000 days or more past the epoch, or falls before 1900-03-01 in the
/// 1900 system (where Excel's phantom 1900-02-29 makes it ambiguous).
///
/// # Example
///
/// ```rust
/// use tradedays_core::types::{excel_to_datetime, DateMode, ExcelValue};
///
/// let value = excel_to_datetime(40534.0, DateMode::Windows1900).unwrap();
/// match value {
///     ExcelValue::DateTime(ts) => assert_eq!(ts.to_string(), "2010-12-22 00:00:00"),
///     ExcelValue::Time(_) => unreachable!(),
/// }
/// ```
pub fn excel_to_datetime(serial: f64, mode: DateMode) -> CalendarResult<ExcelValue> {
    if serial.is_nan() {
        return Err(CalendarError::excel_date(serial, "serial is not a number"));
    }
    if serial == 0.0 {
        return Ok(ExcelValue::Time(NaiveTime::MIN));
    }
    if serial < 0.0 {
        return Err(CalendarError::excel_date(serial, "serial is negative"));
    }

    let mut days = serial.trunc() as i64;
    let mut seconds = ((serial - serial.trunc()) * SECONDS_PER_DAY as f64).round() as i64;
    if seconds == SECONDS_PER_DAY {
        seconds = 0;
        days += 1;
    }
    if days >= 100_000 {
        return Err(CalendarError::excel_date(serial, "serial is too large"));
    }

    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
        .ok_or_else(|| CalendarError::excel_date(serial, "fraction out of range"))?;
    if days == 0 {
        return Ok(ExcelValue::Time(time));
    }
    if days < 61 && mode == DateMode::Windows1900 {
        return Err(CalendarError::excel_date(
            serial,
            "serial is ambiguous before 1900-03-01",
        ));
    }

    let date = i32::try_from(days + mode.epoch())
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or_else(|| CalendarError::excel_date(serial, "serial is out of range"))?;
    Ok(ExcelValue::DateTime(date.and_time(time)))
}

/// Converts a timestamp into an Excel serial number.
#[must_use]
pub fn datetime_to_excel(timestamp: NaiveDateTime, mode: DateMode) -> f64 {
    let days = i64::from(timestamp.date().num_days_from_ce()) - mode.epoch();
    let seconds = timestamp.time().num_seconds_from_midnight();
    days as f64 + f64::from(seconds) / SECONDS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn timestamp(value: ExcelValue) -> NaiveDateTime {
        match value {
            ExcelValue::DateTime(ts) => ts,
            ExcelValue::Time(t) => panic!("expected a timestamp, got time {t}"),
        }
    }

    #[test]
    fn test_known_serial() {
        let ts = timestamp(excel_to_datetime(40534.0, DateMode::Windows1900).unwrap());
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2010, 12, 22).unwrap());
    }

    #[test]
    fn test_fraction_becomes_time() {
        let ts = timestamp(excel_to_datetime(40534.5, DateMode::Windows1900).unwrap());
        assert_eq!(ts.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_fraction_rounding_rolls_day() {
        let ts = timestamp(excel_to_datetime(40534.999_999_9, DateMode::Windows1900).unwrap());
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2010, 12, 23).unwrap());
        assert_eq!(ts.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_time_only() {
        assert_eq!(
            excel_to_datetime(0.0, DateMode::Windows1900).unwrap(),
            ExcelValue::Time(NaiveTime::MIN)
        );
        assert_eq!(
            excel_to_datetime(0.25, DateMode::Windows1900).unwrap(),
            ExcelValue::Time(NaiveTime::from_hms_opt(6, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_1904_mode() {
        let ts = timestamp(excel_to_datetime(60.0, DateMode::Mac1904).unwrap());
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(1904, 3, 1).unwrap());
    }

    #[test]
    fn test_first_unambiguous_1900_serial() {
        let ts = timestamp(excel_to_datetime(61.0, DateMode::Windows1900).unwrap());
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(1900, 3, 1).unwrap());
    }

    #[test]
    fn test_rejections() {
        assert!(matches!(
            excel_to_datetime(-1.0, DateMode::Windows1900),
            Err(CalendarError::ExcelDate { .. })
        ));
        assert!(excel_to_datetime(100_000.0, DateMode::Windows1900).is_err());
        assert!(excel_to_datetime(60.0, DateMode::Windows1900).is_err());
        assert!(excel_to_datetime(f64::NAN, DateMode::Windows1900).is_err());
    }

    #[test]
    fn test_date_mode_flag() {
        assert_eq!(DateMode::from_flag(0).unwrap(), DateMode::Windows1900);
        assert_eq!(DateMode::from_flag(1).unwrap(), DateMode::Mac1904);
        assert_eq!(
            DateMode::from_flag(2),
            Err(CalendarError::InvalidDateMode { mode: 2 })
        );
    }

    #[test]
    fn test_to_excel() {
        let ts = NaiveDate::from_ymd_opt(2010, 12, 22)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_relative_eq!(datetime_to_excel(ts, DateMode::Windows1900), 40534.75);
        assert_relative_eq!(
            datetime_to_excel(ts, DateMode::Mac1904),
            40534.75 - 1462.0
        );
    }
}

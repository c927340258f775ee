//! Astronomical and calendrical helpers used by holiday rules.
//!
//! Easter follows the anonymous Gregorian (Meeus/Jones/Butcher) algorithm.
//! Equinox days use a linear drift approximation that is accurate for
//! roughly 1900 to 2100 and degrades silently outside that range.

use chrono::Weekday;

use crate::types::{days_in_month, Date};

/// Day of March on which the vernal equinox fell in 2000, as a fraction.
const VERNAL_EQUINOX_2000: f64 = 20.69115;

/// Day of September on which the autumnal equinox fell in 2000, as a fraction.
const AUTUMNAL_EQUINOX_2000: f64 = 23.09;

/// Mean drift of the equinox instant per year, in days.
const EQUINOX_DRIFT_PER_YEAR: f64 = 0.242194;

/// Which equinox a rule refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// March equinox.
    Vernal,
    /// September equinox.
    Autumnal,
}

impl Season {
    /// Month in which the equinox falls.
    #[must_use]
    pub const fn month(self) -> u32 {
        match self {
            Season::Vernal => 3,
            Season::Autumnal => 9,
        }
    }

    /// Day of month of the equinox in the given year.
    #[must_use]
    pub fn day(self, year: i32) -> u32 {
        match self {
            Season::Vernal => vernal_equinox(year),
            Season::Autumnal => autumnal_equinox(year),
        }
    }
}

/// Calculate Easter Sunday using the anonymous Gregorian algorithm.
///
/// Returns `None` only when the year lies outside the representable date
/// range.
///
/// # Example
///
/// ```rust
/// use tradedays_core::calendars::astro::easter_sunday;
/// use tradedays_core::Date;
///
/// assert_eq!(easter_sunday(2012), Some(Date::from_ymd(2012, 4, 8).unwrap()));
/// ```
#[allow(clippy::many_single_char_names)]
#[must_use]
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd(year, month as u32, day as u32).ok()
}

/// Day of March on which the vernal equinox falls.
#[must_use]
pub fn vernal_equinox(year: i32) -> u32 {
    equinox_day(VERNAL_EQUINOX_2000, year)
}

/// Day of September on which the autumnal equinox falls.
#[must_use]
pub fn autumnal_equinox(year: i32) -> u32 {
    equinox_day(AUTUMNAL_EQUINOX_2000, year)
}

fn equinox_day(base: f64, year: i32) -> u32 {
    let elapsed = year - 2000;
    let moving_amount = f64::from(elapsed) * EQUINOX_DRIFT_PER_YEAR;
    // Floor division, so years before 2000 count their leap days downward.
    let leap_days = elapsed.div_euclid(4) + elapsed.div_euclid(100) - elapsed.div_euclid(400);
    let day = base + moving_amount - f64::from(leap_days);
    day.trunc() as u32
}

/// Calculate the nth occurrence of a weekday in a month.
#[must_use]
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u32) -> Option<Date> {
    if n == 0 {
        return None;
    }
    let first_of_month = Date::from_ymd(year, month, 1).ok()?;
    let days_until = (weekday.num_days_from_monday() as i32
        - first_of_month.weekday().num_days_from_monday() as i32)
        .rem_euclid(7) as u32;

    Date::from_ymd(year, month, 1 + days_until + (n - 1) * 7).ok()
}

/// Calculate the last occurrence of a weekday in a month.
#[must_use]
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<Date> {
    let last_day = Date::from_ymd(year, month, days_in_month(year, month)).ok()?;
    let days_back = (last_day.weekday().num_days_from_monday() as i32
        - weekday.num_days_from_monday() as i32)
        .rem_euclid(7);

    Some(last_day.add_days(-i64::from(days_back)))
}

/// Returns true if `date` is the `n`th `weekday` of its month.
#[must_use]
pub fn is_nth_weekday(date: Date, weekday: Weekday, n: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == n
}

/// Returns true if `date` is the last `weekday` of its month.
#[must_use]
pub fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.day() + 7 > date.days_in_month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_easter_dates() {
        assert_eq!(easter_sunday(2008), Some(date(2008, 3, 23)));
        assert_eq!(easter_sunday(2012), Some(date(2012, 4, 8)));
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
        assert_eq!(easter_sunday(1818), Some(date(1818, 3, 22)));
        assert_eq!(easter_sunday(1943), Some(date(1943, 4, 25)));
    }

    #[test]
    fn test_easter_is_sunday() {
        for year in 1900..=2200 {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sun, "year {year}");
        }
    }

    #[test]
    fn test_vernal_equinox() {
        assert_eq!(vernal_equinox(2012), 20);
        assert_eq!(vernal_equinox(2000), 20);
        assert_eq!(vernal_equinox(2024), 20);
        assert_eq!(vernal_equinox(2009), 20);
    }

    #[test]
    fn test_autumnal_equinox() {
        assert_eq!(autumnal_equinox(2009), 23);
        assert_eq!(autumnal_equinox(2012), 22);
        assert_eq!(autumnal_equinox(2000), 23);
    }

    #[test]
    fn test_equinox_before_2000() {
        // 1999: 20.69115 - 0.242194 - (-1 - 1 + 1) = 21.449 for the
        // vernal equinox, floor division carrying the leap days down.
        assert_eq!(vernal_equinox(1999), 21);
        assert_eq!(Season::Vernal.day(1999), 21);
        assert_eq!(Season::Autumnal.month(), 9);
    }

    #[test]
    fn test_nth_weekday() {
        // Thanksgiving 2025: fourth Thursday of November
        assert_eq!(
            nth_weekday_of_month(2025, 11, Weekday::Thu, 4),
            Some(date(2025, 11, 27))
        );
        assert_eq!(nth_weekday_of_month(2025, 11, Weekday::Thu, 0), None);
        assert_eq!(nth_weekday_of_month(2025, 11, Weekday::Thu, 6), None);
        assert!(is_nth_weekday(date(2025, 11, 27), Weekday::Thu, 4));
        assert!(!is_nth_weekday(date(2025, 11, 20), Weekday::Thu, 4));
    }

    #[test]
    fn test_last_weekday() {
        // Memorial Day 2025: last Monday of May
        assert_eq!(
            last_weekday_of_month(2025, 5, Weekday::Mon),
            Some(date(2025, 5, 26))
        );
        assert!(is_last_weekday(date(2025, 5, 26), Weekday::Mon));
        assert!(!is_last_weekday(date(2025, 5, 19), Weekday::Mon));
    }
}

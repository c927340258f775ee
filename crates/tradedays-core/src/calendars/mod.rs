//! Holiday profiles and business-day calendars.
//!
//! This module provides:
//! - The [`HolidayProfile`] trait and its non-overridable
//!   [`BusinessCalendar`] extension
//! - Holiday profiles for NYSE, LSE, LME, BOVESPA, ASX, TSX, FSE, MIL and TSE
//! - A process-wide registry resolving profiles by market name
//! - Business day adjustment conventions

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub mod astro;
mod asx;
mod bovespa;
mod continental;
mod conventions;
mod london;
mod nyse;
mod registry;
pub mod rules;
mod tse;
mod tsx;

pub use asx::Asx;
pub use bovespa::Bovespa;
pub use continental::{Fse, Mil};
pub use conventions::{adjust, BusinessDayConvention};
pub use london::{Lme, Lse};
pub use nyse::Nyse;
pub use registry::{profile, Market, ProfileRegistry};
pub use tse::Tse;
pub use tsx::Tsx;

use crate::types::Date;

/// Weekend definition for different markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendType {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (Middle East markets)
    FridaySaturday,
    /// Thursday and Friday
    ThursdayFriday,
    /// Sunday only
    SundayOnly,
    /// No weekends
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::ThursdayFriday => matches!(weekday, Weekday::Thu | Weekday::Fri),
            WeekendType::SundayOnly => matches!(weekday, Weekday::Sun),
            WeekendType::None => false,
        }
    }
}

/// A market's holiday profile.
///
/// Implementors decide which dates are weekends and which are holidays.
/// Whether a date is a business day follows from those two answers and is
/// provided by [`BusinessCalendar`], which cannot be overridden.
///
/// Profiles are immutable and shared across threads through the
/// [`ProfileRegistry`].
pub trait HolidayProfile: Send + Sync + fmt::Debug {
    /// Returns the market name of the profile.
    fn name(&self) -> &'static str;

    /// Returns true if the date falls on a weekend. Saturday and Sunday
    /// unless the profile says otherwise.
    fn is_weekend(&self, date: Date) -> bool {
        WeekendType::SaturdaySunday.is_weekend(date.weekday())
    }

    /// Returns the name of the holiday on `date`, if any.
    fn holiday_name(&self, _date: Date) -> Option<&'static str> {
        None
    }

    /// Returns true if the date is a holiday. Weekend dates can be holidays
    /// too: a Sunday New Year's Day is reported as a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// A holiday observed on a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    /// The closed date.
    pub date: Date,
    /// Name of the holiday.
    pub name: &'static str,
}

/// Business-day arithmetic for every [`HolidayProfile`].
///
/// Blanket-implemented for all profiles (including `dyn HolidayProfile`),
/// so `is_business_day` is always `!(is_weekend || is_holiday)`.
pub trait BusinessCalendar: HolidayProfile {
    /// Returns true if the date is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !(self.is_weekend(date) || self.is_holiday(date))
    }

    /// Returns the first business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the last business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Moves a date by a number of business days.
    ///
    /// The start date itself is never counted; zero returns the date as is.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.unsigned_abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Counts business days between two dates, exclusive of start and
    /// inclusive of end. Negative when `end` precedes `start`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        if end < start {
            return -self.business_days_between(end, start);
        }
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Lists the holidays of a year that fall on weekdays, in date order.
    fn holidays_in_year(&self, year: i32) -> Vec<Holiday> {
        let (Ok(mut date), Ok(last)) = (Date::from_ymd(year, 1, 1), Date::from_ymd(year, 12, 31))
        else {
            return Vec::new();
        };
        let mut holidays = Vec::new();
        while date <= last {
            if !self.is_weekend(date) && self.is_holiday(date) {
                holidays.push(Holiday {
                    date,
                    name: self.holiday_name(date).unwrap_or("Holiday"),
                });
            }
            date = date.add_days(1);
        }
        holidays
    }
}

impl<P: HolidayProfile + ?Sized> BusinessCalendar for P {}

/// A profile with weekends and no holidays.
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendOnly {
    weekend: WeekendType,
}

impl WeekendOnly {
    /// Creates a profile with a custom weekend.
    #[must_use]
    pub const fn new(weekend: WeekendType) -> Self {
        Self { weekend }
    }

    /// Returns the weekend definition.
    #[must_use]
    pub fn weekend(&self) -> WeekendType {
        self.weekend
    }
}

impl HolidayProfile for WeekendOnly {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekend.is_weekend(date.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_only() {
        let cal = WeekendOnly::default();

        // 2008-12-24 was a Wednesday
        assert!(!cal.is_weekend(date(2008, 12, 24)));
        assert!(!cal.is_holiday(date(2008, 12, 24)));
        assert!(cal.is_business_day(date(2008, 12, 24)));

        // 2012-01-01 was a Sunday
        assert!(cal.is_weekend(date(2012, 1, 1)));
        assert!(!cal.is_holiday(date(2012, 1, 1)));
        assert!(!cal.is_business_day(date(2012, 1, 1)));
    }

    #[test]
    fn test_custom_weekend() {
        let cal = WeekendOnly::new(WeekendType::FridaySaturday);
        assert_eq!(cal.weekend(), WeekendType::FridaySaturday);

        // Friday Jan 3 2025 is off, Sunday Jan 5 is a working day
        assert!(!cal.is_business_day(date(2025, 1, 3)));
        assert!(cal.is_business_day(date(2025, 1, 5)));
    }

    #[test]
    fn test_weekend_type_serde() {
        let json = serde_json::to_string(&WeekendType::FridaySaturday).unwrap();
        assert_eq!(json, "\"friday_saturday\"");
        let parsed: WeekendType = serde_json::from_str("\"sunday_only\"").unwrap();
        assert_eq!(parsed, WeekendType::SundayOnly);
    }

    #[test]
    fn test_add_business_days() {
        let cal = WeekendOnly::default();

        // Friday + 1 business day = Monday
        let friday = date(2025, 1, 3);
        assert_eq!(cal.add_business_days(friday, 1), date(2025, 1, 6));
        assert_eq!(cal.add_business_days(date(2025, 1, 6), -1), friday);
        assert_eq!(cal.add_business_days(friday, 0), friday);
    }

    #[test]
    fn test_next_previous_business_day() {
        let cal = WeekendOnly::default();
        let saturday = date(2025, 1, 4);
        assert_eq!(cal.next_business_day(saturday), date(2025, 1, 6));
        assert_eq!(cal.previous_business_day(saturday), date(2025, 1, 3));
        assert_eq!(cal.next_business_day(date(2025, 1, 3)), date(2025, 1, 3));
    }

    #[test]
    fn test_business_days_between() {
        let cal = WeekendOnly::default();

        // Monday to Friday = 4 business days (Tue, Wed, Thu, Fri)
        let monday = date(2025, 1, 6);
        let friday = date(2025, 1, 10);

        assert_eq!(cal.business_days_between(monday, friday), 4);
        assert_eq!(cal.business_days_between(friday, monday), -4);
        assert_eq!(cal.business_days_between(monday, monday), 0);
    }

    #[test]
    fn test_dyn_profile_gets_extension() {
        let cal: Box<dyn HolidayProfile> = Box::new(WeekendOnly::default());
        assert!(cal.is_business_day(date(2025, 1, 6)));
        assert!(cal.holidays_in_year(2025).is_empty());
    }
}

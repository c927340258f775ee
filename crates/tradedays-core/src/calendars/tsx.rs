//! Toronto Stock Exchange holiday profile.

use chrono::Weekday;

use super::rules::{first_match, HolidayRule, Observance, WeekdaySet};
use super::HolidayProfile;
use crate::types::Date;

/// Toronto Stock Exchange holidays.
///
/// ## Holidays
///
/// - New Year's Day (January 1, Monday if Sunday)
/// - Family Day (3rd Monday in February, since 2008)
/// - Good Friday
/// - Victoria Day (Monday May 18-24)
/// - Canada Day (July 1, Monday if on a weekend)
/// - Civic Holiday (1st Monday in August)
/// - Labour Day (1st Monday in September)
/// - Thanksgiving Day (2nd Monday in October)
/// - Christmas Day and Boxing Day (Monday and Tuesday if on a weekend)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tsx;

impl HolidayProfile for Tsx {
    fn name(&self) -> &'static str {
        "TSX"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[TSX_RULES], date)
    }
}

static TSX_RULES: &[HolidayRule] = &[
    HolidayRule::observed("New Year's Day", 1, 1, Observance::SundayToMonday),
    HolidayRule::nth_weekday("Family Day", 2, Weekday::Mon, 3).from_year(2008),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::weekday_window("Victoria Day", 5, WeekdaySet::single(Weekday::Mon), 18, 24),
    HolidayRule::observed("Canada Day", 7, 1, Observance::WeekendToMonday),
    HolidayRule::nth_weekday("Civic Holiday", 8, Weekday::Mon, 1),
    HolidayRule::nth_weekday("Labour Day", 9, Weekday::Mon, 1),
    HolidayRule::nth_weekday("Thanksgiving Day", 10, Weekday::Mon, 2),
    HolidayRule::observed("Christmas Day", 12, 25, Observance::DeferredPair),
    HolidayRule::observed("Boxing Day", 12, 26, Observance::DeferredPair),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::BusinessCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_family_day_from_2008() {
        assert!(!Tsx.is_holiday(date(2007, 2, 19)));
        assert!(Tsx.is_holiday(date(2008, 2, 18)));
    }

    #[test]
    fn test_victoria_day() {
        assert_eq!(Tsx.holiday_name(date(2012, 5, 21)), Some("Victoria Day"));
        assert!(Tsx.is_business_day(date(2012, 5, 14)));
    }

    #[test]
    fn test_canada_day_on_weekend() {
        // Sunday Jul 1 2012 observed Monday 2nd
        assert!(Tsx.is_holiday(date(2012, 7, 2)));
        // Saturday Jul 1 2017 observed Monday 3rd
        assert!(Tsx.is_holiday(date(2017, 7, 3)));
    }

    #[test]
    fn test_christmas_eve_is_business_day() {
        assert!(Tsx.is_business_day(date(2008, 12, 24)));
        assert!(Tsx.is_holiday(date(2008, 12, 26)));
    }
}

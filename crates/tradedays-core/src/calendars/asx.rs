//! Australian Securities Exchange holiday profile.

use chrono::Weekday;

use super::rules::{first_match, HolidayRule, Observance};
use super::HolidayProfile;
use crate::types::Date;

/// Australian Securities Exchange holidays.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Australia Day (January 26, Monday if on a weekend)
/// - Good Friday and Easter Monday
/// - ANZAC Day (April 25, Monday if Sunday)
/// - Queen's Birthday (2nd Monday in June)
/// - Bank Holiday (1st Monday in August)
/// - Labour Day (1st Monday in October)
/// - Christmas Day and Boxing Day (Monday and Tuesday if on a weekend)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Asx;

impl HolidayProfile for Asx {
    fn name(&self) -> &'static str {
        "ASX"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[ASX_RULES], date)
    }
}

static ASX_RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::observed("Australia Day", 1, 26, Observance::WeekendToMonday),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::observed("ANZAC Day", 4, 25, Observance::SundayToMonday),
    HolidayRule::nth_weekday("Queen's Birthday", 6, Weekday::Mon, 2),
    HolidayRule::nth_weekday("Bank Holiday", 8, Weekday::Mon, 1),
    HolidayRule::nth_weekday("Labour Day", 10, Weekday::Mon, 1),
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
    fn test_new_year_has_no_substitute() {
        assert!(Asx.is_holiday(date(2012, 1, 1)));
        assert!(Asx.is_business_day(date(2012, 1, 2)));
    }

    #[test]
    fn test_australia_day() {
        assert!(Asx.is_holiday(date(2012, 1, 26)));
        // Sunday Jan 26 2014 observed Monday 27th
        assert!(Asx.is_holiday(date(2014, 1, 27)));
    }

    #[test]
    fn test_anzac_day() {
        assert!(Asx.is_holiday(date(2012, 4, 25)));
        // Sunday Apr 25 2010 observed Monday 26th
        assert!(Asx.is_holiday(date(2010, 4, 26)));
        // Saturday Apr 25 2015 has no substitute
        assert!(Asx.is_business_day(date(2015, 4, 27)));
    }

    #[test]
    fn test_2012_holidays() {
        let names: Vec<&str> = Asx.holidays_in_year(2012).iter().map(|h| h.name).collect();
        assert_eq!(
            names,
            vec![
                "Australia Day",
                "Good Friday",
                "Easter Monday",
                "ANZAC Day",
                "Queen's Birthday",
                "Bank Holiday",
                "Labour Day",
                "Christmas Day",
                "Boxing Day",
            ]
        );
    }
}

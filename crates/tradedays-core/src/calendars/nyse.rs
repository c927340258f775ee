//! New York Stock Exchange holiday profile.

use chrono::Weekday;

use super::rules::{first_match, HolidayRule, Observance, WeekdaySet};
use super::HolidayProfile;
use crate::types::Date;

/// New York Stock Exchange holidays.
///
/// ## Holidays
///
/// - New Year's Day (January 1, Monday if Sunday)
/// - Martin Luther King Jr. Day (3rd Monday in January)
/// - Washington's Birthday (3rd Monday in February)
/// - Good Friday
/// - Memorial Day (last Monday in May)
/// - Independence Day (July 4, nearest weekday)
/// - Labor Day (1st Monday in September)
/// - Presidential Election Day (Tuesday in November 1-7, every fourth year)
/// - Thanksgiving Day (4th Thursday in November)
/// - Christmas Day (December 25, nearest weekday)
///
/// ## Special Closures
///
/// Presidential funerals, the 1977 blackout, the September 2001 attacks and
/// the 1968 paperwork crisis, when the exchange shut every Wednesday from
/// June 12 to year end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nyse;

impl HolidayProfile for Nyse {
    fn name(&self) -> &'static str {
        "NYSE"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[NYSE_RULES], date)
    }
}

static NYSE_RULES: &[HolidayRule] = &[
    HolidayRule::weekday_window(
        "Presidential Election Day",
        11,
        WeekdaySet::single(Weekday::Tue),
        1,
        7,
    )
    .every(4, 0),
    HolidayRule::observed("New Year's Day", 1, 1, Observance::SundayToMonday),
    HolidayRule::nth_weekday("Washington's Birthday", 2, Weekday::Mon, 3),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::last_weekday("Memorial Day", 5, Weekday::Mon),
    HolidayRule::observed("Independence Day", 7, 4, Observance::NearestWeekday),
    HolidayRule::nth_weekday("Labor Day", 9, Weekday::Mon, 1),
    HolidayRule::nth_weekday("Thanksgiving Day", 11, Weekday::Thu, 4),
    HolidayRule::observed("Christmas Day", 12, 25, Observance::NearestWeekday),
    HolidayRule::nth_weekday("Martin Luther King Jr. Day", 1, Weekday::Mon, 3),
    HolidayRule::one_off("Funeral of President Reagan", 2004, 6, 11),
    HolidayRule::closure("September 11 Attacks", 2001, 9, 11, 14),
    HolidayRule::one_off("Funeral of President Ford", 2007, 1, 2),
    HolidayRule::one_off("New York City Blackout", 1977, 7, 14),
    HolidayRule::one_off("Funeral of President Johnson", 1973, 1, 25),
    HolidayRule::one_off("Funeral of President Truman", 1972, 12, 28),
    HolidayRule::one_off("National Day of Participation for the Lunar Exploration", 1969, 7, 21),
    HolidayRule::one_off("Funeral of President Eisenhower", 1969, 3, 31),
    HolidayRule::one_off("Heavy Snow", 1969, 2, 10),
    HolidayRule::one_off("Day after Independence Day", 1968, 7, 5),
    HolidayRule::weekly_closure("Paperwork Crisis", 1968, Weekday::Wed, (6, 12), (12, 31)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::BusinessCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_christmas_eve_is_business_day() {
        let cal = Nyse;
        let holy_night = date(2008, 12, 24);
        assert!(!cal.is_weekend(holy_night));
        assert!(!cal.is_holiday(holy_night));
        assert!(cal.is_business_day(holy_night));
    }

    #[test]
    fn test_sunday_new_year() {
        let cal = Nyse;
        let new_year = date(2012, 1, 1);
        assert!(cal.is_weekend(new_year));
        assert!(cal.is_holiday(new_year));
        assert!(!cal.is_business_day(new_year));
        // Observed on Monday
        assert_eq!(cal.holiday_name(date(2012, 1, 2)), Some("New Year's Day"));
    }

    #[test]
    fn test_independence_day() {
        let cal = Nyse;
        let july4 = date(2012, 7, 4);
        assert!(!cal.is_weekend(july4));
        assert!(cal.is_holiday(july4));
        assert!(!cal.is_business_day(july4));
        // Saturday July 4 2015 observed on Friday
        assert!(cal.is_holiday(date(2015, 7, 3)));
    }

    #[test]
    fn test_2012_holidays() {
        let holidays: Vec<Date> = Nyse.holidays_in_year(2012).iter().map(|h| h.date).collect();
        assert_eq!(
            holidays,
            vec![
                date(2012, 1, 2),
                date(2012, 1, 16),
                date(2012, 2, 20),
                date(2012, 4, 6),
                date(2012, 5, 28),
                date(2012, 7, 4),
                date(2012, 9, 3),
                date(2012, 11, 6),
                date(2012, 11, 22),
                date(2012, 12, 25),
            ]
        );
    }

    #[test]
    fn test_election_day_every_fourth_year() {
        assert_eq!(
            Nyse.holiday_name(date(1968, 11, 5)),
            Some("Presidential Election Day")
        );
        assert!(!Nyse.is_holiday(date(1969, 11, 4)));
    }

    #[test]
    fn test_special_closures() {
        let closures = [
            date(2004, 6, 11),
            date(2001, 9, 11),
            date(2001, 9, 12),
            date(2001, 9, 13),
            date(2001, 9, 14),
            date(2007, 1, 2),
            date(1977, 7, 14),
            date(1973, 1, 25),
            date(1972, 12, 28),
            date(1969, 7, 21),
            date(1969, 3, 31),
            date(1969, 2, 10),
            date(1968, 7, 5),
        ];
        for closure in closures {
            assert!(Nyse.is_holiday(closure), "{closure} should be closed");
        }
        assert!(!Nyse.is_holiday(date(2001, 9, 17)));
    }

    #[test]
    fn test_paperwork_crisis_wednesdays() {
        assert!(Nyse.is_holiday(date(1968, 6, 12)));
        assert!(Nyse.is_holiday(date(1968, 12, 18)));
        assert!(!Nyse.is_holiday(date(1968, 6, 5)));
        assert!(!Nyse.is_holiday(date(1968, 6, 13)));
        assert!(!Nyse.is_holiday(date(1969, 6, 11)));
    }
}

//! London exchange holiday profiles.
//!
//! The London Stock Exchange and the London Metal Exchange close on the
//! same England and Wales bank holidays.

use chrono::Weekday;

use super::rules::{first_match, HolidayRule, Observance};
use super::HolidayProfile;
use crate::types::Date;

/// London Stock Exchange holidays.
///
/// ## Holidays
///
/// - New Year's Day (January 1, Monday if on a weekend)
/// - Good Friday
/// - Easter Monday
/// - Early May Bank Holiday (1st Monday in May)
/// - Spring Bank Holiday (last Monday in May, moved in 2002)
/// - Summer Bank Holiday (last Monday in August)
/// - Christmas Day and Boxing Day (Monday and Tuesday if on a weekend)
///
/// ## Special Holidays
///
/// The Golden Jubilee (2002-06-03/04), the Diamond Jubilee (2012-06-05)
/// and the millennium eve closure (1999-12-31).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lse;

impl HolidayProfile for Lse {
    fn name(&self) -> &'static str {
        "LSE"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[UK_RULES], date)
    }
}

/// London Metal Exchange holidays; identical to [`Lse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lme;

impl HolidayProfile for Lme {
    fn name(&self) -> &'static str {
        "LME"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[UK_RULES], date)
    }
}

static UK_RULES: &[HolidayRule] = &[
    HolidayRule::observed("New Year's Day", 1, 1, Observance::WeekendToMonday),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::nth_weekday("Early May Bank Holiday", 5, Weekday::Mon, 1),
    HolidayRule::last_weekday("Spring Bank Holiday", 5, Weekday::Mon).except_years(&[2002]),
    HolidayRule::last_weekday("Summer Bank Holiday", 8, Weekday::Mon),
    HolidayRule::observed("Christmas Day", 12, 25, Observance::DeferredPair),
    HolidayRule::observed("Boxing Day", 12, 26, Observance::DeferredPair),
    HolidayRule::closure("Golden Jubilee", 2002, 6, 3, 4),
    HolidayRule::one_off("Diamond Jubilee", 2012, 6, 5),
    HolidayRule::one_off("Millennium Eve", 1999, 12, 31),
];

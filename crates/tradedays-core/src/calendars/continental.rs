//! Frankfurt and Milan exchange holiday profiles.
//!
//! Both exchanges share a core of fixed and Easter-based closures; Milan
//! adds Assumption Day.

use super::rules::{first_match, HolidayRule};
use super::HolidayProfile;
use crate::types::Date;

/// Frankfurt Stock Exchange (Xetra) holidays.
///
/// New Year's Day, Good Friday, Easter Monday, Labour Day, Christmas Eve,
/// Christmas Day, the second Christmas holiday and New Year's Eve, with no
/// weekend substitutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fse;

impl HolidayProfile for Fse {
    fn name(&self) -> &'static str {
        "FSE"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[CORE_RULES, FSE_RULES], date)
    }
}

/// Borsa Italiana holidays: the Frankfurt set plus Assumption Day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mil;

impl HolidayProfile for Mil {
    fn name(&self) -> &'static str {
        "MIL"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[CORE_RULES, MIL_RULES], date)
    }
}

static CORE_RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::easter("Good Friday", -2),
    HolidayRule::easter("Easter Monday", 1),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::fixed("Christmas Eve", 12, 24),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::fixed("New Year's Eve", 12, 31),
];

static FSE_RULES: &[HolidayRule] = &[HolidayRule::fixed("Boxing Day", 12, 26)];

static MIL_RULES: &[HolidayRule] = &[
    HolidayRule::fixed("Assumption Day", 8, 15),
    HolidayRule::fixed("St. Stephen's Day", 12, 26),
];

//! Sao Paulo stock exchange (BOVESPA) holiday profile.

use super::rules::{first_match, HolidayRule, Observance};
use super::HolidayProfile;
use crate::types::Date;

/// BOVESPA holidays.
///
/// Fixed national and Sao Paulo municipal holidays, the Easter-based
/// Carnival, Passion of Christ and Corpus Christi closures, and the last
/// trading day of the year.
///
/// Carnival is matched at 49 and 48 days before Easter Sunday and Corpus
/// Christi at 59 days after. The first Carnival offset always lands on a
/// Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bovespa;

impl HolidayProfile for Bovespa {
    fn name(&self) -> &'static str {
        "BOVESPA"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[BOVESPA_RULES], date)
    }
}

static BOVESPA_RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::fixed("Sao Paulo City Day", 1, 25),
    HolidayRule::fixed("Tiradentes Day", 4, 21),
    HolidayRule::fixed("Labour Day", 5, 1),
    HolidayRule::fixed("Constitutionalist Revolution", 7, 9),
    HolidayRule::fixed("Independence Day", 9, 7),
    HolidayRule::fixed("Our Lady of Aparecida", 10, 12),
    HolidayRule::fixed("All Souls' Day", 11, 2),
    HolidayRule::fixed("Republic Day", 11, 15),
    HolidayRule::fixed("Black Consciousness Day", 11, 20).from_year(2007),
    HolidayRule::fixed("Christmas Day", 12, 25),
    HolidayRule::easter("Passion of Christ", -2),
    HolidayRule::easter("Carnival", -49),
    HolidayRule::easter("Carnival", -48),
    HolidayRule::easter("Corpus Christi", 59),
    HolidayRule::observed("Last Trading Day of the Year", 12, 31, Observance::WeekendToFriday),
];

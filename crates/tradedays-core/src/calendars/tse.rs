//! Tokyo Stock Exchange holiday profile.

use chrono::Weekday;

use super::astro::Season;
use super::rules::{first_match, HolidayRule, Observance, RuleKind, WeekdaySet};
use super::HolidayProfile;
use crate::types::Date;

/// Tokyo Stock Exchange holidays.
///
/// ## Holidays
///
/// - New Year holidays (January 1-3)
/// - Coming of Age Day (2nd Monday in January, January 15 before 2000)
/// - National Foundation Day (February 11)
/// - Vernal Equinox Day
/// - Greenery Day (April 29)
/// - Golden Week (May 3-5, substitute on May 6 if Monday to Wednesday)
/// - Marine Day (3rd Monday in July, July 20 from 1996 to 2002)
/// - Respect for the Aged Day (3rd Monday in September, September 15 before 2003)
/// - Autumnal Equinox Day
/// - Health and Sports Day (2nd Monday in October, October 10 before 2000)
/// - Culture Day (November 3)
/// - Labour Thanksgiving Day (November 23)
/// - Emperor's Birthday (December 23, since 1989)
/// - Year-end holiday (December 31)
///
/// Most fixed holidays falling on a Sunday are observed on Monday. Since
/// 2003 a Tuesday sandwiched between Respect for the Aged Day and the
/// Autumnal Equinox is a holiday too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tse;

impl HolidayProfile for Tse {
    fn name(&self) -> &'static str {
        "TSE"
    }

    fn holiday_name(&self, date: Date) -> Option<&'static str> {
        first_match(&[TSE_RULES], date)
    }
}

const RESPECT_FOR_THE_AGED_DAY: RuleKind = RuleKind::WeekdayWindow {
    month: 9,
    weekdays: WeekdaySet::single(Weekday::Mon),
    first: 15,
    last: 21,
};

const AUTUMNAL_EQUINOX: RuleKind = RuleKind::Equinox {
    season: Season::Autumnal,
    observance: Observance::Exact,
};

const MON_TO_WED: WeekdaySet = WeekdaySet::single(Weekday::Mon)
    .with(Weekday::Tue)
    .with(Weekday::Wed);

static TSE_RULES: &[HolidayRule] = &[
    HolidayRule::fixed("New Year's Day", 1, 1),
    HolidayRule::fixed("Bank Holiday", 1, 2),
    HolidayRule::fixed("Bank Holiday", 1, 3),
    HolidayRule::nth_weekday("Coming of Age Day", 1, Weekday::Mon, 2).from_year(2000),
    HolidayRule::observed("Coming of Age Day", 1, 15, Observance::SundayToMonday).until_year(1999),
    HolidayRule::observed("National Foundation Day", 2, 11, Observance::SundayToMonday),
    HolidayRule::equinox("Vernal Equinox Day", Season::Vernal, Observance::SundayToMonday),
    HolidayRule::observed("Greenery Day", 4, 29, Observance::SundayToMonday),
    HolidayRule::fixed("Constitution Memorial Day", 5, 3),
    HolidayRule::fixed("Holiday for a Nation", 5, 4),
    HolidayRule::fixed("Children's Day", 5, 5),
    HolidayRule::weekday_window("Golden Week Substitute Holiday", 5, MON_TO_WED, 6, 6),
    HolidayRule::nth_weekday("Marine Day", 7, Weekday::Mon, 3).from_year(2003),
    HolidayRule::observed("Marine Day", 7, 20, Observance::SundayToMonday).between_years(1996, 2002),
    HolidayRule::new("Respect for the Aged Day", RESPECT_FOR_THE_AGED_DAY).from_year(2003),
    HolidayRule::observed("Respect for the Aged Day", 9, 15, Observance::SundayToMonday)
        .until_year(2002),
    HolidayRule::bridge(
        "Citizens' Holiday",
        &RESPECT_FOR_THE_AGED_DAY,
        &AUTUMNAL_EQUINOX,
    )
    .from_year(2003),
    HolidayRule::equinox("Autumnal Equinox Day", Season::Autumnal, Observance::SundayToMonday),
    HolidayRule::nth_weekday("Health and Sports Day", 10, Weekday::Mon, 2).from_year(2000),
    HolidayRule::observed("Health and Sports Day", 10, 10, Observance::SundayToMonday)
        .until_year(1999),
    HolidayRule::observed("Culture Day", 11, 3, Observance::SundayToMonday),
    HolidayRule::observed("Labour Thanksgiving Day", 11, 23, Observance::SundayToMonday),
    HolidayRule::observed("Emperor's Birthday", 12, 23, Observance::SundayToMonday).from_year(1989),
    HolidayRule::fixed("Bank Holiday", 12, 31),
    HolidayRule::one_off("Marriage of Prince Akihito", 1959, 4, 10),
    HolidayRule::one_off("Rites of Imperial Funeral", 1989, 2, 24),
    HolidayRule::one_off("Enthronement Ceremony", 1990, 11, 12),
    HolidayRule::one_off("Marriage of Prince Naruhito", 1993, 6, 9),
];

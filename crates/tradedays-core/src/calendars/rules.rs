//! Declarative holiday rules.
//!
//! Every market profile is a static table of [`HolidayRule`]s. A date is a
//! holiday when any rule in the table matches it; rules are checked against
//! the actual calendar date, so weekend shifting is expressed through each
//! rule's [`Observance`] rather than by moving dates around.

use chrono::Weekday;
use log::trace;

use super::astro::{easter_sunday, is_last_weekday, Season};
use crate::types::Date;

/// A set of weekdays, packed into a bitmask so it can live in static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// A set containing a single weekday.
    #[must_use]
    pub const fn single(day: Weekday) -> Self {
        Self(bit(day))
    }

    /// Returns the set with `day` added.
    #[must_use]
    pub const fn with(self, day: Weekday) -> Self {
        Self(self.0 | bit(day))
    }

    /// Returns true if `day` is in the set.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }
}

const fn bit(day: Weekday) -> u8 {
    1 << (day as u8)
}

/// How a fixed-date holiday moves when its nominal day is not a weekday.
///
/// The nominal day itself always matches, so a holiday falling on a weekend
/// is still reported as a holiday on that weekend day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Observance {
    /// Only the nominal day.
    #[default]
    Exact,
    /// A Sunday holiday is also observed on the following Monday.
    SundayToMonday,
    /// Saturday moves to the preceding Friday, Sunday to the following Monday.
    NearestWeekday,
    /// A Saturday or Sunday holiday is also observed on the following Monday.
    WeekendToMonday,
    /// A Saturday or Sunday holiday is also observed on the preceding Friday.
    WeekendToFriday,
    /// Consecutive holidays (Christmas and Boxing Day) that both fall on a
    /// weekend are observed two days later, on Monday and Tuesday.
    DeferredPair,
}

impl Observance {
    /// Returns true if `date` (already known to be in the holiday's month)
    /// observes a holiday whose nominal day of month is `nominal`.
    #[must_use]
    pub fn matches(self, nominal: u32, date: Date) -> bool {
        let day = date.day();
        if day == nominal {
            return true;
        }
        let weekday = date.weekday();
        match self {
            Observance::Exact => false,
            Observance::SundayToMonday => weekday == Weekday::Mon && day == nominal + 1,
            Observance::NearestWeekday => {
                (weekday == Weekday::Mon && day == nominal + 1)
                    || (weekday == Weekday::Fri && day + 1 == nominal)
            }
            Observance::WeekendToMonday => {
                weekday == Weekday::Mon && (day == nominal + 1 || day == nominal + 2)
            }
            Observance::WeekendToFriday => {
                weekday == Weekday::Fri && (day + 1 == nominal || day + 2 == nominal)
            }
            Observance::DeferredPair => {
                matches!(weekday, Weekday::Mon | Weekday::Tue) && day == nominal + 2
            }
        }
    }
}

/// The years in which a rule is in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Years {
    /// Every year.
    #[default]
    All,
    /// From the given year onward.
    From(i32),
    /// Up to and including the given year.
    Until(i32),
    /// Between the two years, inclusive.
    Between(i32, i32),
    /// Every year except those listed.
    Except(&'static [i32]),
    /// Years where `year % period == remainder`.
    Every {
        /// Cycle length in years.
        period: i32,
        /// Position within the cycle.
        remainder: i32,
    },
}

impl Years {
    /// Returns true if the rule is in force in `year`.
    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        match *self {
            Years::All => true,
            Years::From(first) => year >= first,
            Years::Until(last) => year <= last,
            Years::Between(first, last) => year >= first && year <= last,
            Years::Except(excluded) => !excluded.contains(&year),
            Years::Every { period, remainder } => year.rem_euclid(period) == remainder,
        }
    }
}

/// The date pattern of a holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A fixed month and day, with an observance for weekends.
    Fixed {
        /// Month (1-12).
        month: u32,
        /// Nominal day of month.
        day: u32,
        /// Weekend observance.
        observance: Observance,
    },
    /// Any listed weekday whose day of month lies in `first..=last`.
    ///
    /// "Third Monday of February" is Monday in days 15 through 21.
    WeekdayWindow {
        /// Month (1-12).
        month: u32,
        /// Matching weekdays.
        weekdays: WeekdaySet,
        /// First day of the window.
        first: u32,
        /// Last day of the window.
        last: u32,
    },
    /// The last given weekday of a month.
    LastWeekday {
        /// Month (1-12).
        month: u32,
        /// Matching weekday.
        weekday: Weekday,
    },
    /// A day offset from Easter Sunday.
    Easter {
        /// Days after (positive) or before (negative) Easter Sunday.
        offset: i64,
    },
    /// The vernal or autumnal equinox, with an observance for weekends.
    Equinox {
        /// Which equinox.
        season: Season,
        /// Weekend observance.
        observance: Observance,
    },
    /// A one-off closure spanning `first..=last` of a single month.
    OneOff {
        /// Year of the closure.
        year: i32,
        /// Month (1-12).
        month: u32,
        /// First closed day.
        first: u32,
        /// Last closed day.
        last: u32,
    },
    /// A weekday closed every week between two (month, day) bounds of a
    /// single year, inclusive.
    WeeklyClosure {
        /// Year of the closures.
        year: i32,
        /// Closed weekday.
        weekday: Weekday,
        /// First (month, day) of the closure period.
        from: (u32, u32),
        /// Last (month, day) of the closure period.
        to: (u32, u32),
    },
    /// A weekday sandwiched between a day matching `before` and a day
    /// matching `after`.
    Bridge {
        /// Pattern the previous day must match.
        before: &'static RuleKind,
        /// Pattern the next day must match.
        after: &'static RuleKind,
    },
}

impl RuleKind {
    /// Returns true if the pattern matches `date`, ignoring year bounds.
    #[must_use]
    pub fn matches(&self, date: Date) -> bool {
        match *self {
            RuleKind::Fixed {
                month,
                day,
                observance,
            } => date.month() == month && observance.matches(day, date),
            RuleKind::WeekdayWindow {
                month,
                weekdays,
                first,
                last,
            } => {
                date.month() == month
                    && weekdays.contains(date.weekday())
                    && (first..=last).contains(&date.day())
            }
            RuleKind::LastWeekday { month, weekday } => {
                date.month() == month && is_last_weekday(date, weekday)
            }
            RuleKind::Easter { offset } => {
                easter_sunday(date.year()).is_some_and(|easter| easter.add_days(offset) == date)
            }
            RuleKind::Equinox { season, observance } => {
                date.month() == season.month()
                    && observance.matches(season.day(date.year()), date)
            }
            RuleKind::OneOff {
                year,
                month,
                first,
                last,
            } => date.year() == year && date.month() == month && (first..=last).contains(&date.day()),
            RuleKind::WeeklyClosure {
                year,
                weekday,
                from,
                to,
            } => {
                let month_day = (date.month(), date.day());
                date.year() == year && date.weekday() == weekday && month_day >= from && month_day <= to
            }
            RuleKind::Bridge { before, after } => {
                !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
                    && before.matches(date.add_days(-1))
                    && after.matches(date.add_days(1))
            }
        }
    }
}

/// A named holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    /// Holiday name reported for matching dates.
    pub name: &'static str,
    /// Date pattern.
    pub kind: RuleKind,
    /// Years in which the rule applies.
    pub years: Years,
}

impl HolidayRule {
    /// A rule with an arbitrary pattern, in force every year.
    #[must_use]
    pub const fn new(name: &'static str, kind: RuleKind) -> Self {
        Self {
            name,
            kind,
            years: Years::All,
        }
    }

    /// A fixed month and day with no weekend observance.
    #[must_use]
    pub const fn fixed(name: &'static str, month: u32, day: u32) -> Self {
        Self::observed(name, month, day, Observance::Exact)
    }

    /// A fixed month and day with a weekend observance.
    #[must_use]
    pub const fn observed(
        name: &'static str,
        month: u32,
        day: u32,
        observance: Observance,
    ) -> Self {
        Self::new(
            name,
            RuleKind::Fixed {
                month,
                day,
                observance,
            },
        )
    }

    /// Any of `weekdays` within `first..=last` of `month`.
    #[must_use]
    pub const fn weekday_window(
        name: &'static str,
        month: u32,
        weekdays: WeekdaySet,
        first: u32,
        last: u32,
    ) -> Self {
        Self::new(
            name,
            RuleKind::WeekdayWindow {
                month,
                weekdays,
                first,
                last,
            },
        )
    }

    /// The `n`th `weekday` of `month`, counting from 1.
    #[must_use]
    pub const fn nth_weekday(name: &'static str, month: u32, weekday: Weekday, n: u32) -> Self {
        Self::weekday_window(
            name,
            month,
            WeekdaySet::single(weekday),
            (n - 1) * 7 + 1,
            n * 7,
        )
    }

    /// The last `weekday` of `month`.
    #[must_use]
    pub const fn last_weekday(name: &'static str, month: u32, weekday: Weekday) -> Self {
        Self::new(name, RuleKind::LastWeekday { month, weekday })
    }

    /// A day `offset` days from Easter Sunday.
    #[must_use]
    pub const fn easter(name: &'static str, offset: i64) -> Self {
        Self::new(name, RuleKind::Easter { offset })
    }

    /// An equinox day with a weekend observance.
    #[must_use]
    pub const fn equinox(name: &'static str, season: Season, observance: Observance) -> Self {
        Self::new(name, RuleKind::Equinox { season, observance })
    }

    /// A single-day closure.
    #[must_use]
    pub const fn one_off(name: &'static str, year: i32, month: u32, day: u32) -> Self {
        Self::closure(name, year, month, day, day)
    }

    /// A closure spanning consecutive days of one month.
    #[must_use]
    pub const fn closure(name: &'static str, year: i32, month: u32, first: u32, last: u32) -> Self {
        Self::new(
            name,
            RuleKind::OneOff {
                year,
                month,
                first,
                last,
            },
        )
    }

    /// A weekday closed every week between two (month, day) bounds of `year`.
    #[must_use]
    pub const fn weekly_closure(
        name: &'static str,
        year: i32,
        weekday: Weekday,
        from: (u32, u32),
        to: (u32, u32),
    ) -> Self {
        Self::new(
            name,
            RuleKind::WeeklyClosure {
                year,
                weekday,
                from,
                to,
            },
        )
    }

    /// A weekday between a day matching `before` and a day matching `after`.
    #[must_use]
    pub const fn bridge(
        name: &'static str,
        before: &'static RuleKind,
        after: &'static RuleKind,
    ) -> Self {
        Self::new(name, RuleKind::Bridge { before, after })
    }

    /// Restricts the rule to `year` and later.
    #[must_use]
    pub const fn from_year(self, year: i32) -> Self {
        Self {
            years: Years::From(year),
            ..self
        }
    }

    /// Restricts the rule to `year` and earlier.
    #[must_use]
    pub const fn until_year(self, year: i32) -> Self {
        Self {
            years: Years::Until(year),
            ..self
        }
    }

    /// Restricts the rule to `first..=last`.
    #[must_use]
    pub const fn between_years(self, first: i32, last: i32) -> Self {
        Self {
            years: Years::Between(first, last),
            ..self
        }
    }

    /// Suspends the rule in the listed years.
    #[must_use]
    pub const fn except_years(self, years: &'static [i32]) -> Self {
        Self {
            years: Years::Except(years),
            ..self
        }
    }

    /// Restricts the rule to years where `year % period == remainder`.
    #[must_use]
    pub const fn every(self, period: i32, remainder: i32) -> Self {
        Self {
            years: Years::Every { period, remainder },
            ..self
        }
    }

    /// Returns true if the rule is in force and matches `date`.
    #[must_use]
    pub fn applies(&self, date: Date) -> bool {
        self.years.contains(date.year()) && self.kind.matches(date)
    }
}

/// Returns the name of the first rule across `tables` that matches `date`.
#[must_use]
pub fn first_match(tables: &[&'static [HolidayRule]], date: Date) -> Option<&'static str> {
    let name = tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|rule| rule.applies(date))
        .map(|rule| rule.name);
    match name {
        Some(name) => trace!("{} matches holiday rule '{}'", date, name),
        None => trace!("{} matches no holiday rule", date),
    }
    name
}

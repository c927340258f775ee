//! Business day adjustment conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::BusinessCalendar;
use crate::error::CalendarError;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    Unadjusted,

    /// Move to the following business day.
    #[default]
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,

    /// Move to the nearest business day (following or preceding, whichever is closer).
    Nearest,
}

impl BusinessDayConvention {
    /// All conventions, in declaration order.
    pub const ALL: [BusinessDayConvention; 6] = [
        BusinessDayConvention::Unadjusted,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Nearest,
    ];
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Nearest => "Nearest",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BusinessDayConvention {
    type Err = CalendarError;

    /// Parses a convention name, ignoring case, spaces, dashes and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "unadjusted" | "none" => Ok(Self::Unadjusted),
            "following" | "f" => Ok(Self::Following),
            "modifiedfollowing" | "mf" => Ok(Self::ModifiedFollowing),
            "preceding" | "p" => Ok(Self::Preceding),
            "modifiedpreceding" | "mp" => Ok(Self::ModifiedPreceding),
            "nearest" => Ok(Self::Nearest),
            _ => Err(CalendarError::UnknownConvention { name: s.to_string() }),
        }
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: BusinessCalendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => calendar.next_business_day(date),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = calendar.next_business_day(date);
            if adjusted.month() != date.month() {
                // Crossed month boundary, go preceding instead
                calendar.previous_business_day(date)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Preceding => calendar.previous_business_day(date),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = calendar.previous_business_day(date);
            if adjusted.month() != date.month() {
                // Crossed month boundary, go following instead
                calendar.next_business_day(date)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Nearest => {
            let fwd = calendar.next_business_day(date);
            let back = calendar.previous_business_day(date);

            if date.days_between(&fwd) <= back.days_between(&date) {
                fwd
            } else {
                back
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{Nyse, WeekendOnly};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_following() {
        let cal = WeekendOnly::default();

        // Saturday should roll to Monday
        let saturday = date(2025, 1, 4);
        let adjusted = adjust(saturday, BusinessDayConvention::Following, &cal);

        assert_eq!(adjusted, date(2025, 1, 6));
    }

    #[test]
    fn test_preceding() {
        let cal = WeekendOnly::default();

        // Saturday should roll to Friday
        let saturday = date(2025, 1, 4);
        let adjusted = adjust(saturday, BusinessDayConvention::Preceding, &cal);

        assert_eq!(adjusted, date(2025, 1, 3));
    }

    #[test]
    fn test_modified_following_month_end() {
        let cal = WeekendOnly::default();

        // Saturday May 31 2025 would roll into June, so it goes back to Friday
        let adjusted = adjust(date(2025, 5, 31), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, date(2025, 5, 30));

        // Sunday Jan 5 should roll to Monday Jan 6 (same month)
        let adjusted = adjust(date(2025, 1, 5), BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, date(2025, 1, 6));
    }

    #[test]
    fn test_modified_preceding_month_start() {
        let cal = WeekendOnly::default();

        // Sunday Jun 1 2025 would roll into May, so it goes forward to Monday
        let adjusted = adjust(date(2025, 6, 1), BusinessDayConvention::ModifiedPreceding, &cal);
        assert_eq!(adjusted, date(2025, 6, 2));
    }

    #[test]
    fn test_nearest() {
        let cal = WeekendOnly::default();
        assert_eq!(
            adjust(date(2025, 1, 4), BusinessDayConvention::Nearest, &cal),
            date(2025, 1, 3)
        );
        assert_eq!(
            adjust(date(2025, 1, 5), BusinessDayConvention::Nearest, &cal),
            date(2025, 1, 6)
        );
    }

    #[test]
    fn test_holiday_is_adjusted() {
        // Independence Day 2012 (Wednesday) rolls to Thursday
        let adjusted = adjust(date(2012, 7, 4), BusinessDayConvention::Following, &Nyse);
        assert_eq!(adjusted, date(2012, 7, 5));
    }

    #[test]
    fn test_unadjusted() {
        let cal = WeekendOnly::default();
        let saturday = date(2025, 1, 4);
        assert_eq!(adjust(saturday, BusinessDayConvention::Unadjusted, &cal), saturday);
    }

    #[test]
    fn test_business_day_unchanged() {
        let cal = WeekendOnly::default();
        let monday = date(2025, 1, 6);
        for convention in BusinessDayConvention::ALL {
            assert_eq!(adjust(monday, convention, &cal), monday);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Modified Following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(
            "modified_preceding".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedPreceding
        );
        assert_eq!(
            "MF".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!("sideways".parse::<BusinessDayConvention>().is_err());
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(BusinessDayConvention::default(), BusinessDayConvention::Following);
        assert_eq!(
            BusinessDayConvention::ModifiedFollowing.to_string(),
            "Modified Following"
        );
    }
}

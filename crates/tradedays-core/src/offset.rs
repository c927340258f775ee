//! Business-day offsets.
//!
//! A [`BusinessDayOffset`] moves a point in time by a number of business
//! days of a holiday profile, skipping weekends and holidays.
//!
//! # Example
//!
//! ```rust
//! use tradedays_core::offset::BusinessDayOffset;
//! use tradedays_core::Date;
//!
//! let back_two = -2 * BusinessDayOffset::for_market(1, "LSE").unwrap();
//! let start = Date::from_ymd(2008, 12, 30).unwrap();
//! assert_eq!(back_two.apply_date(start).unwrap(), Date::from_ymd(2008, 12, 24).unwrap());
//! ```

use std::fmt;
use std::ops::{Mul, Neg};
use std::sync::Arc;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use log::{debug, trace};

use crate::calendars::{profile, BusinessCalendar, HolidayProfile, Market};
use crate::error::{CalendarError, CalendarResult};
use crate::types::Date;

/// A value a business-day offset can be applied to.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A point in time.
    Timestamp(NaiveDateTime),
    /// A calendar date, treated as midnight.
    Date(Date),
    /// A duration, folded into the offset's trailing offset.
    Duration(Duration),
    /// Another offset; not supported.
    Offset(BusinessDayOffset),
    /// A bare number; not supported.
    Integer(i64),
}

impl Operand {
    /// Returns a short name of the operand's kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Timestamp(_) => "timestamp",
            Operand::Date(_) => "date",
            Operand::Duration(_) => "duration",
            Operand::Offset(_) => "business day offset",
            Operand::Integer(_) => "integer",
        }
    }
}

impl From<NaiveDateTime> for Operand {
    fn from(value: NaiveDateTime) -> Self {
        Operand::Timestamp(value)
    }
}

impl From<Date> for Operand {
    fn from(value: Date) -> Self {
        Operand::Date(value)
    }
}

impl From<Duration> for Operand {
    fn from(value: Duration) -> Self {
        Operand::Duration(value)
    }
}

impl From<BusinessDayOffset> for Operand {
    fn from(value: BusinessDayOffset) -> Self {
        Operand::Offset(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

/// Result of applying an offset.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The shifted point in time.
    Timestamp(NaiveDateTime),
    /// A new offset, produced when a duration was applied.
    Offset(BusinessDayOffset),
}

/// Moves points in time by `n` business days of a holiday profile.
///
/// Offsets are immutable; the builder methods return modified copies.
#[derive(Clone)]
pub struct BusinessDayOffset {
    n: i32,
    profile: Arc<dyn HolidayProfile>,
    normalize: bool,
    offset: Option<Duration>,
}

impl BusinessDayOffset {
    /// Creates an offset of `n` business days of `profile`.
    #[must_use]
    pub fn new(n: i32, profile: Arc<dyn HolidayProfile>) -> Self {
        debug!("business day offset n={} profile={}", n, profile.name());
        Self {
            n,
            profile,
            normalize: false,
            offset: None,
        }
    }

    /// Creates an offset whose profile is resolved by market name.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnknownProfile` if no profile has that name.
    pub fn for_market(n: i32, name: &str) -> CalendarResult<Self> {
        Ok(Self::new(n, profile(name)?))
    }

    /// Truncates results to midnight before the trailing offset is added.
    #[must_use]
    pub fn with_normalize(self, normalize: bool) -> Self {
        Self { normalize, ..self }
    }

    /// Sets a duration added to every result after stepping.
    #[must_use]
    pub fn with_offset(self, offset: Duration) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    /// Returns the signed step count.
    #[must_use]
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Returns the holiday profile.
    #[must_use]
    pub fn profile(&self) -> &Arc<dyn HolidayProfile> {
        &self.profile
    }

    /// Returns true if results are truncated to midnight.
    #[must_use]
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Returns the trailing offset, if any.
    #[must_use]
    pub fn offset(&self) -> Option<Duration> {
        self.offset
    }

    /// Applies the offset to an operand.
    ///
    /// Timestamps and dates are shifted; a duration yields a new offset
    /// with the duration added to its trailing offset.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::UnsupportedOperand` for any other operand and
    /// `CalendarError::Overflow` when a result leaves the representable range.
    pub fn apply(&self, operand: impl Into<Operand>) -> CalendarResult<Applied> {
        match operand.into() {
            Operand::Timestamp(ts) => Ok(Applied::Timestamp(self.apply_to(ts)?)),
            Operand::Date(date) => Ok(Applied::Timestamp(self.apply_to(date.at_midnight())?)),
            Operand::Duration(extra) => {
                let offset = match self.offset {
                    Some(current) => current
                        .checked_add(&extra)
                        .ok_or_else(|| CalendarError::overflow("trailing offset"))?,
                    None => extra,
                };
                Ok(Applied::Offset(self.clone().with_offset(offset)))
            }
            other => Err(CalendarError::unsupported_operand(other.kind())),
        }
    }

    /// Shifts a timestamp by the offset's business days.
    ///
    /// Only the date part decides whether a day counts; the time of day is
    /// carried along unless the offset normalizes. With `n == 0` a timestamp
    /// on a business day is returned unchanged, and one on a non-business day
    /// rolls forward to the next business day.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Overflow` if stepping or the trailing offset
    /// moves past the range of `NaiveDateTime`.
    pub fn apply_to(&self, timestamp: NaiveDateTime) -> CalendarResult<NaiveDateTime> {
        let mut n = self.n;
        if n == 0 && !self.profile.is_business_day(Date::from(timestamp)) {
            n = 1;
        }

        let mut result = timestamp;
        while n != 0 {
            let step = n.signum();
            result = result
                .checked_add_signed(Duration::days(i64::from(step)))
                .ok_or_else(|| CalendarError::overflow("business day step"))?;
            if self.profile.is_business_day(Date::from(result)) {
                n -= step;
            }
        }

        if self.normalize {
            result = result.date().and_time(NaiveTime::MIN);
        }
        if let Some(offset) = self.offset {
            result = result
                .checked_add_signed(offset)
                .ok_or_else(|| CalendarError::overflow("trailing offset"))?;
        }

        trace!(
            "{} business days on {} from {} gives {}",
            self.n,
            self.profile.name(),
            timestamp,
            result
        );
        Ok(result)
    }

    /// Shifts a date by the offset's business days, ignoring any trailing
    /// duration's time of day.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Overflow` as [`apply_to`](Self::apply_to) does.
    pub fn apply_date(&self, date: Date) -> CalendarResult<Date> {
        self.apply_to(date.at_midnight()).map(Date::from)
    }

    /// Returns true if `date` is a business day of the offset's profile.
    #[must_use]
    pub fn on_offset(&self, date: Date) -> bool {
        self.profile.is_business_day(date)
    }

    /// Moves a timestamp forward to the first business day on or after it.
    #[must_use]
    pub fn rollforward(&self, timestamp: NaiveDateTime) -> NaiveDateTime {
        let date = Date::from(timestamp);
        let target = self.profile.next_business_day(date);
        timestamp + Duration::days(date.days_between(&target))
    }

    /// Moves a timestamp back to the last business day on or before it.
    #[must_use]
    pub fn rollback(&self, timestamp: NaiveDateTime) -> NaiveDateTime {
        let date = Date::from(timestamp);
        let target = self.profile.previous_business_day(date);
        timestamp + Duration::days(date.days_between(&target))
    }
}

impl Default for BusinessDayOffset {
    /// One NYSE business day.
    fn default() -> Self {
        Self::new(1, Market::Nyse.profile())
    }
}

impl fmt::Debug for BusinessDayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessDayOffset")
            .field("n", &self.n)
            .field("profile", &self.profile.name())
            .field("normalize", &self.normalize)
            .field("offset", &self.offset)
            .finish()
    }
}

impl fmt::Display for BusinessDayOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} * BusinessDay[{}]>", self.n, self.profile.name())
    }
}

impl PartialEq for BusinessDayOffset {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n
            && self.normalize == other.normalize
            && self.offset == other.offset
            && self.profile.name() == other.profile.name()
    }
}

impl Neg for BusinessDayOffset {
    type Output = Self;

    /// Saturates at `i32::MAX` for `i32::MIN` steps.
    fn neg(self) -> Self::Output {
        Self {
            n: self.n.saturating_neg(),
            ..self
        }
    }
}

impl Mul<i32> for BusinessDayOffset {
    type Output = Self;

    /// Saturates at the bounds of `i32`.
    fn mul(self, factor: i32) -> Self::Output {
        Self {
            n: self.n.saturating_mul(factor),
            ..self
        }
    }
}

impl Mul<BusinessDayOffset> for i32 {
    type Output = BusinessDayOffset;

    fn mul(self, offset: BusinessDayOffset) -> Self::Output {
        offset * self
    }
}

//! # Tradedays Core
//!
//! Exchange holiday calendars and business-day arithmetic.
//!
//! This crate provides the building blocks used throughout tradedays:
//!
//! - **Types**: the `Date` newtype and Excel serial date conversion
//! - **Calendars**: holiday profiles for NYSE, LSE, LME, BOVESPA, ASX, TSX,
//!   FSE, MIL and TSE, the rule vocabulary they are written in, and the
//!   astronomical helpers (Easter, equinoxes) those rules depend on
//! - **Offset**: a business-day offset that steps timestamps over weekends
//!   and holidays
//! - **Conventions**: business-day adjustment conventions
//!
//! ## Example
//!
//! ```rust
//! use tradedays_core::prelude::*;
//!
//! let nyse = Market::Nyse.profile();
//! let july4 = Date::from_ymd(2012, 7, 4).unwrap();
//! assert!(nyse.is_holiday(july4));
//! assert_eq!(nyse.next_business_day(july4), Date::from_ymd(2012, 7, 5).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod error;
pub mod offset;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessCalendar, BusinessDayConvention, Holiday, HolidayProfile, Market,
        ProfileRegistry, WeekendOnly, WeekendType,
    };
    pub use crate::error::{CalendarError, CalendarResult};
    pub use crate::offset::{Applied, BusinessDayOffset, Operand};
    pub use crate::types::{Date, DateMode};
}

// Re-export commonly used types at crate root
pub use calendars::{BusinessCalendar, HolidayProfile, Market};
pub use error::{CalendarError, CalendarResult};
pub use offset::BusinessDayOffset;
pub use types::Date;

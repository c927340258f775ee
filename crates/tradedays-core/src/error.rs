//! Error types for tradedays calendars.
//!
//! Every fallible operation in this crate returns [`CalendarResult`].

use thiserror::Error;

/// A specialized Result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// The error type for calendar and business-day operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A holiday profile was requested by a name that is not registered.
    #[error("No such holiday profile: {name}")]
    UnknownProfile {
        /// The name that failed to resolve.
        name: String,
    },

    /// A business day convention name could not be parsed.
    #[error("Unknown business day convention: {name}")]
    UnknownConvention {
        /// The name that failed to parse.
        name: String,
    },

    /// A business-day offset was combined with something it cannot act on.
    #[error("Only know how to combine business day with datetime or timedelta, got {kind}")]
    UnsupportedOperand {
        /// Kind of the rejected operand.
        kind: &'static str,
    },

    /// The Excel date mode was neither 0 (1900 system) nor 1 (1904 system).
    #[error("Invalid Excel date mode: {mode}")]
    InvalidDateMode {
        /// The rejected mode value.
        mode: u8,
    },

    /// An Excel serial number could not be converted to a date.
    #[error("Invalid Excel date {serial}: {reason}")]
    ExcelDate {
        /// The serial number that failed to convert.
        serial: f64,
        /// Why the conversion failed.
        reason: &'static str,
    },

    /// Date or duration arithmetic left the representable range.
    #[error("Date arithmetic overflowed in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}

impl CalendarError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unknown profile error.
    #[must_use]
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile { name: name.into() }
    }

    /// Creates an unsupported operand error.
    #[must_use]
    pub fn unsupported_operand(kind: &'static str) -> Self {
        Self::UnsupportedOperand { kind }
    }

    /// Creates an Excel conversion error.
    #[must_use]
    pub fn excel_date(serial: f64, reason: &'static str) -> Self {
        Self::ExcelDate { serial, reason }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

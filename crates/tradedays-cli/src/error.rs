//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date or timestamp.
    #[error("Invalid date: {0}. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS.")]
    InvalidDate(String),

    /// Numeric argument outside the range the command supports.
    #[error("{flag} {value} is out of range")]
    OutOfRange {
        /// Flag that carried the value.
        flag: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// Config file could not be read.
    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected settings.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// Calendar lookup or date arithmetic failed.
    #[error(transparent)]
    Calendar(#[from] tradedays_core::CalendarError),

    /// Cash-flow analytics failed.
    #[error(transparent)]
    CashFlow(#[from] tradedays_cashflows::CashFlowError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

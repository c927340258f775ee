//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AdjustArgs, BondArgs, CashflowArgs, CheckArgs, HolidaysArgs, OffsetArgs};

/// Tradedays - exchange holiday calendars and business-day arithmetic
#[derive(Parser)]
#[command(name = "tradedays")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(long, env = "TRADEDAYS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the supported markets
    Markets,

    /// Report whether a date is a weekend, holiday or business day
    Check(CheckArgs),

    /// List the weekday holidays of a year
    Holidays(HolidaysArgs),

    /// Shift a date or timestamp by a number of business days
    Offset(OffsetArgs),

    /// Roll a date onto a business day with a convention
    Adjust(AdjustArgs),

    /// Present value, IRR and durations of an annual cash flow
    Cashflow(CashflowArgs),

    /// Build a fixed-coupon bond schedule and its yield
    Bond(BondArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tradedays", "markets", "--format", "json", "-v"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
    }
}

//! Tradedays CLI - exchange holiday calendars from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Is a date a business day in London?
//! tradedays check 2012-06-04 --market LSE
//!
//! # Weekday holidays of a year
//! tradedays holidays --year 2013 --market TSE
//!
//! # Two business days before a timestamp
//! tradedays offset "2008-12-30 09:30:00" --n -2 --market NYSE
//!
//! # Present value and IRR of an annual cash flow
//! tradedays cashflow --amounts -100,10,110 --rate 0.05
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::{CliConfig, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&config, cli.format)?;
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        Commands::Markets => commands::markets::execute(&settings)?,
        Commands::Check(args) => commands::check::execute(args, &settings)?,
        Commands::Holidays(args) => commands::holidays::execute(args, &settings)?,
        Commands::Offset(args) => commands::offset::execute(args, &settings)?,
        Commands::Adjust(args) => commands::adjust::execute(args, &settings)?,
        Commands::Cashflow(args) => commands::cashflow::execute(args, &settings)?,
        Commands::Bond(args) => commands::bond::execute(args, &settings)?,
    }

    Ok(())
}

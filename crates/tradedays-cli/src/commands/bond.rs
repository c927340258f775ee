//! Bond command implementation.
//!
//! Builds a fixed-coupon bond, lists its rolled payment dates and reports
//! its yield.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tradedays_cashflows::Bond;
use tradedays_core::calendars::BusinessDayConvention;
use tradedays_core::Date;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::config::Settings;
use crate::output::{format_optional, print_header, print_output, KeyValue};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Start (purchase) date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Maturity date (YYYY-MM-DD)
    #[arg(long)]
    pub maturity: String,

    /// Annual coupon rate as a decimal (0.05 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Coupons per year: 1, 2, 3, 4, 6 or 12
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// Purchase price per 100 face
    #[arg(short, long, default_value = "100")]
    pub price: f64,

    /// Convention used to roll payment dates
    #[arg(long, default_value = "following")]
    pub convention: BusinessDayConvention,

    /// Market code (NYSE, LSE, LME, BOVESPA, ASX, TSX, FSE, MIL, TSE)
    #[arg(short, long)]
    pub market: Option<String>,
}

#[derive(Debug, Serialize)]
struct BondReport {
    description: String,
    market: &'static str,
    yield_to_maturity: Option<f64>,
    payments: Vec<Payment>,
}

#[derive(Debug, Serialize, Tabled)]
struct Payment {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "Amount")]
    amount: f64,
}

/// Execute the bond command.
pub fn execute(args: BondArgs, settings: &Settings) -> Result<()> {
    let profile = settings.profile(args.market.as_deref())?;
    let bond = Bond::builder()
        .start(parse_date(&args.start)?)
        .maturity(parse_date(&args.maturity)?)
        .coupon_rate(args.coupon)
        .frequency(args.frequency)
        .price(args.price)
        .convention(args.convention)
        .profile(profile)
        .build()?;

    let yield_to_maturity = match bond.yield_to_maturity() {
        Ok(ytm) => Some(ytm),
        Err(err) => {
            tracing::warn!("no yield for {}: {err}", bond.description());
            None
        }
    };

    let report = BondReport {
        description: bond.description().to_string(),
        market: bond.profile().name(),
        yield_to_maturity,
        payments: bond
            .payment_dates()
            .iter()
            .zip(bond.cashflow().amounts())
            .map(|(&date, &amount)| Payment { date, amount })
            .collect(),
    };

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::new("Bond", report.description.clone()),
                KeyValue::new("Market", report.market),
                KeyValue::new("Convention", bond.convention().to_string()),
                KeyValue::new("Yield to Maturity", format_optional(report.yield_to_maturity, 8)),
            ];
            print_header("Bond");
            print_output(&summary, OutputFormat::Table)?;
            print_header("Payments");
            print_output(&report.payments, OutputFormat::Table)?;
        }
    }

    Ok(())
}

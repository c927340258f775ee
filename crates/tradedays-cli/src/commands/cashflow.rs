//! Cashflow command implementation.
//!
//! Present value, IRR, durations and convexity of payments one year apart.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tradedays_cashflows::cashflow::CashFlowRow;
use tradedays_cashflows::{CashFlow, TimeAxis};

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::output::{format_optional, print_header, print_output, print_table, KeyValue};

/// Arguments for the cashflow command.
#[derive(Args, Debug)]
pub struct CashflowArgs {
    /// Comma-separated amounts, the first paid now and each next one a year later
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        required = true
    )]
    pub amounts: Vec<f64>,

    /// Annual discount rate as a decimal (0.05 for 5%)
    #[arg(short, long, allow_hyphen_values = true, default_value = "0.05")]
    pub rate: f64,
}

#[derive(Debug, Serialize)]
struct CashflowReport {
    rate: f64,
    present_value: f64,
    duration: f64,
    convexity: f64,
    irr: Option<f64>,
    macaulay_duration: Option<f64>,
    modified_duration: Option<f64>,
    rows: Vec<CashFlowRow>,
}

#[derive(Tabled)]
struct PaymentRow {
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
    #[tabled(rename = "Discounted")]
    discounted: String,
}

/// Execute the cashflow command.
pub fn execute(args: CashflowArgs, settings: &Settings) -> Result<()> {
    let periods = (0..args.amounts.len()).map(|i| i as f64).collect();
    let cf = CashFlow::new(TimeAxis::Annual(periods), args.amounts)?;

    // A stream without a non-negative IRR still has a present value
    let irr = match cf.irr() {
        Ok(irr) => Some(irr),
        Err(err) => {
            tracing::warn!("no internal rate of return: {err}");
            None
        }
    };

    let report = CashflowReport {
        rate: args.rate,
        present_value: cf.present_value(args.rate),
        duration: cf.duration(args.rate),
        convexity: cf.convexity(args.rate),
        irr,
        macaulay_duration: irr.map(|r| cf.duration(r)),
        modified_duration: irr.map(|r| cf.duration(r) / (1.0 + r)),
        rows: cf.rows(args.rate),
    };

    match settings.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::new("Rate", format!("{:.4}%", report.rate * 100.0)),
                KeyValue::new("Present Value", format!("{:.6}", report.present_value)),
                KeyValue::new("Duration", format!("{:.6}", report.duration)),
                KeyValue::new("Convexity", format!("{:.6}", report.convexity)),
                KeyValue::new("IRR", format_optional(report.irr, 8)),
                KeyValue::new("Macaulay Duration", format_optional(report.macaulay_duration, 6)),
                KeyValue::new("Modified Duration", format_optional(report.modified_duration, 6)),
            ];
            print_header("Cash Flow Analytics");
            print_output(&summary, OutputFormat::Table)?;

            let payments: Vec<PaymentRow> = report
                .rows
                .iter()
                .map(|row| PaymentRow {
                    days: format!("{:.0}", row.days),
                    amount: format!("{:.4}", row.amount),
                    discount_factor: format!("{:.8}", row.discount_factor),
                    discounted: format!("{:.4}", row.discounted),
                })
                .collect();
            print_header("Payments");
            print_table(&payments)?;
        }
    }

    Ok(())
}

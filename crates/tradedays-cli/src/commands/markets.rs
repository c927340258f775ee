//! Markets command implementation.
//!
//! Lists the markets with a built-in holiday profile.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use tradedays_core::Market;

use crate::config::Settings;
use crate::output::print_output;

#[derive(Debug, Serialize, Tabled)]
struct MarketRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Market")]
    description: &'static str,
    #[tabled(rename = "Default")]
    #[serde(rename = "default")]
    is_default: bool,
}

/// Execute the markets command.
pub fn execute(settings: &Settings) -> Result<()> {
    let rows: Vec<MarketRow> = Market::ALL
        .into_iter()
        .map(|market| MarketRow {
            code: market.code(),
            description: market.description(),
            is_default: market == settings.market,
        })
        .collect();

    print_output(&rows, settings.format)
}

//! Closed-form present values of level and growing payment streams.

use crate::error::{CashFlowError, CashFlowResult};

/// Present value of a perpetuity paying `amount` each period at rate `r`,
/// with payments growing by `growth` per period after the first.
///
/// # Errors
///
/// Returns `CashFlowError::InvalidInput` unless `r > growth`; otherwise the
/// series does not converge.
///
/// # Example
///
/// ```rust
/// use tradedays_cashflows::annuity::perpetuity_pv;
///
/// assert_eq!(perpetuity_pv(75.0, 0.05, 0.02).unwrap().round(), 2500.0);
/// ```
pub fn perpetuity_pv(amount: f64, r: f64, growth: f64) -> CashFlowResult<f64> {
    check_spread(r, growth)?;
    Ok(amount / (r - growth))
}

/// Present value of `periods` payments of `amount` at rate `r`, growing by
/// `growth` per period after the first.
///
/// # Errors
///
/// Returns `CashFlowError::InvalidInput` unless `r > growth`.
pub fn annuity_pv(amount: f64, r: f64, periods: u32, growth: f64) -> CashFlowResult<f64> {
    check_spread(r, growth)?;
    let spread = r - growth;
    let ratio = ((1.0 + growth) / (1.0 + r)).powf(f64::from(periods));
    Ok(amount * (1.0 - ratio) / spread)
}

fn check_spread(r: f64, growth: f64) -> CashFlowResult<()> {
    if r > growth {
        Ok(())
    } else {
        Err(CashFlowError::invalid_input(format!(
            "rate {r} must exceed growth {growth}"
        )))
    }
}

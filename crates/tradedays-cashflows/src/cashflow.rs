//! Payment streams and their discounting analytics.
//!
//! A [`CashFlow`] pairs payment amounts with the times they occur. Times are
//! turned into a day schedule measured from the earliest time, and every
//! rate-dependent figure discounts on that schedule with a daily-compounded
//! equivalent of the annual rate.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tradedays_core::Date;

use crate::error::{CashFlowError, CashFlowResult};
use crate::solvers::{bisection, SolverConfig};

/// Day count used to convert between annual rates, years and days.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Initial upper bound of the IRR bracket.
const IRR_UPPER_START: f64 = 0.5;

/// The upper bound is doubled at most this many times before giving up.
const IRR_MAX_DOUBLINGS: u32 = 32;

const IRR_TOLERANCE: f64 = 1e-8;
const IRR_MAX_ITERATIONS: u32 = 100;

/// How the payment times of a cash flow are expressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "times", rename_all = "snake_case")]
pub enum TimeAxis {
    /// Excel serial day numbers.
    Excel(Vec<f64>),
    /// Calendar dates. Interest does not accrue on the start date, so each
    /// offset is one day shorter than the calendar distance.
    Dates(Vec<Date>),
    /// Periods in years, 365 days each.
    Annual(Vec<f64>),
}

impl TimeAxis {
    /// Number of payment times.
    pub fn len(&self) -> usize {
        match self {
            TimeAxis::Excel(times) | TimeAxis::Annual(times) => times.len(),
            TimeAxis::Dates(dates) => dates.len(),
        }
    }

    /// Returns true if there are no payment times.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Days from the earliest time for each payment. The first entry is
    /// always zero.
    fn day_schedule(&self) -> CashFlowResult<Vec<f64>> {
        let mut days = match self {
            TimeAxis::Excel(serials) => {
                let start = finite_min(serials)?;
                serials.iter().map(|s| s - start).collect::<Vec<_>>()
            }
            TimeAxis::Dates(dates) => {
                let start = dates
                    .iter()
                    .min()
                    .copied()
                    .ok_or_else(|| CashFlowError::invalid_input("no payment dates"))?;
                dates
                    .iter()
                    .map(|d| (*d - start - 1) as f64)
                    .collect::<Vec<_>>()
            }
            TimeAxis::Annual(periods) => {
                let start = finite_min(periods)?;
                periods
                    .iter()
                    .map(|p| (p - start) * DAYS_PER_YEAR)
                    .collect::<Vec<_>>()
            }
        };
        if let Some(first) = days.first_mut() {
            *first = 0.0;
        }
        Ok(days)
    }
}

fn finite_min(values: &[f64]) -> CashFlowResult<f64> {
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(CashFlowError::invalid_input(format!(
            "payment time {bad} is not finite"
        )));
    }
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or_else(|| CashFlowError::invalid_input("no payment times"))
}

/// One discounted payment, as reported by [`CashFlow::rows`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    /// Days from the start of the cash flow.
    pub days: f64,
    /// Undiscounted amount.
    pub amount: f64,
    /// Discount factor for the payment.
    pub discount_factor: f64,
    /// Discounted amount.
    pub discounted: f64,
}

/// A stream of future payments.
///
/// The first amount is conventionally the (negative) purchase price paid at
/// the start; present values include it, durations and convexity measure
/// only the payments after it.
///
/// # Example
///
/// ```rust
/// use tradedays_cashflows::{CashFlow, TimeAxis};
///
/// let cf = CashFlow::new(TimeAxis::Annual(vec![1.0, 2.0, 3.0]), vec![-100.0, 10.0, 110.0]).unwrap();
/// assert_eq!(cf.schedule(), &[0.0, 365.0, 730.0]);
/// assert!((cf.present_value(0.05) - 9.297052154).abs() < 1e-8);
/// ```
#[derive(Debug, Clone)]
pub struct CashFlow {
    times: TimeAxis,
    amounts: Vec<f64>,
    schedule: Vec<f64>,
    irr: OnceCell<f64>,
}

impl CashFlow {
    /// Creates a cash flow from payment times and amounts.
    ///
    /// # Errors
    ///
    /// Returns `CashFlowError::InvalidInput` if the inputs are empty, differ
    /// in length or contain non-finite values.
    pub fn new(times: TimeAxis, amounts: Vec<f64>) -> CashFlowResult<Self> {
        if amounts.is_empty() {
            return Err(CashFlowError::invalid_input("cash flow has no amounts"));
        }
        if times.len() != amounts.len() {
            return Err(CashFlowError::invalid_input(format!(
                "{} payment times for {} amounts",
                times.len(),
                amounts.len()
            )));
        }
        if let Some(bad) = amounts.iter().find(|a| !a.is_finite()) {
            return Err(CashFlowError::invalid_input(format!(
                "amount {bad} is not finite"
            )));
        }

        let schedule = times.day_schedule()?;
        log::debug!("cash flow with {} payments, days {:?}", amounts.len(), schedule);

        Ok(Self {
            times,
            amounts,
            schedule,
            irr: OnceCell::new(),
        })
    }

    /// Payment times as given.
    pub fn times(&self) -> &TimeAxis {
        &self.times
    }

    /// Payment amounts.
    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    /// Days from the start for each payment.
    pub fn schedule(&self) -> &[f64] {
        &self.schedule
    }

    /// Discount factor of each payment at annual rate `r`.
    pub fn discount_factors(&self, r: f64) -> Vec<f64> {
        let daily = (1.0 + r).powf(1.0 / DAYS_PER_YEAR) - 1.0;
        self.schedule
            .iter()
            .map(|days| (1.0 + daily).powf(-days))
            .collect()
    }

    /// Discounted amount of each payment at annual rate `r`.
    pub fn discounted(&self, r: f64) -> Vec<f64> {
        self.discount_factors(r)
            .into_iter()
            .zip(&self.amounts)
            .map(|(df, amount)| df * amount)
            .collect()
    }

    /// Present value at annual rate `r`.
    pub fn present_value(&self, r: f64) -> f64 {
        let pv = self.discounted(r).iter().sum();
        log::trace!("present value at r = {r}: {pv}");
        pv
    }

    /// Per-payment breakdown at annual rate `r`.
    pub fn rows(&self, r: f64) -> Vec<CashFlowRow> {
        self.schedule
            .iter()
            .zip(&self.amounts)
            .zip(self.discount_factors(r))
            .map(|((&days, &amount), discount_factor)| CashFlowRow {
                days,
                amount,
                discount_factor,
                discounted: amount * discount_factor,
            })
            .collect()
    }

    /// Internal rate of return: the rate at which the present value is zero.
    ///
    /// Searched on `[0, 0.5]`, doubling the upper bound while the present
    /// value there is still positive. The result is computed once and cached.
    ///
    /// # Errors
    ///
    /// Returns `CashFlowError::InvalidBracket` when no non-negative rate
    /// brings the present value to zero.
    pub fn irr(&self) -> CashFlowResult<f64> {
        self.irr.get_or_try_init(|| self.solve_irr()).copied()
    }

    fn solve_irr(&self) -> CashFlowResult<f64> {
        let mut upper = IRR_UPPER_START;
        let mut doublings = 0;
        while self.present_value(upper) > 0.0 {
            if doublings == IRR_MAX_DOUBLINGS {
                return Err(CashFlowError::InvalidBracket {
                    a: 0.0,
                    b: upper,
                    fa: self.present_value(0.0),
                    fb: self.present_value(upper),
                });
            }
            upper *= 2.0;
            doublings += 1;
        }

        let config = SolverConfig::new(IRR_TOLERANCE, IRR_MAX_ITERATIONS);
        let result = bisection(|r| self.present_value(r), 0.0, upper, &config)?;
        log::debug!(
            "internal rate of return {} after {} iterations",
            result.root,
            result.iterations
        );
        Ok(result.root)
    }

    /// Duration in years at annual rate `r`.
    ///
    /// Weighted by discounted amounts and normalised by the present value of
    /// the payments after the first.
    pub fn duration(&self, r: f64) -> f64 {
        let weighted: f64 = self
            .schedule
            .iter()
            .zip(self.discounted(r))
            .map(|(days, dcf)| days / DAYS_PER_YEAR * dcf)
            .sum();
        weighted / self.payments_value(r)
    }

    /// Macaulay duration: the duration at the internal rate of return.
    pub fn macaulay_duration(&self) -> CashFlowResult<f64> {
        let irr = self.irr()?;
        Ok(self.duration(irr))
    }

    /// Modified duration: Macaulay duration divided by `1 + irr`.
    pub fn modified_duration(&self) -> CashFlowResult<f64> {
        let irr = self.irr()?;
        Ok(self.duration(irr) / (1.0 + irr))
    }

    /// Convexity at annual rate `r`.
    pub fn convexity(&self, r: f64) -> f64 {
        let weighted: f64 = self
            .schedule
            .iter()
            .zip(self.discounted(r))
            .map(|(days, dcf)| {
                let t = days / DAYS_PER_YEAR;
                t * (t + 1.0) * dcf
            })
            .sum();
        weighted / (1.0 + r).powi(2) / self.payments_value(r)
    }

    /// Present value excluding the first amount.
    fn payments_value(&self, r: f64) -> f64 {
        self.present_value(r) - self.amounts[0]
    }
}

impl PartialEq for CashFlow {
    fn eq(&self, other: &Self) -> bool {
        self.times == other.times && self.amounts == other.amounts
    }
}

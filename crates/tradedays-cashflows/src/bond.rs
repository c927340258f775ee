//! Plain fixed-coupon bonds.
//!
//! A [`Bond`] turns a start date, maturity, coupon rate and payment frequency
//! into a dated [`CashFlow`]: the purchase price paid on the start date, a
//! coupon every `12 / frequency` months and the redemption of 100 with the
//! final coupon. Every payment date is rolled onto a business day of the
//! bond's holiday profile with its business day convention.

use std::fmt;
use std::sync::Arc;

use tradedays_core::calendars::BusinessDayConvention;
use tradedays_core::{BusinessCalendar, Date, HolidayProfile, Market};
use uuid::Uuid;

use crate::cashflow::{CashFlow, TimeAxis};
use crate::error::{CashFlowError, CashFlowResult};

/// Redemption amount per 100 face.
const FACE: f64 = 100.0;

/// A fixed-coupon bond and its cash flow.
#[derive(Debug, Clone)]
pub struct Bond {
    id: Uuid,
    description: String,
    start: Date,
    maturity: Date,
    coupon_rate: f64,
    frequency: u32,
    price: f64,
    convention: BusinessDayConvention,
    profile: Arc<dyn HolidayProfile>,
    payment_dates: Vec<Date>,
    cashflow: CashFlow,
}

impl Bond {
    /// Returns a builder for a bond.
    #[must_use]
    pub fn builder() -> BondSpec {
        BondSpec::default()
    }

    /// Unique identifier assigned at construction.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Short description: maturity as `dd/mm/yy` followed by the coupon rate.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unadjusted start date.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Unadjusted maturity date.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Annual coupon rate as a decimal (0.05 for 5%).
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Coupon payments per year.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Purchase price per 100 face.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Convention used to roll payment dates.
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Holiday profile payment dates are rolled against.
    pub fn profile(&self) -> &Arc<dyn HolidayProfile> {
        &self.profile
    }

    /// Adjusted payment dates, starting with the purchase date.
    pub fn payment_dates(&self) -> &[Date] {
        &self.payment_dates
    }

    /// Coupon amount per period per 100 face.
    pub fn coupon_amount(&self) -> f64 {
        self.coupon_rate * FACE / f64::from(self.frequency)
    }

    /// The bond's cash flow.
    pub fn cashflow(&self) -> &CashFlow {
        &self.cashflow
    }

    /// Yield to maturity: the internal rate of return of the cash flow.
    pub fn yield_to_maturity(&self) -> CashFlowResult<f64> {
        self.cashflow.irr()
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bond descriptor:  {}", self.description)?;
        writeln!(f, "id:               {}", self.id)?;
        writeln!(f, "start date:       {}", self.start)?;
        writeln!(f, "maturity date:    {}", self.maturity)?;
        writeln!(f, "price:            {}", self.price)?;
        writeln!(f, "coupon:           {}", self.coupon_rate)?;
        writeln!(f, "coupon frequency: {}", self.frequency)?;
        write!(f, "calendar:         {}", self.profile.name())
    }
}

/// Builder for [`Bond`].
///
/// Start, maturity, coupon rate and frequency are required. The price
/// defaults to 100, the convention to following and the profile to NYSE.
#[derive(Debug, Clone, Default)]
pub struct BondSpec {
    start: Option<Date>,
    maturity: Option<Date>,
    coupon_rate: Option<f64>,
    frequency: Option<u32>,
    price: Option<f64>,
    convention: Option<BusinessDayConvention>,
    profile: Option<Arc<dyn HolidayProfile>>,
}

impl BondSpec {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start (purchase) date.
    #[must_use]
    pub fn start(mut self, date: Date) -> Self {
        self.start = Some(date);
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity(mut self, date: Date) -> Self {
        self.maturity = Some(date);
        self
    }

    /// Sets the annual coupon rate as a decimal.
    #[must_use]
    pub fn coupon_rate(mut self, rate: f64) -> Self {
        self.coupon_rate = Some(rate);
        self
    }

    /// Sets the number of coupons per year. Must divide 12.
    #[must_use]
    pub fn frequency(mut self, per_year: u32) -> Self {
        self.frequency = Some(per_year);
        self
    }

    /// Sets the purchase price per 100 face.
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the business day convention.
    #[must_use]
    pub fn convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    /// Sets the holiday profile.
    #[must_use]
    pub fn profile(mut self, profile: Arc<dyn HolidayProfile>) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Sets the holiday profile from a market.
    #[must_use]
    pub fn market(self, market: Market) -> Self {
        self.profile(market.profile())
    }

    /// Builds the bond and generates its cash flow.
    ///
    /// # Errors
    ///
    /// Returns `CashFlowError::MissingField` if a required field is unset and
    /// `CashFlowError::InvalidInput` if the maturity is not after the start,
    /// the frequency does not divide 12, or the coupon or price is invalid.
    pub fn build(self) -> CashFlowResult<Bond> {
        let start = self.start.ok_or_else(|| CashFlowError::missing_field("start"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| CashFlowError::missing_field("maturity"))?;
        let coupon_rate = self
            .coupon_rate
            .ok_or_else(|| CashFlowError::missing_field("coupon_rate"))?;
        let frequency = self
            .frequency
            .ok_or_else(|| CashFlowError::missing_field("frequency"))?;

        if maturity <= start {
            return Err(CashFlowError::invalid_input("maturity must be after start"));
        }
        if frequency == 0 || 12 % frequency != 0 {
            return Err(CashFlowError::invalid_input(format!(
                "frequency {frequency} does not divide 12"
            )));
        }
        if !coupon_rate.is_finite() || coupon_rate < 0.0 {
            return Err(CashFlowError::invalid_input("coupon rate must be non-negative"));
        }
        let price = self.price.unwrap_or(FACE);
        if !price.is_finite() || price <= 0.0 {
            return Err(CashFlowError::invalid_input("price must be positive"));
        }

        let convention = self.convention.unwrap_or_default();
        let profile = self.profile.unwrap_or_else(|| Market::default().profile());

        let step = (12 / frequency) as i32;
        let mut payment_dates = Vec::new();
        let mut periods = 0;
        loop {
            let date = start.add_months(periods * step)?;
            if date > maturity {
                break;
            }
            payment_dates.push(profile.adjust(date, convention));
            periods += 1;
        }

        let coupon = coupon_rate * FACE / f64::from(frequency);
        let mut amounts = vec![coupon; payment_dates.len()];
        amounts[0] = -price;
        if let Some(last) = amounts.last_mut() {
            *last += FACE;
        }

        let description = format!(
            "{}_{}",
            maturity.as_naive_date().format("%d/%m/%y"),
            coupon_rate
        );
        log::info!("Generating bond {description}");

        let cashflow = CashFlow::new(TimeAxis::Dates(payment_dates.clone()), amounts)?;

        Ok(Bond {
            id: Uuid::new_v4(),
            description,
            start,
            maturity,
            coupon_rate,
            frequency,
            price,
            convention,
            profile,
            payment_dates,
            cashflow,
        })
    }
}

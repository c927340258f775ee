//! # Tradedays Cash Flows
//!
//! Discounting analytics for dated payment streams.
//!
//! - **Solvers**: bracketing root finder used for the internal rate of return
//! - **CashFlow**: present value, IRR, duration and convexity of a payment stream
//! - **Annuities**: closed-form perpetuity and annuity present values
//! - **Bond**: coupon schedules rolled onto business days of a holiday profile
//!
//! ## Example
//!
//! ```rust
//! use tradedays_cashflows::prelude::*;
//!
//! let cf = CashFlow::new(TimeAxis::Annual(vec![1.0, 2.0, 3.0]), vec![-100.0, 10.0, 110.0]).unwrap();
//! let irr = cf.irr().unwrap();
//! assert!((irr - 0.1).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod annuity;
pub mod bond;
pub mod cashflow;
pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuity::{annuity_pv, perpetuity_pv};
    pub use crate::bond::{Bond, BondSpec};
    pub use crate::cashflow::{CashFlow, CashFlowRow, TimeAxis, DAYS_PER_YEAR};
    pub use crate::error::{CashFlowError, CashFlowResult};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};
}

pub use bond::{Bond, BondSpec};
pub use cashflow::{CashFlow, TimeAxis};
pub use error::{CashFlowError, CashFlowResult};

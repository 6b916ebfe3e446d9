//! TVM Engine - time-value-of-money calculations over abstract, equally spaced periods
//!
//! This library provides:
//! - Discounting primitives (present/future value, annuities, perpetuities, rate inverses)
//! - Return metrics (holding period return, arithmetic and geometric means)
//! - Payback period scanners (simple and discounted)
//! - Internal rate of return via a bounded Newton-Raphson state machine
//! - CSV loading and parallel batch evaluation of cash-flow series
//!
//! Every calculation is a pure function of its inputs. Undefined results are
//! reported as `None` or a [`TvmError`] rather than a numeric sentinel; the
//! [`compat`] module keeps the sentinel-returning variants.

pub mod batch;
pub mod cashflows;
#[cfg(feature = "compat")]
pub mod compat;
pub mod config;
pub mod discounting;
pub mod error;
pub mod irr;
pub mod payback;
pub mod returns;

// Re-export commonly used types
pub use batch::{BatchRunner, SeriesReport};
pub use cashflows::CashFlowSeries;
pub use config::EngineConfig;
pub use discounting::*;
pub use error::{TvmError, TvmResult};
pub use irr::{internal_rate_of_return, IrrOutcome, IrrSolver, SolverConfig};
pub use payback::{cumulative_cash_flows, discounted_payback_period, payback_period};
pub use returns::{
    average_return, average_return_annualized, geometric_mean_return,
    geometric_mean_return_annualized, holding_period_return, holding_period_return_annualized,
    holding_period_return_annualized_percentage, holding_period_return_percentage,
};

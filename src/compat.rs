//! Legacy sentinel-returning API
//!
//! Reproduces the behavior older callers depend on, where undefined or failed
//! computations come back as plain numbers:
//! - `0.0` for zero-rate annuity FV, undefined perpetuities and failed IRR solves
//! - `-1` for a payback period that is never reached
//! - ordinary annuities discounted from exponent 0, and growth rates ignored by
//!   the growing-annuity sums
//!
//! New code should use the `Option`/`Result` API at the crate root. Enabled by
//! the `compat` cargo feature (on by default).

use crate::discounting::{self, perpetuity};
use crate::irr;
use crate::payback;

/// Sentinel returned by the payback scanners when the investment is not recovered
pub const PAYBACK_NOT_REACHED: i64 = -1;

/// Future value of an annuity, `0.0` when `rate == 0`
pub fn future_value_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return 0.0;
    }
    discounting::future_value_annuity(payment, rate, periods)
}

/// `sum(cf[i] / (1+r)^i)`: same exponents as the annuity due
pub fn present_value_annuity(rate: f64, cash_flows: &[f64]) -> f64 {
    discounting::present_value_annuity_due(rate, cash_flows)
}

pub fn present_value_annuity_due(rate: f64, cash_flows: &[f64]) -> f64 {
    discounting::present_value_annuity_due(rate, cash_flows)
}

/// `sum(cf[i] / (1+r)^(i+1))`; `_growth` is accepted and ignored
pub fn present_value_growing_annuity(rate: f64, _growth: f64, cash_flows: &[f64]) -> f64 {
    discounting::present_value_annuity(rate, cash_flows)
}

/// `sum(cf[i] / (1+r)^i)`; `_growth` is accepted and ignored
pub fn present_value_growing_annuity_due(rate: f64, _growth: f64, cash_flows: &[f64]) -> f64 {
    discounting::present_value_annuity_due(rate, cash_flows)
}

pub fn present_value_perpetuity(rate: f64, cash_flow: f64) -> f64 {
    perpetuity::present_value_perpetuity(rate, cash_flow).unwrap_or(0.0)
}

pub fn present_value_perpetuity_due(rate: f64, cash_flow: f64) -> f64 {
    perpetuity::present_value_perpetuity_due(rate, cash_flow).unwrap_or(0.0)
}

pub fn present_value_growing_perpetuity(rate: f64, growth: f64, cash_flow: f64) -> f64 {
    perpetuity::present_value_growing_perpetuity(rate, growth, cash_flow).unwrap_or(0.0)
}

pub fn present_value_growing_perpetuity_due(rate: f64, growth: f64, cash_flow: f64) -> f64 {
    perpetuity::present_value_growing_perpetuity_due(rate, growth, cash_flow).unwrap_or(0.0)
}

/// `C / PV`, not the exact inverse of the perpetuity-due value
pub fn interest_rate_perpetuity_due(present_value: f64, cash_flow: f64) -> f64 {
    cash_flow / present_value
}

/// `C / PV + g`, not the exact inverse of the growing-perpetuity-due value
pub fn interest_rate_growing_perpetuity_due(
    present_value: f64,
    cash_flow: f64,
    growth: f64,
) -> f64 {
    cash_flow / present_value + growth
}

pub fn payback_period(initial_investment: f64, cash_inflows: &[f64]) -> i64 {
    payback::payback_period(initial_investment, cash_inflows)
        .map_or(PAYBACK_NOT_REACHED, i64::from)
}

pub fn discounted_payback_period(
    initial_investment: f64,
    cash_inflows: &[f64],
    discount_rate: f64,
) -> i64 {
    payback::discounted_payback_period(initial_investment, cash_inflows, discount_rate)
        .map_or(PAYBACK_NOT_REACHED, i64::from)
}

/// IRR with default settings; any failure collapses to `0.0`
pub fn internal_rate_of_return(initial_investment: f64, cash_flows: &[f64]) -> f64 {
    irr::IrrSolver::default()
        .solve(initial_investment, cash_flows)
        .rate()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_guards() {
        assert_eq!(future_value_annuity(100.0, 0.0, 5), 0.0);
        assert_eq!(present_value_perpetuity(0.0, 100.0), 0.0);
        assert_eq!(present_value_perpetuity_due(0.0, 100.0), 0.0);
        assert_eq!(present_value_growing_perpetuity(0.1, 0.1, 100.0), 0.0);
        assert_eq!(present_value_growing_perpetuity_due(0.05, 0.1, 100.0), 0.0);
    }

    #[test]
    fn test_defined_values_match_canonical() {
        assert_relative_eq!(future_value_annuity(100.0, 0.1, 2), 210.0, epsilon = 1e-10);
        assert_relative_eq!(present_value_perpetuity(0.1, 100.0), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annuity_exponents() {
        let flows = [100.0, 100.0];
        // Ordinary and due agree here
        assert_relative_eq!(
            present_value_annuity(0.1, &flows),
            100.0 + 100.0 / 1.1,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            present_value_annuity(0.1, &flows),
            present_value_annuity_due(0.1, &flows)
        );
    }

    #[test]
    fn test_growth_is_ignored() {
        let flows = [100.0, 100.0];
        assert_relative_eq!(
            present_value_growing_annuity(0.1, 0.5, &flows),
            present_value_growing_annuity(0.1, 0.0, &flows)
        );
        assert_relative_eq!(
            present_value_growing_annuity_due(0.1, 0.5, &flows),
            100.0 + 100.0 / 1.1,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_payback_sentinel() {
        assert_eq!(payback_period(1000.0, &[100.0; 5]), -1);
        assert_eq!(discounted_payback_period(1000.0, &[100.0; 5], 0.1), -1);
        assert_eq!(payback_period(1000.0, &[500.0; 5]), 2);
    }

    #[test]
    fn test_irr_collapses_failures_to_zero() {
        assert_eq!(internal_rate_of_return(1000.0, &[]), 0.0);
        let rate = internal_rate_of_return(1000.0, &[400.0, 400.0, 400.0]);
        assert!((rate - 0.097).abs() < 0.001);
    }

    #[test]
    fn test_legacy_rate_inverses() {
        assert_relative_eq!(interest_rate_perpetuity_due(100.0, 100.0), 1.0);
        assert_relative_eq!(
            interest_rate_growing_perpetuity_due(100.0, 100.0, 0.1),
            1.1,
            epsilon = 1e-12
        );
    }
}

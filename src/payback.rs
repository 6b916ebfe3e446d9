//! Payback period scanners
//!
//! A single forward pass accumulates `-initial_investment` plus each inflow and
//! stops at the first period (1-based) where the running total is non-negative.
//! `None` means the investment is not recovered within the given inflows.

/// Running totals after each period, optionally discounting inflow `i` by `(1+rate)^(i+1)`
pub fn cumulative_cash_flows(
    initial_investment: f64,
    cash_inflows: &[f64],
    discount_rate: Option<f64>,
) -> Vec<f64> {
    let mut cumulative = -initial_investment;

    cash_inflows
        .iter()
        .enumerate()
        .map(|(i, &inflow)| {
            cumulative += discounted_inflow(inflow, i, discount_rate);
            cumulative
        })
        .collect()
}

fn discounted_inflow(inflow: f64, index: usize, discount_rate: Option<f64>) -> f64 {
    match discount_rate {
        Some(rate) => inflow / (1.0 + rate).powf((index + 1) as f64),
        None => inflow,
    }
}

fn scan(initial_investment: f64, cash_inflows: &[f64], discount_rate: Option<f64>) -> Option<u32> {
    let mut cumulative = -initial_investment;

    for (i, &inflow) in cash_inflows.iter().enumerate() {
        cumulative += discounted_inflow(inflow, i, discount_rate);

        if cumulative >= 0.0 {
            return Some(i as u32 + 1);
        }
    }

    None
}

/// Simple payback period: first period at which cumulative inflows cover the investment
pub fn payback_period(initial_investment: f64, cash_inflows: &[f64]) -> Option<u32> {
    scan(initial_investment, cash_inflows, None)
}

/// Discounted payback period: as `payback_period`, with inflow `i` discounted `i + 1` periods
pub fn discounted_payback_period(
    initial_investment: f64,
    cash_inflows: &[f64],
    discount_rate: f64,
) -> Option<u32> {
    scan(initial_investment, cash_inflows, Some(discount_rate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_not_recovered() {
        let inflows = [100.0; 5];
        assert_eq!(payback_period(1000.0, &inflows), None);
        assert_eq!(discounted_payback_period(1000.0, &inflows, 0.1), None);
    }

    #[test]
    fn test_recovered_exactly() {
        // Cumulative hits zero at period 4, which counts as recovered
        let inflows = [250.0, 250.0, 250.0, 250.0, 250.0];
        assert_eq!(payback_period(1000.0, &inflows), Some(4));
    }

    #[test]
    fn test_discounting_delays_payback() {
        let inflows = [300.0, 300.0, 300.0, 300.0, 300.0, 300.0];
        assert_eq!(payback_period(1000.0, &inflows), Some(4));
        // 300/1.1 + 300/1.21 + ... crosses 1000 in period 5
        assert_eq!(discounted_payback_period(1000.0, &inflows, 0.1), Some(5));
    }

    #[test]
    fn test_zero_rate_matches_simple() {
        let inflows = [400.0, 100.0, 700.0];
        assert_eq!(
            discounted_payback_period(1000.0, &inflows, 0.0),
            payback_period(1000.0, &inflows)
        );
    }

    #[test]
    fn test_empty_inflows() {
        assert_eq!(payback_period(1000.0, &[]), None);
        assert_eq!(payback_period(0.0, &[]), None);
    }

    #[test]
    fn test_early_exit_ignores_later_outflows() {
        let inflows = [600.0, 600.0, -5000.0];
        assert_eq!(payback_period(1000.0, &inflows), Some(2));
    }

    #[test]
    fn test_cumulative_profile() {
        let profile = cumulative_cash_flows(1000.0, &[100.0, 200.0], None);
        assert_eq!(profile, vec![-900.0, -700.0]);

        let discounted = cumulative_cash_flows(1000.0, &[110.0, 121.0], Some(0.1));
        assert_relative_eq!(discounted[0], -900.0, epsilon = 1e-9);
        assert_relative_eq!(discounted[1], -800.0, epsilon = 1e-9);
    }
}

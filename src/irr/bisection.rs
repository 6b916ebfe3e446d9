//! Bracketing fallback for IRR when Newton-Raphson fails

use super::state::npv_and_derivative;

/// Lowest periodic rate searched (-99%)
pub const DEFAULT_LOWER_BOUND: f64 = -0.99;

/// Highest periodic rate searched (1000%)
pub const DEFAULT_UPPER_BOUND: f64 = 10.0;

/// Halvings allowed; the default bracket shrinks below 1e-12 well within this
pub const DEFAULT_MAX_BISECTIONS: u32 = 200;

fn npv_at_rate(initial_investment: f64, cash_flows: &[f64], rate: f64) -> f64 {
    npv_and_derivative(initial_investment, cash_flows, rate).0
}

/// Find the IRR by bisection on `[low, high]`
///
/// Returns `None` when NPV has the same sign at both ends of the bracket or
/// the interval does not shrink below `tolerance` within `max_iterations`.
pub fn bisect_irr(
    initial_investment: f64,
    cash_flows: &[f64],
    mut low: f64,
    mut high: f64,
    tolerance: f64,
    max_iterations: u32,
) -> Option<f64> {
    let mut npv_low = npv_at_rate(initial_investment, cash_flows, low);
    let npv_high = npv_at_rate(initial_investment, cash_flows, high);

    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(initial_investment, cash_flows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_period_root() {
        let r = bisect_irr(1000.0, &[1100.0], DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND, 1e-10, 1000)
            .unwrap();
        assert!((r - 0.10).abs() < 1e-8, "got {}", r);
    }

    #[test]
    fn test_negative_root() {
        let r = bisect_irr(
            1000.0,
            &[100.0; 5],
            DEFAULT_LOWER_BOUND,
            DEFAULT_UPPER_BOUND,
            1e-10,
            1000,
        )
        .unwrap();
        let pv: f64 = (1..=5).map(|t| 100.0 / (1.0 + r).powi(t)).sum();
        assert!((pv - 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_sign_change() {
        // All flows positive and no investment: NPV never crosses zero
        assert_eq!(bisect_irr(-100.0, &[50.0, 50.0], -0.5, 1.0, 1e-10, 1000), None);
    }
}

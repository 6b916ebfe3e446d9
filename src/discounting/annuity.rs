//! Present value of finite cash-flow streams (annuities)
//!
//! Ordinary annuities pay at the end of each period, so flow `i` is discounted
//! `i + 1` periods. Annuities due pay at the start, so flow `i` is discounted
//! `i` periods and the due value is the ordinary value times `(1 + rate)`.
//!
//! Growing variants take the *base* flows and compound them by `(1 + growth)^i`
//! before discounting.

/// Shared summation: `sum(cf[i] * (1+g)^i / (1+r)^(i + offset))`
fn discounted_sum(rate: f64, growth: f64, cash_flows: &[f64], offset: usize) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| {
            let grown = cf * (1.0 + growth).powf(i as f64);
            grown / (1.0 + rate).powf((i + offset) as f64)
        })
        .sum()
}

/// Present value of an ordinary annuity (payments at period end)
pub fn present_value_annuity(rate: f64, cash_flows: &[f64]) -> f64 {
    discounted_sum(rate, 0.0, cash_flows, 1)
}

/// Present value of an annuity due (payments at period start)
pub fn present_value_annuity_due(rate: f64, cash_flows: &[f64]) -> f64 {
    discounted_sum(rate, 0.0, cash_flows, 0)
}

/// Present value of a growing ordinary annuity
///
/// `cash_flows[i]` is grown by `(1 + growth)^i`, then discounted `i + 1` periods.
pub fn present_value_growing_annuity(rate: f64, growth: f64, cash_flows: &[f64]) -> f64 {
    discounted_sum(rate, growth, cash_flows, 1)
}

/// Present value of a growing annuity due
pub fn present_value_growing_annuity_due(rate: f64, growth: f64, cash_flows: &[f64]) -> f64 {
    discounted_sum(rate, growth, cash_flows, 0)
}

/// Closed-form PV of a level payment growing at `growth` for `periods` periods
///
/// # Formula
/// ```text
/// PV = P / (r - g) * (1 - ((1 + g) / (1 + r))^n)      r != g
/// PV = P * n / (1 + r)                                 r == g
/// ```
pub fn present_value_level_growing_annuity(
    payment: f64,
    rate: f64,
    growth: f64,
    periods: u32,
) -> f64 {
    if rate == growth {
        return payment * periods as f64 / (1.0 + rate);
    }

    let ratio = (1.0 + growth) / (1.0 + rate);
    payment / (rate - growth) * (1.0 - ratio.powf(f64::from(periods)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ordinary_annuity() {
        // 100/1.1 + 100/1.21
        let pv = present_value_annuity(0.1, &[100.0, 100.0]);
        assert_relative_eq!(pv, 173.553719, epsilon = 1e-6);
    }

    #[test]
    fn test_annuity_due_is_one_period_earlier() {
        let flows = [250.0, 250.0, 250.0, 250.0];
        let ordinary = present_value_annuity(0.06, &flows);
        let due = present_value_annuity_due(0.06, &flows);
        assert_relative_eq!(due, ordinary * 1.06, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_flows() {
        assert_eq!(present_value_annuity(0.1, &[]), 0.0);
        assert_eq!(present_value_growing_annuity_due(0.1, 0.02, &[]), 0.0);
    }

    #[test]
    fn test_growth_is_applied() {
        // 100/1.1 + 100*1.05/1.21
        let pv = present_value_growing_annuity(0.1, 0.05, &[100.0, 100.0]);
        assert_relative_eq!(pv, 100.0 / 1.1 + 105.0 / 1.21, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_growth_matches_level_annuity() {
        let flows = [80.0, 90.0, 100.0];
        assert_relative_eq!(
            present_value_growing_annuity(0.07, 0.0, &flows),
            present_value_annuity(0.07, &flows),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            present_value_growing_annuity_due(0.07, 0.0, &flows),
            present_value_annuity_due(0.07, &flows),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_closed_form_matches_summation() {
        let flows = vec![1_000.0; 12];
        let summed = present_value_growing_annuity(0.08, 0.03, &flows);
        let closed = present_value_level_growing_annuity(1_000.0, 0.08, 0.03, 12);
        assert_relative_eq!(summed, closed, epsilon = 1e-8);
    }

    #[test]
    fn test_closed_form_rate_equals_growth() {
        let flows = vec![500.0; 10];
        let summed = present_value_growing_annuity(0.05, 0.05, &flows);
        let closed = present_value_level_growing_annuity(500.0, 0.05, 0.05, 10);
        assert_relative_eq!(closed, 500.0 * 10.0 / 1.05, epsilon = 1e-9);
        assert_relative_eq!(summed, closed, epsilon = 1e-8);
    }

    #[test]
    fn test_closed_form_long_horizon_tends_to_perpetuity() {
        let closed = present_value_level_growing_annuity(1_000.0, 0.08, 0.03, 2_147_483_648);
        assert_relative_eq!(closed, 1_000.0 / 0.05, epsilon = 1e-6);
    }
}

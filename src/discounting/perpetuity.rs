//! Perpetuities (infinite level or growing streams)
//!
//! Every function here returns `None` when the formula is undefined rather than
//! a numeric sentinel: `rate == 0` for level perpetuities, `rate <= growth` for
//! growing ones.

/// Present value of a perpetuity paying `cash_flow` from the end of period 1
///
/// `PV = C / r`
pub fn present_value_perpetuity(rate: f64, cash_flow: f64) -> Option<f64> {
    if rate == 0.0 {
        return None;
    }

    Some(cash_flow / rate)
}

/// Perpetuity value discounted one further period
///
/// `PV = (C / r) * 1 / (1 + r)`
pub fn present_value_perpetuity_due(rate: f64, cash_flow: f64) -> Option<f64> {
    present_value_perpetuity(rate, cash_flow).map(|pv| pv * (1.0 / (1.0 + rate)))
}

/// Present value of a perpetuity whose first flow is `cash_flow`, growing at `growth`
///
/// `PV = C / (r - g)`, requires `r > g`.
pub fn present_value_growing_perpetuity(rate: f64, growth: f64, cash_flow: f64) -> Option<f64> {
    if rate <= growth {
        return None;
    }

    Some(cash_flow / (rate - growth))
}

/// Growing perpetuity value discounted one further period
///
/// `PV = C / (r - g) * 1 / (1 + r)`, requires `r > g`.
pub fn present_value_growing_perpetuity_due(
    rate: f64,
    growth: f64,
    cash_flow: f64,
) -> Option<f64> {
    present_value_growing_perpetuity(rate, growth, cash_flow).map(|pv| pv * (1.0 / (1.0 + rate)))
}

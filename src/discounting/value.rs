//! Single-amount present/future value conversions and NPV

/// Discount factor for a single period index: `(1 + rate)^-period`
pub fn discount_factor(rate: f64, period: u32) -> f64 {
    1.0 / (1.0 + rate).powf(f64::from(period))
}

/// Future value of a single amount: `pv * (1 + rate)^periods`
///
/// `periods == 0` returns `present_value` unchanged.
pub fn future_value(present_value: f64, rate: f64, periods: u32) -> f64 {
    present_value * (1.0 + rate).powf(f64::from(periods))
}

/// Present value of a single future amount: `fv / (1 + rate)^periods`
///
/// Not guarded: `rate == -1` divides by a zero base and yields `inf`/`NaN`.
pub fn present_value(future_value: f64, rate: f64, periods: u32) -> f64 {
    future_value / (1.0 + rate).powf(f64::from(periods))
}

/// Future value of an ordinary annuity paying `payment` for `periods` periods
///
/// # Formula
/// ```text
/// FV = C * ((1 + r)^n - 1) / r
/// ```
///
/// At `rate == 0` the closed form is 0/0; the limit `payment * periods` is
/// returned instead.
pub fn future_value_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return payment * periods as f64;
    }

    payment * (((1.0 + rate).powf(f64::from(periods)) - 1.0) / rate)
}

/// Net present value of a cash-flow sequence, first flow undiscounted
///
/// `NPV = sum(cf[t] / (1 + r)^t)` for `t` in `0..len`. An empty sequence is 0.
pub fn net_present_value(rate: f64, cash_flows: &[f64]) -> f64 {
    let one_plus_r = 1.0 + rate;
    let mut discount = 1.0;
    let mut npv = 0.0;

    for (t, cf) in cash_flows.iter().enumerate() {
        if t > 0 {
            discount *= one_plus_r;
        }
        npv += cf / discount;
    }

    npv
}

//! Closed-form interest-rate inverses
//!
//! Each function solves its forward formula for the rate. None of them iterate;
//! degenerate input (`pv == 0`, `periods == 0`) propagates IEEE `inf`/`NaN`.

/// Rate that grows `present_value` into `future_value` over `periods`
///
/// `r = (FV / PV)^(1/n) - 1`
pub fn interest_rate(present_value: f64, future_value: f64, periods: u32) -> f64 {
    (future_value / present_value).powf(1.0 / periods as f64) - 1.0
}

/// Continuously compounded rate: `r = ln(FV / PV) / n`
pub fn interest_rate_continuous_compounding(
    present_value: f64,
    future_value: f64,
    periods: u32,
) -> f64 {
    (future_value / present_value).ln() / periods as f64
}

/// Inverse of `present_value_perpetuity`: `r = C / PV`
pub fn interest_rate_perpetuity(present_value: f64, cash_flow: f64) -> f64 {
    cash_flow / present_value
}

/// Inverse of `present_value_perpetuity_due`
///
/// Solves `r * (1 + r) = C / PV` for its root above -1/2.
pub fn interest_rate_perpetuity_due(present_value: f64, cash_flow: f64) -> f64 {
    let k = cash_flow / present_value;
    (-1.0 + (1.0 + 4.0 * k).sqrt()) / 2.0
}

/// Inverse of `present_value_growing_perpetuity`: `r = C / PV + g`
pub fn interest_rate_growing_perpetuity(present_value: f64, cash_flow: f64, growth: f64) -> f64 {
    cash_flow / present_value + growth
}

/// Inverse of `present_value_growing_perpetuity_due`
///
/// Solves `(r - g) * (1 + r) = C / PV`, taking the root with `r > g`.
pub fn interest_rate_growing_perpetuity_due(
    present_value: f64,
    cash_flow: f64,
    growth: f64,
) -> f64 {
    let k = cash_flow / present_value;
    let b = 1.0 - growth;
    (-b + (b * b + 4.0 * (growth + k)).sqrt()) / 2.0
}

/// Current yield of an annuity from a single payment: `r = C / PV`
///
/// This is the perpetuity limit; a finite-term annuity has no closed-form rate.
pub fn interest_rate_annuity(present_value: f64, cash_flow: f64) -> f64 {
    cash_flow / present_value
}

/// Current yield of an annuity due: `r = C / PV`
pub fn interest_rate_annuity_due(present_value: f64, cash_flow: f64) -> f64 {
    cash_flow / present_value
}

/// Current yield of a growing annuity: `r = C / PV + g`
pub fn interest_rate_growing_annuity(present_value: f64, cash_flow: f64, growth: f64) -> f64 {
    cash_flow / present_value + growth
}

/// Current yield of a growing annuity due: `r = C / PV + g`
pub fn interest_rate_growing_annuity_due(present_value: f64, cash_flow: f64, growth: f64) -> f64 {
    cash_flow / present_value + growth
}

/// Convert a periodic rate to an effective annual rate: `(1 + r)^m - 1`
pub fn annualize_periodic_rate(periodic_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + periodic_rate).powf(f64::from(periods_per_year)) - 1.0
}

/// Convert an effective annual rate to the equivalent periodic rate
pub fn periodic_from_annual_rate(annual_rate: f64, periods_per_year: u32) -> f64 {
    (1.0 + annual_rate).powf(1.0 / periods_per_year as f64) - 1.0
}

//! Return metrics over holding periods
//!
//! Single-period ratios are not guarded: an initial value of zero yields
//! `inf`/`NaN`, as does a holding period of zero years when annualizing.

use crate::error::{TvmError, TvmResult};

/// Holding period return: `(final - initial) / initial`
pub fn holding_period_return(initial_value: f64, final_value: f64) -> f64 {
    (final_value - initial_value) / initial_value
}

/// Holding period return as a percentage
pub fn holding_period_return_percentage(initial_value: f64, final_value: f64) -> f64 {
    holding_period_return(initial_value, final_value) * 100.0
}

/// Annualized holding period return: `(1 + HPR)^(1 / years) - 1`
pub fn holding_period_return_annualized(
    initial_value: f64,
    final_value: f64,
    holding_period_years: f64,
) -> f64 {
    let hpr = holding_period_return(initial_value, final_value);
    (1.0 + hpr).powf(1.0 / holding_period_years) - 1.0
}

/// Annualized holding period return as a percentage
pub fn holding_period_return_annualized_percentage(
    initial_value: f64,
    final_value: f64,
    holding_period_years: f64,
) -> f64 {
    holding_period_return_annualized(initial_value, final_value, holding_period_years) * 100.0
}

/// Geometric mean of a set of holding period returns
///
/// `exp(mean(ln(1 + r))) - 1`, or 0 for an empty set.
pub fn geometric_mean_return(holding_period_returns: &[f64]) -> f64 {
    if holding_period_returns.is_empty() {
        return 0.0;
    }

    let total_log: f64 = holding_period_returns.iter().map(|r| (1.0 + r).ln()).sum();
    (total_log / holding_period_returns.len() as f64).exp() - 1.0
}

/// Arithmetic mean of a set of holding period returns, or 0 for an empty set
pub fn average_return(holding_period_returns: &[f64]) -> f64 {
    if holding_period_returns.is_empty() {
        return 0.0;
    }

    holding_period_returns.iter().sum::<f64>() / holding_period_returns.len() as f64
}

/// Annualize each (initial, final, years) triple after checking the slices align
fn annualized_returns(
    initial_values: &[f64],
    final_values: &[f64],
    holding_periods: &[f64],
) -> TvmResult<Vec<f64>> {
    if initial_values.len() != final_values.len() || initial_values.len() != holding_periods.len()
    {
        return Err(TvmError::LengthMismatch {
            initial_values: initial_values.len(),
            final_values: final_values.len(),
            periods: holding_periods.len(),
        });
    }

    Ok(initial_values
        .iter()
        .zip(final_values)
        .zip(holding_periods)
        .map(|((&initial, &fin), &years)| holding_period_return_annualized(initial, fin, years))
        .collect())
}

/// Geometric mean of annualized returns across several holdings
///
/// The three slices are index-aligned and must have equal length.
pub fn geometric_mean_return_annualized(
    initial_values: &[f64],
    final_values: &[f64],
    holding_periods: &[f64],
) -> TvmResult<f64> {
    let annualized = annualized_returns(initial_values, final_values, holding_periods)?;
    Ok(geometric_mean_return(&annualized))
}

/// Arithmetic mean of annualized returns across several holdings
pub fn average_return_annualized(
    initial_values: &[f64],
    final_values: &[f64],
    holding_periods: &[f64],
) -> TvmResult<f64> {
    let annualized = annualized_returns(initial_values, final_values, holding_periods)?;
    Ok(average_return(&annualized))
}

//! Error types for the TVM engine

use thiserror::Error;

/// Result alias used throughout the crate
pub type TvmResult<T> = Result<T, TvmError>;

/// Errors reported by the engine
///
/// Degenerate numeric input that the formulas guard (zero rate in a perpetuity,
/// rate not above growth) is not an error: those functions return `None`.
/// Unguarded input (zero initial value, rate of -1) propagates IEEE `inf`/`NaN`.
#[derive(Debug, Error)]
pub enum TvmError {
    /// Parallel input sequences have different lengths
    #[error("Length mismatch: {initial_values} initial, {final_values} final, {periods} periods")]
    LengthMismatch {
        initial_values: usize,
        final_values: usize,
        periods: usize,
    },

    /// IRR iteration hit its cap without meeting the tolerance
    #[error("IRR did not converge after {iterations} iterations (last guess: {last_guess})")]
    DidNotConverge { iterations: u32, last_guess: f64 },

    /// NPV derivative was zero or non-finite, so the Newton step is undefined
    #[error("IRR derivative is zero or non-finite at iteration {iteration} (guess: {guess})")]
    ZeroDerivative { iteration: u32, guess: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A CSV cell could not be parsed as a number
    #[error("Parse error on line {line}, field '{field}': {value:?}")]
    Parse {
        line: u64,
        field: String,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

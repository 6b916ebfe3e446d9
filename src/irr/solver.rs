//! Newton-Raphson IRR solver

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::bisection::{
    bisect_irr, DEFAULT_LOWER_BOUND, DEFAULT_MAX_BISECTIONS, DEFAULT_UPPER_BOUND,
};
use super::state::{IrrState, Step};
use crate::error::{TvmError, TvmResult};

/// Starting rate for the Newton iteration (10%)
pub const DEFAULT_INITIAL_GUESS: f64 = 0.1;

/// Convergence threshold on the step size between successive guesses
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Iteration cap
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Solver settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Starting rate for the iteration
    pub initial_guess: f64,

    /// Stop once `|guess - previous_guess|` falls below this
    pub tolerance: f64,

    /// Maximum Newton steps before giving up
    pub max_iterations: u32,

    /// Retry with bisection over [-99%, 1000%] when Newton does not converge
    pub bisection_fallback: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_guess: DEFAULT_INITIAL_GUESS,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bisection_fallback: false,
        }
    }
}

impl SolverConfig {
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_bisection_fallback(mut self, enabled: bool) -> Self {
        self.bisection_fallback = enabled;
        self
    }
}

/// Terminal state of a solve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IrrOutcome {
    /// Found a rate; `iterations` is the number of Newton steps (0 if bisection found it)
    Converged { rate: f64, iterations: u32 },

    /// Hit the iteration cap, or the guess overflowed
    NotConverged { last_guess: f64, iterations: u32 },

    /// The NPV derivative was zero or non-finite, so the Newton step is undefined
    DivisionByZero { guess: f64, iteration: u32 },
}

impl IrrOutcome {
    /// The converged rate, if any
    pub fn rate(&self) -> Option<f64> {
        match self {
            IrrOutcome::Converged { rate, .. } => Some(*rate),
            _ => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, IrrOutcome::Converged { .. })
    }

    /// Convert to a `Result`, mapping failures onto `TvmError`
    pub fn into_result(self) -> TvmResult<f64> {
        match self {
            IrrOutcome::Converged { rate, .. } => Ok(rate),
            IrrOutcome::NotConverged {
                last_guess,
                iterations,
            } => Err(TvmError::DidNotConverge {
                iterations,
                last_guess,
            }),
            IrrOutcome::DivisionByZero { guess, iteration } => {
                Err(TvmError::ZeroDerivative { iteration, guess })
            }
        }
    }
}

/// Internal rate of return solver
///
/// Finds `r` such that `-initial + sum(cf[j] / (1+r)^(j+1)) = 0` by iterating
/// an [`IrrState`] until the step size drops below the tolerance or the
/// iteration cap is reached.
#[derive(Debug, Clone, Default)]
pub struct IrrSolver {
    config: SolverConfig,
}

impl IrrSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for the IRR of `initial_investment` (an outflow) followed by `cash_flows`
    pub fn solve(&self, initial_investment: f64, cash_flows: &[f64]) -> IrrOutcome {
        let outcome = self.newton(initial_investment, cash_flows);

        if outcome.is_converged() || !self.config.bisection_fallback {
            return outcome;
        }

        debug!("Newton-Raphson failed ({:?}), falling back to bisection", outcome);
        match bisect_irr(
            initial_investment,
            cash_flows,
            DEFAULT_LOWER_BOUND,
            DEFAULT_UPPER_BOUND,
            self.config.tolerance,
            DEFAULT_MAX_BISECTIONS,
        ) {
            Some(rate) => IrrOutcome::Converged {
                rate,
                iterations: 0,
            },
            None => outcome,
        }
    }

    fn newton(&self, initial_investment: f64, cash_flows: &[f64]) -> IrrOutcome {
        let mut state = IrrState::new(self.config.initial_guess);

        while state.iteration < self.config.max_iterations {
            let step = state.step(initial_investment, cash_flows, self.config.tolerance);
            trace!("IRR iteration {}: guess = {}", state.iteration, state.guess);

            match step {
                Step::Continue => {}
                Step::Converged => {
                    debug!(
                        "IRR converged to {} after {} iterations",
                        state.guess, state.iteration
                    );
                    return IrrOutcome::Converged {
                        rate: state.guess,
                        iterations: state.iteration,
                    };
                }
                Step::ZeroDerivative => {
                    warn!(
                        "IRR derivative is zero or non-finite at guess {} (iteration {})",
                        state.guess, state.iteration
                    );
                    return IrrOutcome::DivisionByZero {
                        guess: state.guess,
                        iteration: state.iteration,
                    };
                }
                Step::Diverged => {
                    warn!("IRR diverged after {} iterations", state.iteration);
                    return IrrOutcome::NotConverged {
                        last_guess: state.guess,
                        iterations: state.iteration,
                    };
                }
            }
        }

        warn!(
            "IRR did not converge within {} iterations (last guess {})",
            self.config.max_iterations, state.guess
        );
        IrrOutcome::NotConverged {
            last_guess: state.guess,
            iterations: state.iteration,
        }
    }
}

/// IRR with the default solver settings (guess 10%, tolerance 1e-6, 1000 iterations)
pub fn internal_rate_of_return(initial_investment: f64, cash_flows: &[f64]) -> TvmResult<f64> {
    IrrSolver::default()
        .solve(initial_investment, cash_flows)
        .into_result()
}

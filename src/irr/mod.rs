//! Internal Rate of Return (IRR)
//!
//! Newton-Raphson on the NPV of an initial outlay followed by end-of-period
//! inflows. The iteration is an explicit state machine ([`IrrState`]) bounded by
//! an iteration cap, and every solve ends in a tagged [`IrrOutcome`]: a failed
//! solve is never reported as a rate of zero.
//!
//! # Example
//!
//! ```rust
//! use tvm_engine::irr::{IrrSolver, SolverConfig};
//!
//! let solver = IrrSolver::new(SolverConfig::default());
//! let outcome = solver.solve(1000.0, &[400.0, 400.0, 400.0]);
//! let rate = outcome.rate().unwrap();
//! assert!((rate - 0.097).abs() < 0.001);
//! ```

pub mod bisection;
mod solver;
mod state;

pub use bisection::bisect_irr;
pub use solver::{
    internal_rate_of_return, IrrOutcome, IrrSolver, SolverConfig, DEFAULT_INITIAL_GUESS,
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
pub use state::{npv_and_derivative, IrrState, Step};

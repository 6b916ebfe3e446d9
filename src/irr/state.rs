//! Newton-Raphson iteration state for the IRR solver

/// NPV of an investment plus end-of-period flows at `rate`, and its derivative
///
/// `npv  = -initial + sum(cf[j] / (1+r)^(j+1))`
/// `dnpv = -sum((j+1) * cf[j] / (1+r)^(j+2))`
pub fn npv_and_derivative(initial_investment: f64, cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = -initial_investment;
    let mut dnpv = 0.0;

    for (j, &cf) in cash_flows.iter().enumerate() {
        let t = (j + 1) as f64;
        npv += cf / (1.0 + rate).powf(t);
        dnpv -= t * cf / (1.0 + rate).powf(t + 1.0);
    }

    (npv, dnpv)
}

/// Result of advancing the state machine by one Newton step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Moved to a new guess; iteration continues
    Continue,
    /// Step size fell below tolerance; `guess` holds the root
    Converged,
    /// Derivative was zero or non-finite at the current guess
    ZeroDerivative,
    /// The next guess overflowed to a non-finite value
    Diverged,
}

/// Current guess and iteration count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrState {
    pub guess: f64,
    pub iteration: u32,
}

impl IrrState {
    pub fn new(initial_guess: f64) -> Self {
        Self {
            guess: initial_guess,
            iteration: 0,
        }
    }

    /// Apply one Newton step against the given investment and flows
    ///
    /// On `ZeroDerivative` and `Diverged` the state is left untouched so the
    /// caller can report where it stopped.
    pub fn step(&mut self, initial_investment: f64, cash_flows: &[f64], tolerance: f64) -> Step {
        let (npv, dnpv) = npv_and_derivative(initial_investment, cash_flows, self.guess);

        if dnpv == 0.0 || !dnpv.is_finite() {
            return Step::ZeroDerivative;
        }

        let next = self.guess - npv / dnpv;
        if !next.is_finite() {
            return Step::Diverged;
        }

        let delta = (next - self.guess).abs();
        self.guess = next;
        self.iteration += 1;

        if delta < tolerance {
            Step::Converged
        } else {
            Step::Continue
        }
    }
}

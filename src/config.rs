//! Engine configuration
//!
//! Settings come from a JSON file (every field optional) and may then be
//! overridden from the environment:
//!   TVM_DISCOUNT_RATE, TVM_IRR_GUESS, TVM_IRR_TOLERANCE,
//!   TVM_IRR_MAX_ITERATIONS, TVM_IRR_BISECTION

use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{TvmError, TvmResult};
use crate::irr::SolverConfig;

/// Default discount rate for NPV and discounted payback (10%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.1;

/// Configuration shared by the batch runner and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-period rate used for NPV and discounted payback
    pub discount_rate: f64,

    /// IRR solver settings
    pub irr: SolverConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            irr: SolverConfig::default(),
        }
    }
}

/// Read and parse an environment variable, ignoring (with a warning) values that don't parse
fn env_override<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> TvmResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> TvmResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Apply `TVM_*` environment overrides on top of the current values
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(rate) = env_override("TVM_DISCOUNT_RATE") {
            self.discount_rate = rate;
        }
        if let Some(guess) = env_override("TVM_IRR_GUESS") {
            self.irr.initial_guess = guess;
        }
        if let Some(tolerance) = env_override("TVM_IRR_TOLERANCE") {
            self.irr.tolerance = tolerance;
        }
        if let Some(max_iterations) = env_override("TVM_IRR_MAX_ITERATIONS") {
            self.irr.max_iterations = max_iterations;
        }
        if let Some(bisection) = env_override("TVM_IRR_BISECTION") {
            self.irr.bisection_fallback = bisection;
        }
        self
    }

    pub fn validate(&self) -> TvmResult<()> {
        if !(self.discount_rate > -1.0) {
            return Err(TvmError::InvalidConfig(format!(
                "discount_rate must be greater than -1, got {}",
                self.discount_rate
            )));
        }
        if !(self.irr.tolerance > 0.0) {
            return Err(TvmError::InvalidConfig(format!(
                "irr.tolerance must be positive, got {}",
                self.irr.tolerance
            )));
        }
        if self.irr.max_iterations == 0 {
            return Err(TvmError::InvalidConfig(
                "irr.max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.discount_rate, 0.1);
        assert_eq!(config.irr.max_iterations, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config =
            EngineConfig::from_json_str(r#"{"discount_rate": 0.05, "irr": {"max_iterations": 50}}"#)
                .unwrap();
        assert_eq!(config.discount_rate, 0.05);
        assert_eq!(config.irr.max_iterations, 50);
        assert_eq!(config.irr.tolerance, 1e-6);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"discount_rate": -1.0}"#),
            Err(TvmError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"irr": {"tolerance": 0.0}}"#),
            Err(TvmError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{"irr": {"max_iterations": 0}}"#),
            Err(TvmError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            EngineConfig::from_json_str("{not json"),
            Err(TvmError::Json(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        // Variable names are unique to this test so parallel tests don't interfere
        env::set_var("TVM_IRR_MAX_ITERATIONS", "25");
        env::set_var("TVM_IRR_BISECTION", "not-a-bool");
        let config = EngineConfig::default().with_env_overrides();
        env::remove_var("TVM_IRR_MAX_ITERATIONS");
        env::remove_var("TVM_IRR_BISECTION");

        assert_eq!(config.irr.max_iterations, 25);
        assert!(!config.irr.bisection_fallback);
    }
}

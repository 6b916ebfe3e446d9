//! Batch evaluation of many cash-flow series
//!
//! Each series is independent, so batches run in parallel on the rayon pool.
//! Results come back in input order.

use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::cashflows::CashFlowSeries;
use crate::config::EngineConfig;
use crate::irr::{IrrOutcome, IrrSolver};
use crate::payback::{discounted_payback_period, payback_period};

/// Metrics for one series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReport {
    pub id: String,

    /// `-initial + sum(cf[i] / (1+r)^(i+1))` at the configured discount rate
    pub npv: f64,

    pub irr: IrrOutcome,

    /// `None` when the investment is not recovered
    pub payback_period: Option<u32>,

    pub discounted_payback_period: Option<u32>,
}

/// Evaluates series against a fixed configuration
///
/// # Example
/// ```rust
/// use tvm_engine::{BatchRunner, CashFlowSeries, EngineConfig};
///
/// let runner = BatchRunner::new(EngineConfig::default());
/// let report = runner.run(&CashFlowSeries::new("a", 1000.0, vec![600.0, 600.0]));
/// assert_eq!(report.payback_period, Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct BatchRunner {
    config: EngineConfig,
    solver: IrrSolver,
}

impl BatchRunner {
    pub fn new(config: EngineConfig) -> Self {
        let solver = IrrSolver::new(config.irr.clone());
        Self { config, solver }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate a single series
    pub fn run(&self, series: &CashFlowSeries) -> SeriesReport {
        let rate = self.config.discount_rate;
        let npv = -series.initial_investment
            + series
                .flows
                .iter()
                .enumerate()
                .map(|(i, cf)| cf / (1.0 + rate).powf((i + 1) as f64))
                .sum::<f64>();

        SeriesReport {
            id: series.id.clone(),
            npv,
            irr: self.solver.solve(series.initial_investment, &series.flows),
            payback_period: payback_period(series.initial_investment, &series.flows),
            discounted_payback_period: discounted_payback_period(
                series.initial_investment,
                &series.flows,
                rate,
            ),
        }
    }

    /// Evaluate many series in parallel
    pub fn run_batch(&self, series: &[CashFlowSeries]) -> Vec<SeriesReport> {
        let start = Instant::now();
        let reports: Vec<SeriesReport> = series.par_iter().map(|s| self.run(s)).collect();

        let converged = reports.iter().filter(|r| r.irr.is_converged()).count();
        info!(
            "Evaluated {} series in {:?} ({} IRRs converged)",
            reports.len(),
            start.elapsed(),
            converged
        );
        reports
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Vec<CashFlowSeries> {
        vec![
            CashFlowSeries::new("short", 1000.0, vec![100.0; 5]),
            CashFlowSeries::new("project", 1000.0, vec![400.0, 400.0, 400.0]),
            CashFlowSeries::new("empty", 500.0, vec![]),
        ]
    }

    #[test]
    fn test_single_report() {
        let runner = BatchRunner::default();
        let report = runner.run(&CashFlowSeries::new("one", 100.0, vec![120.0]));

        assert_relative_eq!(report.npv, 120.0 / 1.1 - 100.0, epsilon = 1e-9);
        assert!((report.irr.rate().unwrap() - 0.2).abs() < 1e-6);
        assert_eq!(report.payback_period, Some(1));
        assert_eq!(report.discounted_payback_period, Some(1));
    }

    #[test]
    fn test_batch_preserves_order_and_outcomes() {
        let runner = BatchRunner::default();
        let reports = runner.run_batch(&sample());

        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["short", "project", "empty"]);

        assert_eq!(reports[0].payback_period, None);
        assert!(reports[0].irr.rate().unwrap() < 0.0);

        assert_eq!(reports[1].payback_period, Some(3));
        assert_eq!(reports[1].discounted_payback_period, None);
        assert!(reports[1].npv < 0.0);

        assert!(matches!(reports[2].irr, IrrOutcome::DivisionByZero { .. }));
        assert_relative_eq!(reports[2].npv, -500.0);
    }

    #[test]
    fn test_report_json() {
        let runner = BatchRunner::default();
        let report = runner.run(&CashFlowSeries::new("x", 1000.0, vec![100.0; 5]));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["id"], "x");
        assert_eq!(json["irr"]["status"], "converged");
        assert!(json["payback_period"].is_null());
    }
}

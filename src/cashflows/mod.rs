//! Cash-flow series and CSV loading

pub mod loader;

pub use loader::{load_series, load_series_from_reader};

use serde::{Deserialize, Serialize};

/// An initial investment followed by one cash flow per period, in chronological order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    /// Caller-supplied label (project, scenario, ...)
    pub id: String,

    /// Outlay at period 0, positive for an investment
    pub initial_investment: f64,

    /// Flows for periods 1..=n
    pub flows: Vec<f64>,
}

impl CashFlowSeries {
    pub fn new(id: impl Into<String>, initial_investment: f64, flows: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            initial_investment,
            flows,
        }
    }

    /// Number of periods after the initial investment
    pub fn periods(&self) -> usize {
        self.flows.len()
    }

    /// Undiscounted sum of the flows
    pub fn total_inflows(&self) -> f64 {
        self.flows.iter().sum()
    }

    /// Full signed sequence with the investment as a negative flow at period 0
    pub fn signed_flows(&self) -> Vec<f64> {
        std::iter::once(-self.initial_investment)
            .chain(self.flows.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_accessors() {
        let series = CashFlowSeries::new("A", 1000.0, vec![100.0, 200.0, 300.0]);
        assert_eq!(series.periods(), 3);
        assert_eq!(series.total_inflows(), 600.0);
        assert_eq!(series.signed_flows(), vec![-1000.0, 100.0, 200.0, 300.0]);
    }
}

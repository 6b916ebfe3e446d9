//! Load cash-flow series from CSV
//!
//! Expected layout, one series per row:
//!
//! ```text
//! id,initial_investment,flow_1,flow_2,...
//! project-a,1000,300,400,500
//! project-b,250,100,100
//! ```
//!
//! Rows may have different lengths; trailing empty cells are ignored.

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::CashFlowSeries;
use crate::error::{TvmError, TvmResult};

fn parse_cell(record: &StringRecord, index: usize, field: &str) -> TvmResult<f64> {
    let raw = record.get(index).unwrap_or("").trim();
    raw.parse().map_err(|_| TvmError::Parse {
        line: record.position().map(|p| p.line()).unwrap_or(0),
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn record_to_series(record: &StringRecord) -> TvmResult<CashFlowSeries> {
    let id = record.get(0).unwrap_or("").trim().to_string();
    let initial_investment = parse_cell(record, 1, "initial_investment")?;

    let mut flows = Vec::with_capacity(record.len().saturating_sub(2));
    for index in 2..record.len() {
        if record[index].trim().is_empty() {
            continue;
        }
        flows.push(parse_cell(record, index, &format!("flow_{}", index - 1))?);
    }

    Ok(CashFlowSeries {
        id,
        initial_investment,
        flows,
    })
}

/// Load series from any reader (file, string buffer, stdin)
pub fn load_series_from_reader<R: Read>(reader: R) -> TvmResult<Vec<CashFlowSeries>> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut series = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        series.push(record_to_series(&record)?);
    }

    debug!("Loaded {} cash-flow series", series.len());
    Ok(series)
}

/// Load series from a CSV file
pub fn load_series<P: AsRef<Path>>(path: P) -> TvmResult<Vec<CashFlowSeries>> {
    let file = File::open(path)?;
    load_series_from_reader(file)
}

//! Export per-record results to CSV or JSON.
//!
//! Both formats share `ResultRow`, one per feed record, so a spreadsheet and a
//! script see the same fields.

use std::fs::File;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::app::pipeline::{BatchReport, RecordOutcome};
use crate::domain::{MortgageRate, PaymentFrequency};
use crate::error::AppError;

/// One exported record. Mortgage fields are empty when the record was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub line: usize,
    pub raw: String,
    pub status: &'static str,
    pub loan_amount: Option<f64>,
    pub rate: Option<MortgageRate>,
    pub annual_rate: Option<f64>,
    pub frequency: Option<PaymentFrequency>,
    pub payments_per_year: Option<u32>,
    pub amortization: Option<u32>,
    pub payment: Option<f64>,
    pub error: Option<String>,
}

impl From<&RecordOutcome> for ResultRow {
    fn from(outcome: &RecordOutcome) -> Self {
        match &outcome.result {
            Ok(m) => ResultRow {
                line: outcome.line,
                raw: outcome.raw.clone(),
                status: "accepted",
                loan_amount: Some(m.loan_amount()),
                rate: Some(m.rate()),
                annual_rate: Some(m.rate().annual_rate()),
                frequency: Some(m.frequency()),
                payments_per_year: Some(m.frequency().payments_per_year()),
                amortization: Some(m.amortization()),
                payment: Some(round_cents(m.calculate_payment())),
                error: None,
            },
            Err(e) => ResultRow {
                line: outcome.line,
                raw: outcome.raw.clone(),
                status: "rejected",
                loan_amount: None,
                rate: None,
                annual_rate: None,
                frequency: None,
                payments_per_year: None,
                amortization: None,
                payment: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// JSON export document.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsFile<'a> {
    pub tool: &'static str,
    pub source: String,
    pub accepted: usize,
    pub rejected: usize,
    pub total_principal: f64,
    pub records: &'a [ResultRow],
}

pub fn result_rows(report: &BatchReport) -> Vec<ResultRow> {
    report.outcomes.iter().map(ResultRow::from).collect()
}

/// Write per-record results to a CSV file (with header).
pub fn write_results_csv(path: &Path, report: &BatchReport) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for row in result_rows(report) {
        writer
            .serialize(&row)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;

    info!(path = %path.display(), rows = report.outcomes.len(), "wrote CSV export");
    Ok(())
}

/// Write the batch as a pretty-printed JSON document.
pub fn write_results_json(path: &Path, source: &Path, report: &BatchReport) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let rows = result_rows(report);
    let doc = ResultsFile {
        tool: "pixell",
        source: source.display().to_string(),
        accepted: report.accepted(),
        rejected: report.rejected(),
        total_principal: report.total_principal(),
        records: &rows,
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    info!(path = %path.display(), rows = rows.len(), "wrote JSON export");
    Ok(())
}

fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

//! Formatted terminal output.
//!
//! Formatting lives here so the domain and pipeline code stays free of
//! presentation details.

use crate::app::pipeline::{BatchReport, RecordOutcome};
use crate::domain::{MortgageRate, PaymentFrequency, VALID_AMORTIZATION};
use crate::report::money::{format_currency, format_percent};

/// Line printed before the first record and after every record.
pub const SEPARATOR: &str = "**************************************************";

/// One record: the mortgage summary, or the raw data and why it was rejected.
pub fn format_outcome(outcome: &RecordOutcome) -> String {
    match &outcome.result {
        Ok(mortgage) => mortgage.to_string(),
        Err(e) => format!("Data: {} caused error: {e}", outcome.raw),
    }
}

/// All records, framed by separators.
pub fn format_batch(report: &BatchReport) -> String {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    for outcome in &report.outcomes {
        out.push_str(&format_outcome(outcome));
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

pub fn format_summary(report: &BatchReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Records: {}\n", report.outcomes.len()));
    out.push_str(&format!("Accepted: {}\n", report.accepted()));
    out.push_str(&format!("Rejected: {}\n", report.rejected()));
    out.push_str(&format!(
        "Total principal: {}\n",
        format_currency(report.total_principal())
    ));
    out
}

/// The rate, frequency, and amortization tables.
pub fn format_tables() -> String {
    let mut out = String::new();

    out.push_str("Rates:\n");
    for rate in MortgageRate::ALL {
        out.push_str(&format!(
            "  {:<12} {:>7}\n",
            rate.name(),
            format_percent(rate.annual_rate())
        ));
    }

    out.push_str("\nFrequencies:\n");
    for freq in PaymentFrequency::ALL {
        out.push_str(&format!(
            "  {:<12} {:>3} payments/year\n",
            freq.name(),
            freq.payments_per_year()
        ));
    }

    let years: Vec<String> = VALID_AMORTIZATION.iter().map(|y| y.to_string()).collect();
    out.push_str(&format!("\nAmortization (years): {}\n", years.join(", ")));

    out
}

//! Shared batch logic: feed -> per-record validation -> report.
//!
//! Every feed entry becomes exactly one `RecordOutcome`, in feed order. A
//! rejected record is logged and kept in the report; it never stops the batch.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::domain::{Mortgage, RunConfig};
use crate::error::AppError;
use crate::io::ingest::{FeedEntry, RecordError, load_feed};

/// Result of validating one feed record.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub line: usize,
    pub raw: String,
    pub result: Result<Mortgage, RecordError>,
}

impl RecordOutcome {
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// All outcomes of a `pixell process` run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RecordOutcome>,
}

impl BatchReport {
    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }

    pub fn mortgages(&self) -> impl Iterator<Item = &Mortgage> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Sum of loan amounts over accepted records.
    pub fn total_principal(&self) -> f64 {
        self.mortgages().map(Mortgage::loan_amount).sum()
    }
}

/// Read the configured feed and validate every record.
///
/// Only a missing or unreadable feed is an error; bad records end up in the report.
pub fn run_batch(config: &RunConfig) -> Result<BatchReport, AppError> {
    let entries = load_feed(&config.data_path, config.layout)?;
    let report = process_entries(entries, config.parallel);

    info!(
        accepted = report.accepted(),
        rejected = report.rejected(),
        "batch complete"
    );
    Ok(report)
}

/// Validate feed entries into outcomes, preserving feed order.
pub fn process_entries(entries: Vec<FeedEntry>, parallel: bool) -> BatchReport {
    let outcomes: Vec<RecordOutcome> = if parallel {
        entries.into_par_iter().map(validate_entry).collect()
    } else {
        entries.into_iter().map(validate_entry).collect()
    };
    BatchReport { outcomes }
}

fn validate_entry(entry: FeedEntry) -> RecordOutcome {
    let result = entry.parsed.and_then(|record| record.to_mortgage());

    match &result {
        Ok(mortgage) => debug!(line = entry.line, mortgage = ?mortgage, "record accepted"),
        Err(e) => warn!(line = entry.line, raw = %entry.raw, error = %e, "record rejected"),
    }

    RecordOutcome {
        line: entry.line,
        raw: entry.raw,
        result,
    }
}

//! Mortgage feed ingest.
//!
//! Turns a comma-separated text source into one `FeedEntry` per record. Each
//! entry keeps the raw line (for error reports) and either the parsed fields or
//! the reason they could not be parsed.
//!
//! Design goals:
//! - **Row-level errors** (a bad line never stops the rest of the feed)
//! - **One coarse error** for a missing or unreadable source
//! - **No validation of mortgage rules here**; that is `Mortgage::new`'s job

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ByteRecord, StringRecord};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Mortgage, RecordLayout};
use crate::error::{AppError, MortgageError};

/// Fields per feed line.
pub const FIELD_COUNT: usize = 4;

/// A feed line with its numeric fields converted.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageRecord {
    pub amount: f64,
    pub rate: String,
    pub frequency: String,
    /// Any integer; range and membership are checked by `Mortgage::new`.
    pub amortization: i64,
}

impl MortgageRecord {
    /// Validate the record into a `Mortgage`.
    pub fn to_mortgage(&self) -> Result<Mortgage, RecordError> {
        Ok(Mortgage::new(
            self.amount,
            &self.rate,
            &self.frequency,
            self.amortization,
        )?)
    }
}

/// Why a single feed record was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("expected 4 fields, found {found}")]
    FieldCount { found: usize },
    #[error("could not convert {field} to a number: '{value}'")]
    NumericParse { field: &'static str, value: String },
    #[error("unreadable line: {0}")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] MortgageError),
}

/// One record from the feed, parsed or not.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    /// 1-based line number in the source.
    pub line: usize,
    /// The record as read (fields re-joined with commas), lossily decoded so
    /// undecodable lines can still be reported.
    pub raw: String,
    pub parsed: Result<MortgageRecord, RecordError>,
}

/// Open the feed file and read every record.
pub fn load_feed(path: &Path, layout: RecordLayout) -> Result<Vec<FeedEntry>, AppError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::new(
            2,
            format!("Mortgage feed '{}' not found.", path.display()),
        ),
        _ => AppError::new(
            2,
            format!("Failed to open mortgage feed '{}': {e}", path.display()),
        ),
    })?;
    info!(path = %path.display(), ?layout, "reading mortgage feed");

    let entries = read_feed(file, layout);
    debug!(records = entries.len(), "feed read");
    Ok(entries)
}

/// Read records from any byte source.
///
/// Blank lines and lines starting with `#` are skipped. Fields are trimmed.
pub fn read_feed<R: Read>(source: R, layout: RecordLayout) -> Vec<FeedEntry> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(source);

    let mut entries = Vec::new();
    for (idx, result) in reader.byte_records().enumerate() {
        let entry = match result {
            Ok(bytes) => FeedEntry {
                line: bytes
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(idx + 1),
                raw: join_fields(&bytes),
                parsed: StringRecord::from_byte_record(bytes)
                    .map_err(|e| RecordError::Malformed(e.to_string()))
                    .and_then(|record| parse_record(&record, layout)),
            },
            Err(e) => FeedEntry {
                line: e.position().map(|p| p.line() as usize).unwrap_or(idx + 1),
                raw: String::new(),
                parsed: Err(RecordError::Malformed(e.to_string())),
            },
        };
        entries.push(entry);
    }
    entries
}

/// Convert one record's fields, using `layout` to locate them.
pub fn parse_record(record: &StringRecord, layout: RecordLayout) -> Result<MortgageRecord, RecordError> {
    if record.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount { found: record.len() });
    }

    let (amount_idx, rate_idx, frequency_idx, amortization_idx) = layout.positions();
    let field = move |idx: usize| record.get(idx).unwrap_or_default();

    Ok(MortgageRecord {
        amount: parse_amount(field(amount_idx))?,
        rate: field(rate_idx).to_string(),
        frequency: field(frequency_idx).to_string(),
        amortization: parse_amortization(field(amortization_idx))?,
    })
}

fn parse_amount(s: &str) -> Result<f64, RecordError> {
    s.parse::<f64>().map_err(|_| RecordError::NumericParse {
        field: "amount",
        value: s.to_string(),
    })
}

fn parse_amortization(s: &str) -> Result<i64, RecordError> {
    s.parse::<i64>().map_err(|_| RecordError::NumericParse {
        field: "amortization",
        value: s.to_string(),
    })
}

fn join_fields(record: &ByteRecord) -> String {
    let fields: Vec<_> = record.iter().map(String::from_utf8_lossy).collect();
    fields.join(",")
}

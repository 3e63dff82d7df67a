//! Run configuration shared by the CLI, the feed reader, and the exporters.

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Column order of a mortgage feed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordLayout {
    /// `amount, rate, frequency, amortization` (constructor order).
    #[default]
    Canonical,
    /// `amount, rate, amortization, frequency` (PiXELL branch export order).
    Legacy,
}

impl RecordLayout {
    /// Parse a layout name as written in the environment (`canonical` / `legacy`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "canonical" => Some(RecordLayout::Canonical),
            "legacy" => Some(RecordLayout::Legacy),
            _ => None,
        }
    }

    /// Field positions as `(amount, rate, frequency, amortization)`.
    pub fn positions(self) -> (usize, usize, usize, usize) {
        match self {
            RecordLayout::Canonical => (0, 1, 2, 3),
            RecordLayout::Legacy => (0, 1, 3, 2),
        }
    }
}

/// A `pixell process` run as understood by the pipeline.
///
/// Built from CLI flags layered over `Settings` (environment / `.env`).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub layout: RecordLayout,
    /// Validate records on the rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Print the accepted/rejected summary after the records.
    pub summary: bool,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names() {
        assert_eq!(RecordLayout::from_name("legacy"), Some(RecordLayout::Legacy));
        assert_eq!(RecordLayout::from_name(" Canonical "), Some(RecordLayout::Canonical));
        assert_eq!(RecordLayout::from_name("csv"), None);
    }

    #[test]
    fn legacy_swaps_frequency_and_amortization() {
        assert_eq!(RecordLayout::Canonical.positions(), (0, 1, 2, 3));
        assert_eq!(RecordLayout::Legacy.positions(), (0, 1, 3, 2));
    }
}

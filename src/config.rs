//! Environment-backed settings.
//!
//! Values come from the process environment. `app::run` loads `.env` (via
//! `dotenvy`) before anything reads it. CLI flags override anything set here.

use std::path::PathBuf;

use tracing::warn;

use crate::domain::RecordLayout;

pub const DEFAULT_DATA_FILE: &str = "data/pixell_river_mortgages.txt";

pub const ENV_DATA_FILE: &str = "PIXELL_DATA_FILE";
pub const ENV_LAYOUT: &str = "PIXELL_LAYOUT";
/// `tracing` filter directive, e.g. `pixell_mortgages=debug`.
pub const ENV_LOG: &str = "PIXELL_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub layout: RecordLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            layout: RecordLayout::Canonical,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(path) = lookup(ENV_DATA_FILE).filter(|v| !v.trim().is_empty()) {
            settings.data_file = PathBuf::from(path.trim());
        }

        if let Some(name) = lookup(ENV_LAYOUT) {
            match RecordLayout::from_name(&name) {
                Some(layout) => settings.layout = layout,
                None => warn!(value = %name, "ignoring unknown PIXELL_LAYOUT"),
            }
        }

        settings
    }
}

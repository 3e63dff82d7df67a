//! Reporting: money formatting and terminal output for batches and tables.

pub mod format;
pub mod money;

pub use format::*;
pub use money::{format_currency, format_percent};

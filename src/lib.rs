//! `pixell-mortgages` library crate.
//!
//! The binary (`pixell`) is a thin wrapper around this library so that:
//!
//! - the mortgage rules are testable without spawning processes
//! - the feed, reporting, and export layers can be reused by other callers

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;

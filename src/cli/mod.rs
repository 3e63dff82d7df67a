//! Command-line parsing for the PiXELL River mortgage tool.
//!
//! Parsing and dispatch are kept apart: this module only describes the
//! arguments, `app` decides what to do with them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::RecordLayout;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "pixell", version, about = "PiXELL River mortgage validator and payment calculator")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `PIXELL_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate every record in a mortgage feed and print payments.
    Process(ProcessArgs),
    /// Validate a single mortgage and print its payment.
    Payment(PaymentArgs),
    /// Print the rate, frequency, and amortization tables.
    Tables,
}

/// Options for processing a feed.
#[derive(Debug, Args, Clone, Default)]
pub struct ProcessArgs {
    /// Feed file (defaults to `PIXELL_DATA_FILE`, then `data/pixell_river_mortgages.txt`).
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Column order of the feed (defaults to `PIXELL_LAYOUT`, then canonical).
    #[arg(long, value_enum)]
    pub layout: Option<RecordLayout>,

    /// Validate records on all cores (output order is unchanged).
    #[arg(long)]
    pub parallel: bool,

    /// Print accepted/rejected counts after the records.
    #[arg(long)]
    pub summary: bool,

    /// Export per-record results to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export per-record results to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

/// Options for a single payment calculation.
#[derive(Debug, Args, Clone)]
pub struct PaymentArgs {
    /// Loan amount (principal).
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Rate name, e.g. FIXED_5 (case-insensitive).
    #[arg(short, long)]
    pub rate: String,

    /// Payment frequency: MONTHLY, BI_WEEKLY, or WEEKLY (case-insensitive).
    #[arg(short, long)]
    pub frequency: String,

    /// Amortization period in years (5, 10, 15, 20, 25, 30).
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub amortization: i64,

    /// Print the single-line reconstruction form instead of the summary.
    #[arg(long)]
    pub repr: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payment() {
        let cli = Cli::parse_from([
            "pixell", "payment", "--amount", "682912.43", "--rate", "fixed_1", "-f", "monthly", "-y", "30",
        ]);
        let Command::Payment(args) = cli.command else {
            panic!("expected payment");
        };
        assert_eq!(args.amount, 682912.43);
        assert_eq!(args.rate, "fixed_1");
        assert_eq!(args.frequency, "monthly");
        assert_eq!(args.amortization, 30);
        assert!(!args.repr);
    }

    #[test]
    fn payment_accepts_negative_amount_for_validation() {
        let cli = Cli::parse_from([
            "pixell", "payment", "-a", "-100", "-r", "FIXED_5", "-f", "MONTHLY", "-y", "5",
        ]);
        let Command::Payment(args) = cli.command else {
            panic!("expected payment");
        };
        assert_eq!(args.amount, -100.0);
    }

    #[test]
    fn parses_process_flags() {
        let cli = Cli::parse_from([
            "pixell", "-vv", "process", "-f", "feed.txt", "--layout", "legacy", "--parallel", "--export", "out.csv",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Process(args) = cli.command else {
            panic!("expected process");
        };
        assert_eq!(args.file, Some(PathBuf::from("feed.txt")));
        assert_eq!(args.layout, Some(RecordLayout::Legacy));
        assert!(args.parallel);
        assert_eq!(args.export, Some(PathBuf::from("out.csv")));
        assert_eq!(args.export_json, None);
    }
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - runs a feed batch, a single payment, or prints the tables
//! - writes optional exports

use clap::Parser;
use tracing::debug;

use crate::cli::{Command, PaymentArgs, ProcessArgs};
use crate::config::Settings;
use crate::domain::{Mortgage, RunConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `pixell` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may set PIXELL_LOG, so load it before the subscriber.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init(cli.verbose);

    let settings = Settings::from_env();
    debug!(?settings, "settings loaded");

    match cli.command {
        Command::Process(args) => handle_process(&args, &settings),
        Command::Payment(args) => handle_payment(&args),
        Command::Tables => {
            print!("{}", crate::report::format_tables());
            Ok(())
        }
    }
}

fn handle_process(args: &ProcessArgs, settings: &Settings) -> Result<(), AppError> {
    let config = run_config_from_args(args, settings);
    let report = pipeline::run_batch(&config)?;

    print!("{}", crate::report::format_batch(&report));
    if config.summary {
        print!("{}", crate::report::format_summary(&report));
    }

    if let Some(path) = &config.export_csv {
        crate::io::export::write_results_csv(path, &report)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::export::write_results_json(path, &config.data_path, &report)?;
    }

    Ok(())
}

fn handle_payment(args: &PaymentArgs) -> Result<(), AppError> {
    let mortgage = Mortgage::new(args.amount, &args.rate, &args.frequency, args.amortization)?;
    if args.repr {
        println!("{mortgage:?}");
    } else {
        println!("{mortgage}");
    }
    Ok(())
}

/// Layer CLI flags over environment settings.
pub fn run_config_from_args(args: &ProcessArgs, settings: &Settings) -> RunConfig {
    RunConfig {
        data_path: args.file.clone().unwrap_or_else(|| settings.data_file.clone()),
        layout: args.layout.unwrap_or(settings.layout),
        parallel: args.parallel,
        summary: args.summary,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `pixell` defaults to `pixell process`.
///
/// Rules:
/// - `pixell`                      -> `pixell process`
/// - `pixell -f feed.txt ...`      -> `pixell process -f feed.txt ...`
/// - `pixell --help/--version/-h`  -> unchanged (show top-level help/version)
/// - `pixell -v ...`               -> unchanged (global flag before a subcommand)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    // Skip leading global verbosity flags to find the first meaningful token.
    let first = argv
        .iter()
        .skip(1)
        .position(|a| !is_verbosity_flag(a))
        .map(|i| i + 1);

    let Some(idx) = first else {
        argv.push("process".to_string());
        return argv;
    };

    let arg = argv[idx].as_str();
    let is_top_level_help_or_version = matches!(arg, "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg, "process" | "payment" | "tables");
    if is_subcommand {
        return argv;
    }

    // A flag here is a `process` flag.
    if arg.starts_with('-') {
        argv.insert(idx, "process".to_string());
        return argv;
    }

    // Otherwise, leave as-is and let clap report it.
    argv
}

fn is_verbosity_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}

//! # chipledger CLI Library
//!
//! Command-line interface for the chipledger hand-history accounting engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["chipledger", "calc", "-i", "logs/", "-o", "out/hands.csv"];
//! let code = chipledger_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `calc`: Reconstruct chip flow and write per-hand and per-player CSV reports
//! - `clean`: Strip pocket-card lines from an archive
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{ChipledgerCli, Commands};
use commands::{CalcArgs, handle_calc_command, handle_cfg_command, handle_clean_command};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["calc", "clean", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors and usage errors
///
/// # Example
///
/// ```
/// use std::io;
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = chipledger_cli::run(vec!["chipledger", "--help"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("calc"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ChipledgerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Calc {
            input,
            output,
            summary,
            rake_rounding,
            sequential,
        } => handle_calc_command(
            CalcArgs {
                input,
                output,
                summary,
                rake_rounding,
                sequential,
            },
            out,
            err,
        ),
        Commands::Clean { input, output } => handle_clean_command(input, output, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "chipledger hand-history accounting");
            write_or_exit!(err, "Usage: chipledger <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: chipledger --help");
            exit_code::ERROR
        }
    }
}

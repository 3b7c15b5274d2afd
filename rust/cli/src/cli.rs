//! Command-line argument definitions.

use chipledger_engine::attribution::RakeRounding;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "chipledger",
    version,
    about = "Chip-flow accounting for home-game hand histories"
)]
pub struct ChipledgerCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct every hand and write per-hand and per-player CSV reports
    Calc {
        /// Hand-history file or directory (walked recursively, .zst supported)
        #[arg(short = 'i', long)]
        input: String,
        /// Destination of the per-hand CSV
        #[arg(short = 'o', long)]
        output: String,
        /// Destination of the per-player CSV [default: <summary_prefix><output> next to output]
        #[arg(long)]
        summary: Option<String>,
        /// Rake credit rounding: exact, truncate or round
        #[arg(long)]
        rake_rounding: Option<RakeRounding>,
        /// Analyse hands on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Remove pocket-card lines and write clean_hh.txt
    Clean {
        /// Hand-history file or directory
        #[arg(short = 'i', long)]
        input: String,
        /// Output directory
        #[arg(short = 'o', long)]
        output: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

//! Chip-flow calculation command.
//!
//! Reads hand-history archives, reconstructs every hand through the engine
//! pipeline and writes two CSV reports: one row per hand and one row per
//! player. Unreadable files and unparseable hands are reported on the error
//! stream and skipped; the run only fails when no hand could be processed.

use crate::config;
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_input_files, ensure_parent_dir, read_text_auto};
use crate::ui;
use chipledger_engine::attribution::RakeRounding;
use chipledger_engine::pipeline::{Pipeline, PipelineOptions, RunSummary};
use chipledger_engine::segment::{Block, segment_text};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments of the `calc` subcommand.
#[derive(Debug, Clone)]
pub struct CalcArgs {
    pub input: String,
    pub output: String,
    pub summary: Option<String>,
    pub rake_rounding: Option<RakeRounding>,
    pub sequential: bool,
}

/// Runs the `calc` command.
///
/// # Errors
///
/// - `CliError::Config` when the configuration cannot be resolved
/// - `CliError::InvalidInput` when the input path does not exist
/// - `CliError::Engine` when not a single hand was processed
/// - `CliError::Io` / `CliError::Csv` when a report cannot be written
pub fn handle_calc_command(
    args: CalcArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .with_flags(args.rake_rounding, args.sequential);
    let cfg = resolved.config;

    let files = collect_input_files(Path::new(&args.input)).map_err(CliError::InvalidInput)?;
    let blocks = read_blocks(&files, err)?;

    let pipeline = Pipeline::new(PipelineOptions {
        rounding: cfg.rake_rounding,
        parallel: cfg.parallel,
    });
    let summary = pipeline.run(blocks);
    report_diagnostics(&summary, err)?;
    summary.ensure_processed()?;

    let hands_path = PathBuf::from(&args.output);
    let players_path = match args.summary {
        Some(p) => PathBuf::from(p),
        None => summary_path(&hands_path, &cfg.summary_prefix),
    };
    write_csv(&hands_path, summary.aggregator.hand_rows())?;
    write_csv(&players_path, &summary.aggregator.player_rows())?;

    writeln!(
        out,
        "Processed {} hand(s): {} skipped, {} duplicate(s), {} pot mismatch(es)",
        summary.aggregator.hands_processed(),
        summary.failures.len(),
        summary.duplicates,
        summary.mismatches.len()
    )?;
    writeln!(
        out,
        "Wrote output to {} and summary to {}",
        hands_path.display(),
        players_path.display()
    )?;
    Ok(())
}

/// Default players report location: `<summary_prefix><file name>` beside `output`.
pub fn summary_path(output: &Path, prefix: &str) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(format!("{}{}", prefix, name))
}

fn read_blocks(files: &[PathBuf], err: &mut dyn Write) -> Result<Vec<Block>, CliError> {
    let mut blocks = Vec::new();
    for path in files {
        match read_text_auto(&path.to_string_lossy()) {
            Ok(content) => blocks.extend(segment_text(&content)),
            Err(message) => {
                let failure = BatchValidationError {
                    item_context: path.display().to_string(),
                    message,
                };
                tracing::warn!(%failure, "skipping unreadable file");
                ui::display_warning(err, &format!("Skipping file {}", failure))?;
            }
        }
    }
    Ok(blocks)
}

fn report_diagnostics(summary: &RunSummary, err: &mut dyn Write) -> Result<(), CliError> {
    for failure in &summary.failures {
        let item = BatchValidationError {
            item_context: failure.position,
            message: failure.error.to_string(),
        };
        ui::display_warning(err, &format!("Skipping hand block {}", item))?;
        ui::write_block(err, &failure.block)?;
    }
    for mismatch in &summary.mismatches {
        ui::display_warning(err, &mismatch.to_string())?;
    }
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), CliError> {
    ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_path_sits_next_to_output() {
        let p = summary_path(Path::new("out/reports/hands.csv"), "summary_");
        assert_eq!(p, PathBuf::from("out/reports/summary_hands.csv"));
        let p = summary_path(Path::new("hands.csv"), "players_");
        assert_eq!(p, PathBuf::from("players_hands.csv"));
    }

    #[test]
    fn unreadable_files_are_warned_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "Hand #1\nline\n\nHand #2\n").unwrap();
        let missing = dir.path().join("missing.txt");

        let mut err = Vec::new();
        let blocks = read_blocks(&[missing, good], &mut err).unwrap();
        assert_eq!(blocks.len(), 2);
        let text = String::from_utf8(err).unwrap();
        assert!(text.contains("WARNING: Skipping file"));
        assert!(text.contains("missing.txt"));
    }

    #[test]
    #[serial_test::serial]
    fn missing_input_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let args = CalcArgs {
            input: dir.path().join("nope").to_string_lossy().into_owned(),
            output: dir.path().join("hands.csv").to_string_lossy().into_owned(),
            summary: None,
            rake_rounding: None,
            sequential: true,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_calc_command(args, &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}

//! Pocket-card scrubbing command.
//!
//! Rewrites an archive without the lines that reveal hole cards, so logs can
//! be shared after a session.

use crate::config;
use crate::error::{BatchValidationError, CliError};
use crate::io_utils::{collect_input_files, read_text_auto};
use crate::ui;
use chipledger_engine::segment::{segment_text, strip_prefixed_lines};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the scrubbed archive written into the output directory.
pub const CLEAN_FILE_NAME: &str = "clean_hh.txt";

pub fn handle_clean_command(
    input: String,
    output: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;
    let files = collect_input_files(Path::new(&input)).map_err(CliError::InvalidInput)?;

    let mut cleaned = String::new();
    let mut hands = 0usize;
    for path in &files {
        let content = match read_text_auto(&path.to_string_lossy()) {
            Ok(c) => c,
            Err(message) => {
                let failure = BatchValidationError {
                    item_context: path.display().to_string(),
                    message,
                };
                ui::display_warning(err, &format!("Skipping file {}", failure))?;
                continue;
            }
        };
        for block in segment_text(&content) {
            for line in strip_prefixed_lines(&block, &cfg.pocket_card_prefix) {
                cleaned.push_str(&line);
                cleaned.push('\n');
            }
            cleaned.push_str("\n\n");
            hands += 1;
        }
    }

    let outdir = PathBuf::from(&output);
    std::fs::create_dir_all(&outdir)?;
    std::fs::write(outdir.join(CLEAN_FILE_NAME), cleaned)?;
    tracing::info!(hands, outdir = %outdir.display(), "wrote scrubbed archive");
    writeln!(
        out,
        "Removed pocket card information from {} hand(s) and wrote to {} in {}",
        hands,
        CLEAN_FILE_NAME,
        outdir.display()
    )?;
    Ok(())
}

//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, file, env or flag).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "rake_rounding": {
//!     "value": "exact",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Loads the configuration with source tracking and writes it as pretty JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails; nothing is written.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "rake_rounding": {
            "value": config.rake_rounding,
            "source": sources.rake_rounding,
        },
        "parallel": {
            "value": config.parallel,
            "source": sources.parallel,
        },
        "summary_prefix": {
            "value": config.summary_prefix,
            "source": sources.summary_prefix,
        },
        "pocket_card_prefix": {
            "value": config.pocket_card_prefix,
            "source": sources.pocket_card_prefix,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

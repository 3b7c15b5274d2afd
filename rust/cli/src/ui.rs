//! UI helper functions for terminal output formatting.
//!
//! Consistent error and warning output across CLI commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes each line of a raw hand block indented under a warning.
pub fn write_block(err: &mut dyn Write, block: &[String]) -> std::io::Result<()> {
    for line in block {
        writeln!(err, "    {}", line)?;
    }
    Ok(())
}

//! Command handler modules for the chipledger CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod calc;
pub mod cfg;
pub mod clean;

pub use calc::{CalcArgs, handle_calc_command};
pub use cfg::handle_cfg_command;
pub use clean::handle_clean_command;

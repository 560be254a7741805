// License: MIT OR Apache-2.0
//! Main entry point for the configure-project CLI application.
//!
//! This module parses the command line, sets up tracing, and runs the
//! configure action. It uses the `clap` crate for command-line argument
//! parsing and the `tracing` crate for logging.

mod actions;
mod cli;
mod providers;
mod trace;
mod utils;

use anyhow::{Ok, Result};
use cli::Cli;
use tracing::error;

/// Main function for the configure-project CLI application.
///
/// # Errors
///
/// This function returns an error, and the process exits with a non-zero
/// status, if the Wwise SDK root cannot be resolved, if the AkAutobahn sources
/// cannot be mirrored, or if cmake fails.
fn main() -> Result<()> {
    let cli = Cli::parse_with_single_dash_options();
    trace::init_tracing(cli.verbose);
    cli.run().inspect_err(|e| error!("{:#}", e))?;
    Ok(())
}

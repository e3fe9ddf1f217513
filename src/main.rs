//! Entrypoint: render Jinja templates for a container, then exec its command.
//!
//! This is the main entry point for the `entrypoint` CLI. It parses arguments,
//! runs the render pipeline, and maps errors to exit codes. On success the
//! process is replaced by the trailing command, whose exit code becomes ours.

mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod launch;
mod logging;
pub mod pipeline;
pub mod props;
pub mod render;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse_args();

    match pipeline::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

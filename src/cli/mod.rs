//! CLI argument parsing for the entrypoint.
//!
//! Uses clap derive macros for declarative argument definitions. The run
//! itself lives in the `pipeline` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Container entrypoint that renders Jinja templates and writes them to a destination,
/// then replaces itself with a command.
///
/// The configuration file is a YAML mapping of `TEMPLATE_PATH: DESTINATION_PATH`.
/// Template paths are relative to the configuration file. Templates see the merged
/// property files as `props` and the process environment as `env`.
///
/// Example:
///   entrypoint --config prod.yml --props defaults.yml prod.yml -- apachectl -D FOREGROUND
#[derive(Parser, Debug)]
#[command(name = "entrypoint")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Template configuration file.
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// YAML files with properties for the templates, merged into `props` in order
    /// (later files override earlier ones).
    #[arg(long, value_name = "PROPERTY_FILE", num_args = 0.., action = ArgAction::Append)]
    pub props: Vec<PathBuf>,

    /// Re-render destination files even if they already exist.
    #[arg(long = "override", visible_alias = "overwrite")]
    pub override_existing: bool,

    /// Print the rendered templates instead of writing them; do not launch the command.
    #[arg(long)]
    pub dry_run: bool,

    /// Command to exec once rendering is complete (given after `--`).
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! Error types for the entrypoint CLI.
//!
//! Uses thiserror for derive macros. Every error is fatal: the first one
//! aborts the run before the trailing command is launched.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for entrypoint operations.
///
/// Each variant maps to an exit code in [`exit_codes`].
#[derive(Error, Debug)]
pub enum EntrypointError {
    /// The template configuration file does not exist.
    #[error("config file not found: '{}'", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The template configuration file is unreadable or not a mapping of strings.
    #[error("failed to parse config file '{}': {message}", path.display())]
    ConfigParseError { path: PathBuf, message: String },

    /// A property file does not exist.
    #[error("property file not found: '{}'", path.display())]
    PropsNotFound { path: PathBuf },

    /// A property file is unreadable or its root is not a mapping.
    #[error("failed to parse property file '{}': {message}", path.display())]
    PropsParseError { path: PathBuf, message: String },

    /// A template referenced by the configuration could not be read.
    #[error(
        "template '{}' (for '{}') could not be read: {source}",
        template.display(),
        destination.display()
    )]
    TemplateNotFound {
        template: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The templating engine rejected the template (syntax or undefined variable).
    #[error(
        "failed to render template '{}' (for '{}'): {message}",
        template.display(),
        destination.display()
    )]
    RenderError {
        template: PathBuf,
        destination: PathBuf,
        message: String,
    },

    /// The rendered output could not be written to its destination.
    #[error(
        "failed to write '{}' (rendered from '{}'): {source}",
        destination.display(),
        template.display()
    )]
    WriteError {
        template: PathBuf,
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No command was given after `--` and this is not a dry run.
    #[error("no command to launch; pass one after '--' or use --dry-run")]
    MissingCommand,

    /// The trailing command could not be executed.
    #[error("failed to launch '{command}': {source}")]
    LaunchError {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl EntrypointError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EntrypointError::MissingCommand => exit_codes::USER_ERROR,
            EntrypointError::ConfigNotFound { .. }
            | EntrypointError::ConfigParseError { .. }
            | EntrypointError::PropsNotFound { .. }
            | EntrypointError::PropsParseError { .. } => exit_codes::CONFIG_FAILURE,
            EntrypointError::TemplateNotFound { .. } | EntrypointError::RenderError { .. } => {
                exit_codes::RENDER_FAILURE
            }
            EntrypointError::WriteError { .. } => exit_codes::WRITE_FAILURE,
            EntrypointError::LaunchError { .. } => exit_codes::LAUNCH_FAILURE,
        }
    }
}

/// Result type alias for entrypoint operations.
pub type Result<T> = std::result::Result<T, EntrypointError>;

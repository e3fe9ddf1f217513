//! Replacing the entrypoint with the trailing command.
//!
//! On Unix the process image is replaced (`execvp` semantics: `PATH` lookup,
//! inherited environment and standard streams), so the command's exit status
//! and signals reach the container runtime directly. Elsewhere the command is
//! spawned as a child and its exit code is passed through.

use crate::error::{EntrypointError, Result};
use std::convert::Infallible;
use std::fmt;
use std::process::Command;
use tracing::info;

/// The command given after `--`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    program: String,
    args: Vec<String>,
}

impl LaunchSpec {
    /// Split a command line into program and arguments. `None` if empty.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Replace the current process with `spec`. Only returns on failure.
#[cfg(unix)]
pub fn launch(spec: &LaunchSpec) -> Result<Infallible> {
    use std::os::unix::process::CommandExt;

    info!(command = %spec, "exec");
    let source = spec.command().exec();
    Err(EntrypointError::LaunchError {
        command: spec.to_string(),
        source,
    })
}

/// Run `spec` as a child and exit with its exit code. Only returns on failure.
#[cfg(not(unix))]
pub fn launch(spec: &LaunchSpec) -> Result<Infallible> {
    info!(command = %spec, "spawning (no exec on this platform)");
    let status = spec
        .command()
        .status()
        .map_err(|source| EntrypointError::LaunchError {
            command: spec.to_string(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}

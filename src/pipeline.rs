//! The whole run: load config, merge props, render, launch.
//!
//! `Start -> LoadConfig -> MergeProps -> RenderLoop -> (DryRunExit | Launch)`,
//! aborting on the first error.

use crate::cli::Cli;
use crate::config::TemplateMapping;
use crate::error::{EntrypointError, Result};
use crate::launch::{LaunchSpec, launch};
use crate::props::PropertyTree;
use crate::render::{EnvironmentMap, RenderNamespace, RenderOptions, Renderer};
use std::io::{self, Write};
use tracing::debug;

/// Execute the run described by `cli`. Does not return after a successful launch.
pub fn run(cli: &Cli) -> Result<()> {
    let env = EnvironmentMap::capture();
    let mut stdout = io::stdout();

    let Some(spec) = prepare(cli, env, &mut stdout)? else {
        return Ok(());
    };

    let _ = writeln!(stdout, "Launching: {spec}");
    let _ = stdout.flush();

    let never = launch(&spec)?;
    match never {}
}

/// Everything up to the launch: render all templates and decide what to exec.
///
/// Returns `None` in dry-run mode. Fails with `MissingCommand` before touching
/// any file when there is nothing to launch.
pub fn prepare<W: Write>(cli: &Cli, env: EnvironmentMap, out: W) -> Result<Option<LaunchSpec>> {
    let spec = LaunchSpec::from_command(&cli.command);
    if spec.is_none() && !cli.dry_run {
        return Err(EntrypointError::MissingCommand);
    }

    let mapping = TemplateMapping::load(&cli.config)?;
    if mapping.is_empty() {
        debug!(config = %cli.config.display(), "no templates configured");
    } else {
        debug!(config = %cli.config.display(), templates = mapping.len(), "loaded template config");
    }

    let props = PropertyTree::load_and_merge(&cli.props)?;
    if props.is_empty() {
        debug!(files = cli.props.len(), "no properties loaded");
    } else {
        debug!(files = cli.props.len(), keys = props.len(), "merged properties");
    }

    let namespace = RenderNamespace::new(props, env);
    let options = RenderOptions {
        override_existing: cli.override_existing,
        dry_run: cli.dry_run,
    };
    Renderer::new(&namespace, options, out).render_all(&mapping)?;

    if cli.dry_run {
        debug!("dry run, not launching");
        return Ok(None);
    }
    Ok(spec)
}

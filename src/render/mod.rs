//! Template rendering and materialization.
//!
//! For each configured pair, in order:
//! - skip it if the destination already exists and override is off;
//! - otherwise read the template, render it against the namespace, and
//!   either print it (dry run) or write it to the destination.
//!
//! The first failure aborts the whole run.

mod engine;
mod namespace;


use engine::render_template;
pub use namespace::{EnvironmentMap, RenderNamespace};

use crate::config::{TemplateMapping, TemplatePair};
use crate::error::{EntrypointError, Result};
use crate::fs::write_synced;
use std::io::Write;
use tracing::debug;

/// Run-mode switches for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Re-render even if the destination exists.
    pub override_existing: bool,
    /// Print instead of writing.
    pub dry_run: bool,
}

/// What happened to a single template/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Rendered and written to the destination.
    Written,
    /// Destination already existed; nothing was read or written.
    Skipped,
    /// Rendered and printed (dry run).
    Printed,
}

/// Renders every pair of a [`TemplateMapping`], reporting progress to `out`.
pub struct Renderer<W: Write> {
    context: minijinja::Value,
    options: RenderOptions,
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(namespace: &RenderNamespace, options: RenderOptions, out: W) -> Self {
        Self {
            context: namespace.to_value(),
            options,
            out,
        }
    }

    /// Render all pairs in configuration order.
    pub fn render_all(&mut self, mapping: &TemplateMapping) -> Result<Vec<RenderOutcome>> {
        self.report(format_args!("Rendering templates"));
        mapping
            .pairs()
            .iter()
            .map(|pair| self.render_pair(pair))
            .collect()
    }

    /// Render a single pair.
    pub fn render_pair(&mut self, pair: &TemplatePair) -> Result<RenderOutcome> {
        let dst = pair.destination.display();

        if !self.should_render(pair) {
            debug!(destination = %dst, "destination exists, skipping");
            self.report(format_args!("{dst}: Skipped"));
            return Ok(RenderOutcome::Skipped);
        }

        let rendered = self.render_text(pair)?;

        if self.options.dry_run {
            self.print_rendered(pair, &rendered)?;
            return Ok(RenderOutcome::Printed);
        }

        write_synced(&pair.destination, rendered.as_bytes()).map_err(|source| {
            EntrypointError::WriteError {
                template: pair.template.clone(),
                destination: pair.destination.clone(),
                source,
            }
        })?;
        self.report(format_args!("{dst}: OK"));
        Ok(RenderOutcome::Written)
    }

    fn should_render(&self, pair: &TemplatePair) -> bool {
        self.options.override_existing || !pair.destination.exists()
    }

    fn render_text(&self, pair: &TemplatePair) -> Result<String> {
        let source = std::fs::read_to_string(&pair.template).map_err(|source| {
            EntrypointError::TemplateNotFound {
                template: pair.template.clone(),
                destination: pair.destination.clone(),
                source,
            }
        })?;

        let name = pair.template.to_string_lossy();
        debug!(template = %name, destination = %pair.destination.display(), "rendering");

        render_template(&name, &source, &self.context).map_err(|e| EntrypointError::RenderError {
            template: pair.template.clone(),
            destination: pair.destination.clone(),
            message: e.to_string(),
        })
    }

    /// Dry-run output: the destination, then the rendered text indented by two spaces.
    fn print_rendered(&mut self, pair: &TemplatePair, rendered: &str) -> Result<()> {
        let mut block = format!("{}:\n", pair.destination.display());
        for line in rendered.lines() {
            if !line.trim().is_empty() {
                block.push_str("  ");
                block.push_str(line);
            }
            block.push('\n');
        }
        block.push('\n');

        self.out
            .write_all(block.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|source| EntrypointError::WriteError {
                template: pair.template.clone(),
                destination: pair.destination.clone(),
                source,
            })
    }

    // Progress lines are informational; a closed stdout must not abort the run.
    fn report(&mut self, line: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{line}");
    }
}

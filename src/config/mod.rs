//! Template configuration for the entrypoint.
//!
//! The configuration file is a YAML mapping of `TEMPLATE_PATH: DESTINATION_PATH`
//! entries. Template paths are relative to the configuration file; destination
//! paths are used as written.

mod model;
mod operations;


// Re-export public API
pub use model::{TemplateMapping, TemplatePair};
pub use operations::resolve_relative_to;

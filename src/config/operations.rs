//! Template mapping loading and path resolution.

use super::model::{TemplateMapping, TemplatePair};
use crate::error::{EntrypointError, Result};
use crate::props::describe_value;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

impl TemplateMapping {
    /// Load the template mapping from a YAML file.
    ///
    /// Relative template paths are resolved against the directory that
    /// contains `path`. Destination paths are kept verbatim.
    ///
    /// # Returns
    ///
    /// * `Ok(TemplateMapping)` - Pairs in document order
    /// * `Err(EntrypointError::ConfigNotFound)` - `path` does not exist
    /// * `Err(EntrypointError::ConfigParseError)` - Unreadable, invalid YAML,
    ///   or not a mapping of strings to strings
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EntrypointError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| EntrypointError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_yaml(&content, path)
    }

    /// Parse a template mapping from a YAML string.
    ///
    /// `config_path` is the location the document was read from; it anchors
    /// relative template paths and is named in error messages.
    pub fn from_yaml(yaml: &str, config_path: &Path) -> Result<Self> {
        let parse_error = |message: String| EntrypointError::ConfigParseError {
            path: config_path.to_path_buf(),
            message,
        };

        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut document: Value =
            serde_yaml::from_str(yaml).map_err(|e| parse_error(e.to_string()))?;
        document
            .apply_merge()
            .map_err(|e| parse_error(e.to_string()))?;

        let mapping = match document {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(parse_error(format!(
                    "expected a mapping of template paths to destination paths, found {}",
                    describe_value(&other)
                )));
            }
        };

        let mut pairs = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let Value::String(template) = key else {
                return Err(parse_error(format!(
                    "template paths must be strings, found {}",
                    describe_value(&key)
                )));
            };
            let Value::String(destination) = value else {
                return Err(parse_error(format!(
                    "destination for '{}' must be a string, found {}",
                    template,
                    describe_value(&value)
                )));
            };

            let resolved = resolve_relative_to(config_path, Path::new(&template));
            debug!(
                template = %resolved.display(),
                destination = %destination,
                "resolved template pair"
            );

            pairs.push(TemplatePair {
                template: resolved,
                destination: PathBuf::from(destination),
            });
        }

        Ok(Self::new(pairs))
    }
}

/// Resolve `file` against the directory containing `config_path`.
///
/// Absolute `file` paths are returned unchanged. The configuration path is
/// made absolute against the current working directory first, so the result
/// does not depend on the working directory changing later in the run.
pub fn resolve_relative_to(config_path: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        return file.to_path_buf();
    }

    let config_abs =
        std::path::absolute(config_path).unwrap_or_else(|_| config_path.to_path_buf());
    let base = config_abs.parent().unwrap_or(Path::new("/"));
    base.join(file)
}

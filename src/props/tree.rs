//! Property tree loading and merging.

use crate::error::{EntrypointError, Result};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Merged property namespace.
///
/// Keys map to scalars, sequences, or nested mappings. Serializes as a plain
/// mapping, which is how templates see it under `props`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyTree(Mapping);

impl PropertyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single property file.
    ///
    /// An empty document is an empty tree. Any other root that is not a
    /// mapping is rejected.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(EntrypointError::PropsNotFound {
                path: path.to_path_buf(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| EntrypointError::PropsParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_yaml(&content, path)
    }

    /// Parse a property tree from a YAML string read from `path`.
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }

        let parse_error = |e: serde_yaml::Error| EntrypointError::PropsParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut document: Value = serde_yaml::from_str(yaml).map_err(parse_error)?;
        // `<<: *anchor` merge keys are resolved, not kept as literal keys.
        document.apply_merge().map_err(parse_error)?;

        match document {
            Value::Null => Ok(Self::new()),
            Value::Mapping(mapping) => Ok(Self(mapping)),
            other => Err(EntrypointError::PropsParseError {
                path: path.to_path_buf(),
                message: format!(
                    "expected a mapping at the top level, found {}",
                    describe_value(&other)
                ),
            }),
        }
    }

    /// Load every file in order and fold them into one tree.
    ///
    /// Later files take precedence. No paths yields an empty tree.
    pub fn load_and_merge<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut merged = Self::new();
        for path in paths {
            let path = path.as_ref();
            let tree = Self::load(path)?;
            debug!(path = %path.display(), keys = tree.len(), "merging property file");
            merged.merge(tree);
        }
        Ok(merged)
    }

    /// Deep-merge `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: PropertyTree) {
        merge_mappings(&mut self.0, other.0);
    }

    /// Look up a dotted path such as `database.primary.host`.
    #[cfg(test)]
    pub fn get_path(&self, dotted: &str) -> Option<&Value> {
        let mut parts = dotted.split('.');
        let mut current = self.0.get(parts.next()?)?;
        for part in parts {
            current = current.as_mapping()?.get(part)?;
        }
        Some(current)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn merge_mappings(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        if let Value::Mapping(incoming) = value {
            if let Some(Value::Mapping(existing)) = base.get_mut(&key) {
                merge_mappings(existing, incoming);
                continue;
            }
            base.insert(key, Value::Mapping(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

/// Human-readable kind of a YAML value, for error messages.
pub fn describe_value(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

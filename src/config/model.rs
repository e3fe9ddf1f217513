//! Template mapping definition.

use std::path::PathBuf;

/// One configured template and where its rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    /// Template path, already resolved against the configuration file's directory.
    pub template: PathBuf,
    /// Destination path, verbatim from the configuration file.
    pub destination: PathBuf,
}

/// Ordered set of template/destination pairs loaded from a configuration file.
///
/// Pairs keep the order in which they appear in the YAML document, which is
/// also the order in which they are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMapping {
    pairs: Vec<TemplatePair>,
}

impl TemplateMapping {
    pub fn new(pairs: Vec<TemplatePair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[TemplatePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

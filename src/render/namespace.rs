//! The variables visible to templates.

use crate::props::PropertyTree;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of the process environment.
///
/// Taken once at startup and never re-read. Variables whose name or value is
/// not valid Unicode are left out; the launched command still inherits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentMap(BTreeMap<String, String>);

impl EnvironmentMap {
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvironmentMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `{ props, env }`: everything a template can reference.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderNamespace {
    pub props: PropertyTree,
    pub env: EnvironmentMap,
}

impl RenderNamespace {
    pub fn new(props: PropertyTree, env: EnvironmentMap) -> Self {
        Self { props, env }
    }

    /// Convert into the templating engine's value model.
    pub fn to_value(&self) -> minijinja::Value {
        minijinja::Value::from_serialize(self)
    }
}

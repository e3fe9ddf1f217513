//! Property files exposed to templates as `props`.
//!
//! Each property file is a YAML mapping, nested to any depth. Files are
//! deep-merged left to right: mappings merge key by key, anything else
//! (scalars, sequences) is replaced by the later file's value.

mod tree;


pub use tree::{PropertyTree, describe_value};

//! Filesystem utilities for the entrypoint.

mod write;

pub use write::write_synced;

//! Writing rendered output to its destination.
//!
//! Destinations are opened with create + truncate and written in place, so a
//! destination that is a symlink keeps pointing at the same target. The file
//! is synced before returning. Parent directories are never created: a missing
//! directory is a configuration mistake and surfaces as an error.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Create or truncate `path`, write `content`, and sync it to disk.
pub fn write_synced<P: AsRef<Path>>(path: P, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

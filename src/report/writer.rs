use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Dashboard writer — serialize the rendered document to disk
// ============================================================================

/// Write the rendered dashboard to `path` (UTF-8, create or overwrite) and
/// return the absolute path for the clickable `file://` success line.
///
/// Permission errors and missing parent directories surface as `io::Error`;
/// the caller aborts with a non-zero exit.
pub fn write_dashboard(path: &Path, html: &str) -> Result<PathBuf, io::Error> {
    fs::write(path, html)?;
    std::path::absolute(path)
}

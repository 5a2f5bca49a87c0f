//! Record file discovery
//!
//! Expands the configured glob pattern into the file set that is both the
//! extraction source and the merge target. Paths are sorted so every run sees
//! the files in the same order.

use crate::types::BalancerError;
use glob::glob;
use std::path::PathBuf;
use tracing::debug;

/// List every regular file matching `pattern`
///
/// # Errors
///
/// * `BalancerError::InvalidPattern` if the pattern is not a valid glob
/// * `BalancerError::Io` if a matching directory entry cannot be read
pub fn discover_files(pattern: &str) -> Result<Vec<PathBuf>, BalancerError> {
    let entries = glob(pattern).map_err(|e| BalancerError::invalid_pattern(pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let display = e.path().display().to_string();
            BalancerError::io(&display, std::io::Error::from(e))
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    debug!("{} file(s) match {}", files.len(), pattern);
    Ok(files)
}

//! Changelog file access

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Read existing changelog content, `None` when the file does not exist
pub fn read_changelog(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        debug!(path = %path.display(), "reading existing changelog");
        Ok(Some(std::fs::read_to_string(path)?))
    } else {
        debug!(path = %path.display(), "no existing changelog found");
        Ok(None)
    }
}

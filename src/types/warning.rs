//! Non-fatal diagnostics produced while merging values into XML

use thiserror::Error;

/// Advisory raised by a merge that repaired the document on its own
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeWarning {
    /// Several sibling tags carried the same field; all but the first were removed
    #[error("Found duplicate tag '{tag}' in '{record}'. Removed {removed} extra occurrence(s)")]
    DuplicateTag {
        /// Record whose document was repaired
        record: String,
        /// Repeated tag name
        tag: String,
        /// Number of removed occurrences
        removed: usize,
    },
}

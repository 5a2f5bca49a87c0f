//! Table → XML merge
//!
//! Writes edited values back into the record documents they came from while
//! leaving everything else in the document alone.
//!
//! For each non-empty field of a record, the merger:
//! - collapses repeated sibling tags down to the first one (reported as a
//!   [`MergeWarning::DuplicateTag`]),
//! - overwrites the text of the existing tag, or
//! - appends a new tag at the end of the data subtree when none exists.
//!
//! Empty values are skipped so a blank CSV cell never erases XML content.
//!
//! # Failure Model
//!
//! Files are processed one after another. An error stops the run; files that
//! were already rewritten stay rewritten.

use crate::config::BalancerConfig;
use crate::core::element::{
    append_text_child, child_element, child_element_mut, keep_first_child, set_element_text,
};
use crate::core::extractor::record_name;
use crate::core::table::Table;
use crate::io::discovery::discover_files;
use crate::io::xml_file::{load_document, save_document};
use crate::types::{BalancerError, MergeWarning, Record};
use tracing::debug;
use xmltree::{Element, XMLNode};

/// Outcome of merging a table into the file set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Files rewritten with their record's values
    pub files_written: usize,
    /// Files left untouched because the table had no record for them
    pub files_skipped: usize,
    /// Duplicate-tag repairs performed along the way
    pub warnings: Vec<MergeWarning>,
}

/// Merge one record's values into its parsed document
///
/// The data subtree is created on demand when the document lacks it and there
/// is at least one value to write.
pub fn merge_record(root: &mut Element, record: &Record, subtree: &str) -> Vec<MergeWarning> {
    let mut warnings = Vec::new();

    let mut pending = record
        .fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .peekable();
    if pending.peek().is_none() {
        return warnings;
    }

    if child_element(root, subtree).is_none() {
        debug!("'{}': creating <{}> subtree", record.name, subtree);
        root.children.push(XMLNode::Element(Element::new(subtree)));
    }
    let Some(data) = child_element_mut(root, subtree) else {
        return warnings;
    };

    for (field, value) in pending {
        let removed = keep_first_child(data, field);
        if removed > 0 {
            debug!(
                "'{}': removed {} duplicate <{}> tag(s)",
                record.name, removed, field
            );
            warnings.push(MergeWarning::DuplicateTag {
                record: record.name.clone(),
                tag: field.clone(),
                removed,
            });
        }

        match child_element_mut(data, field) {
            Some(tag) => set_element_text(tag, value),
            None => append_text_child(data, field, value),
        }
    }

    warnings
}

/// Merge every record of `table` into the files matched by the configured pattern
///
/// Each file is re-parsed, looked up by its `name` attribute and, when the
/// table holds a record for it, rewritten in place.
pub fn merge_table(config: &BalancerConfig, table: &Table) -> Result<MergeSummary, BalancerError> {
    let mut summary = MergeSummary::default();

    for path in discover_files(&config.pattern)? {
        let mut root = load_document(&path)?;
        let name = record_name(&root, &path)?;

        let Some(record) = table.get(name) else {
            debug!("{}: no row for '{}', leaving file untouched", path.display(), name);
            summary.files_skipped += 1;
            continue;
        };

        debug!("writing {}", path.display());
        let warnings = merge_record(&mut root, record, &config.subtree);
        save_document(&path, &root, config.pretty)?;

        summary.files_written += 1;
        summary.warnings.extend(warnings);
    }

    Ok(summary)
}

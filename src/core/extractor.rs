//! XML → Table extraction
//!
//! Projects every record document onto a flat [`Record`]: the root element's
//! `name` attribute becomes the key and each immediate child of the configured
//! data subtree becomes a `(tag, text)` field.
//!
//! A document without the data subtree still yields a record, just one with no
//! fields. A malformed document aborts the whole extraction.
//!
//! Character data that is only whitespace is dropped by the XML parser, so a
//! tag like `<note>   </note>` extracts as the empty string. Merge treats an
//! empty cell as "leave alone", so such tags survive a round trip unchanged.

use crate::config::BalancerConfig;
use crate::core::element::{as_element, child_element, element_text};
use crate::core::table::Table;
use crate::io::discovery::discover_files;
use crate::io::xml_file::load_document;
use crate::types::{BalancerError, Record, Schema, NAME_COLUMN};
use std::path::Path;
use tracing::debug;
use xmltree::Element;

/// Read the record name from the root element
pub fn record_name<'a>(root: &'a Element, path: &Path) -> Result<&'a str, BalancerError> {
    root.attributes
        .get(NAME_COLUMN)
        .map(String::as_str)
        .ok_or_else(|| BalancerError::missing_attribute(&path.display().to_string(), NAME_COLUMN))
}

/// Project one parsed document onto a record
///
/// Repeated child tags keep the text of their first occurrence.
pub fn extract_record(root: &Element, subtree: &str, path: &Path) -> Result<Record, BalancerError> {
    let mut record = Record::new(record_name(root, path)?);

    let Some(data) = child_element(root, subtree) else {
        debug!("{}: no <{}> subtree", path.display(), subtree);
        return Ok(record);
    };

    for child in data.children.iter().filter_map(as_element) {
        if child.name == NAME_COLUMN {
            debug!("{}: ignoring <{}> data tag", path.display(), NAME_COLUMN);
            continue;
        }
        if !record.fields.contains_key(&child.name) {
            record.set(child.name.clone(), element_text(child));
        }
    }

    Ok(record)
}

/// Extract every record matched by the configured pattern
///
/// # Returns
///
/// The inferred schema (`name` first, remaining fields sorted) and the table
/// of records.
pub fn extract_table(config: &BalancerConfig) -> Result<(Schema, Table), BalancerError> {
    let mut table = Table::new();

    for path in discover_files(&config.pattern)? {
        debug!("reading {}", path.display());
        let root = load_document(&path)?;
        let record = extract_record(&root, &config.subtree, &path)?;
        if let Some(previous) = table.insert(record) {
            debug!(
                "{}: record '{}' already seen, keeping the later file",
                path.display(),
                previous.name
            );
        }
    }

    let schema = table.schema();
    Ok((schema, table))
}

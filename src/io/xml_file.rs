//! Loading and saving single XML record files
//!
//! Each record file is parsed into an owned `xmltree::Element` tree so the
//! merger can mutate it and write it back. A document is serialized in memory
//! before the destination is opened, so an emitter failure never truncates
//! the original file.

use crate::types::BalancerError;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use xmltree::{Element, EmitterConfig};

/// Parse the XML file at `path` into its root element
///
/// # Errors
///
/// * `BalancerError::Io` if the file cannot be opened
/// * `BalancerError::XmlParse` if the document is malformed
pub fn load_document(path: &Path) -> Result<Element, BalancerError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|e| BalancerError::io(&display, e))?;

    Element::parse(BufReader::new(file)).map_err(|e| BalancerError::xml_parse(&display, e))
}

/// Serialize `root` with an XML declaration, UTF-8 encoded
fn render_document(root: &Element, pretty: bool, display: &str) -> Result<Vec<u8>, BalancerError> {
    let config = EmitterConfig::new()
        .perform_indent(pretty)
        .indent_string("  ")
        .write_document_declaration(true);

    let mut buffer = Vec::new();
    root.write_with_config(&mut buffer, config)
        .map_err(|e| BalancerError::xml_write(display, e))?;
    if pretty {
        buffer.push(b'\n');
    }
    Ok(buffer)
}

/// Write `root` back to `path`, replacing the file contents
pub fn save_document(path: &Path, root: &Element, pretty: bool) -> Result<(), BalancerError> {
    let display = path.display().to_string();
    let buffer = render_document(root, pretty, &display)?;

    fs::write(path, buffer).map_err(|e| BalancerError::io(&display, e))
}

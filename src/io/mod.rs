//! I/O module
//!
//! Handles record file discovery, XML documents and CSV tables.
//!
//! # Components
//!
//! - `discovery` - Glob expansion of the record file set
//! - `xml_file` - Loading and saving single XML record documents
//! - `csv_format` - CSV format handling (table output and ingestion)

pub mod csv_format;
pub mod discovery;
pub mod xml_file;

pub use csv_format::{read_csv_file, read_table_csv, write_csv_file, write_table_csv};
pub use discovery::discover_files;
pub use xml_file::{load_document, save_document};

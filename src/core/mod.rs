//! Core conversion logic module
//!
//! This module contains the components that move data between XML records and
//! tables:
//! - `table` - Name-keyed record table and schema inference
//! - `element` - Helpers over immediate children of XML elements
//! - `extractor` - XML documents to records
//! - `merger` - Records back into XML documents

pub mod element;
pub mod extractor;
pub mod merger;
pub mod table;

pub use extractor::{extract_record, extract_table};
pub use merger::{merge_record, merge_table, MergeSummary};
pub use table::Table;

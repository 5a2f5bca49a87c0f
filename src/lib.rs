//! XML Balancer Library
//! # Overview
//!
//! This library converts a directory of XML game-data records into a flat CSV
//! table and merges edited CSV rows back into the original XML files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Record, Schema, errors and warnings)
//! - [`config`] - File pattern, data subtree and output settings
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Conversion logic:
//!   - [`core::table`] - Name-keyed record table and schema inference
//!   - [`core::extractor`] - XML documents to records
//!   - [`core::merger`] - Records back into XML documents
//! - [`io`] - File discovery, XML documents and CSV tables
//! - [`conversion`] - The `r` and `w` pipelines behind one trait
//!
//! # Record Layout
//!
//! Every record file holds one root element carrying a `name` attribute. The
//! immediate children of a configured subtree (`general` for outfits) are the
//! balanced fields:
//!
//! ```xml
//! <outfit name="Laser Cannon MK1">
//!   <general>
//!     <mass>4</mass>
//!     <price>12000</price>
//!   </general>
//! </outfit>
//! ```
//!
//! # Merge Rules
//!
//! - Empty CSV cells never modify the XML
//! - Repeated tags are collapsed to the first occurrence and reported
//! - Missing tags are appended to the end of the subtree
//! - Everything outside the touched tags is left as it was

// Module declarations
pub mod cli;
pub mod config;
pub mod conversion;
pub mod core;
pub mod io;
pub mod types;

pub use config::BalancerConfig;
pub use conversion::{create_conversion, Conversion, ConversionReport};
pub use crate::core::{extract_table, merge_table, Table};
pub use io::{read_table_csv, write_table_csv};
pub use types::{BalancerError, MergeWarning, Record, Schema};

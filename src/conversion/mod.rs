//! Conversion module
//!
//! Defines the two directions the balancer can run in behind a single
//! [`Conversion`] trait, so the CLI can pick one at runtime:
//!
//! - [`ExtractConversion`] (`r`): XML record files → CSV table
//! - [`MergeConversion`] (`w`): CSV table → XML record files, in place

use crate::cli::Mode;
use crate::config::BalancerConfig;
use crate::types::{BalancerError, MergeWarning};
use std::path::Path;

pub mod extract;
pub mod merge;

pub use extract::ExtractConversion;
pub use merge::MergeConversion;

/// What a conversion run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Records in the table that was written or merged
    pub records: usize,
    /// Columns in the CSV (including `name`)
    pub columns: usize,
    /// XML files rewritten
    pub files_written: usize,
    /// XML files left untouched because the CSV had no row for them
    pub files_skipped: usize,
    /// Non-fatal repairs made while merging
    pub warnings: Vec<MergeWarning>,
}

/// A complete conversion between the record file set and one CSV file
pub trait Conversion {
    /// Run the conversion against the CSV file at `csv_path`
    ///
    /// # Errors
    ///
    /// Any error aborts the run. For merges, files rewritten before the error
    /// keep their new contents.
    fn run(&self, csv_path: &Path) -> Result<ConversionReport, BalancerError>;
}

/// Create the conversion matching the selected CLI mode
pub fn create_conversion(mode: Mode, config: BalancerConfig) -> Box<dyn Conversion> {
    match mode {
        Mode::Read => Box::new(ExtractConversion::new(config)),
        Mode::Write => Box::new(MergeConversion::new(config)),
    }
}

//! CSV → XML conversion (`w` mode)
//!
//! Reads the CSV file into a table and merges it into every record file of the
//! configured pattern. Duplicate-tag repairs are carried back in the report
//! instead of being printed here.

use crate::config::BalancerConfig;
use crate::conversion::{Conversion, ConversionReport};
use crate::core::merge_table;
use crate::io::read_csv_file;
use crate::types::BalancerError;
use std::path::Path;
use tracing::info;

/// Writes a CSV file back into the record file set
#[derive(Debug, Clone)]
pub struct MergeConversion {
    config: BalancerConfig,
}

impl MergeConversion {
    pub fn new(config: BalancerConfig) -> Self {
        Self { config }
    }
}

impl Conversion for MergeConversion {
    fn run(&self, csv_path: &Path) -> Result<ConversionReport, BalancerError> {
        let table = read_csv_file(csv_path)?;
        let columns = table.schema().len();
        info!("loaded {} row(s) from {}", table.len(), csv_path.display());

        let summary = merge_table(&self.config, &table)?;

        Ok(ConversionReport {
            records: table.len(),
            columns,
            files_written: summary.files_written,
            files_skipped: summary.files_skipped,
            warnings: summary.warnings,
        })
    }
}

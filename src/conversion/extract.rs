//! XML → CSV conversion (`r` mode)
//!
//! Extracts every record file into a table, infers the schema and writes the
//! table to the CSV path. The XML files are only read.

use crate::config::BalancerConfig;
use crate::conversion::{Conversion, ConversionReport};
use crate::core::extract_table;
use crate::io::write_csv_file;
use crate::types::BalancerError;
use std::path::Path;
use tracing::info;

/// Reads the record file set into a CSV file
#[derive(Debug, Clone)]
pub struct ExtractConversion {
    config: BalancerConfig,
}

impl ExtractConversion {
    pub fn new(config: BalancerConfig) -> Self {
        Self { config }
    }
}

impl Conversion for ExtractConversion {
    fn run(&self, csv_path: &Path) -> Result<ConversionReport, BalancerError> {
        let (schema, table) = extract_table(&self.config)?;
        info!(
            "extracted {} record(s) with {} column(s) from {}",
            table.len(),
            schema.len(),
            self.config.pattern
        );

        write_csv_file(csv_path, &schema, &table)?;

        Ok(ConversionReport {
            records: table.len(),
            columns: schema.len(),
            ..ConversionReport::default()
        })
    }
}

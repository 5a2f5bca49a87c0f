//! CSV format handling for record tables
//!
//! This module centralizes all CSV format concerns, providing:
//! - Table output serialization (every field quoted, schema column order)
//! - Header-driven table ingestion keyed by the `name` column
//!
//! The reader/writer functions work on any `Read`/`Write` so they can be
//! tested without touching the filesystem; `read_csv_file`/`write_csv_file`
//! wrap them for paths.

use crate::core::element::is_tag_name;
use crate::core::table::Table;
use crate::types::{BalancerError, Record, Schema, NAME_COLUMN};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Write a table to CSV format
///
/// Writes the schema as the header row, then one row per record in table
/// order. Every field is quoted; fields a record does not carry are written as
/// empty strings so each row has exactly the schema's columns.
pub fn write_table_csv(
    schema: &Schema,
    table: &Table,
    output: &mut dyn Write,
) -> Result<(), BalancerError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(output);

    writer.write_record(schema.columns())?;

    for record in table.records() {
        writer.write_record(schema.columns().iter().map(|column| record.value(column)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Read a table from CSV format
///
/// Rows are keyed by their `name` cell. A later row with the same name
/// replaces the earlier one.
///
/// # Errors
///
/// * `BalancerError::MalformedRow` if the header has no `name` column, a
///   header is not a valid XML tag name, or a row has an empty `name` cell
/// * `BalancerError::CsvParse` if the CSV itself is malformed (for example a
///   row with a different number of fields than the header)
pub fn read_table_csv<R: Read>(input: R) -> Result<Table, BalancerError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader.headers()?.clone();
    if !headers.iter().any(|column| column == NAME_COLUMN) {
        return Err(BalancerError::malformed_row(
            1,
            "header has no 'name' column",
        ));
    }
    if let Some((index, column)) = headers
        .iter()
        .enumerate()
        .find(|(_, column)| !is_tag_name(column))
    {
        return Err(BalancerError::malformed_row(
            1,
            &format!(
                "column {} header {:?} is not a valid XML tag name",
                index + 1,
                column
            ),
        ));
    }

    let mut table = Table::new();
    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|pos| pos.line()).unwrap_or_default();
        let record = convert_csv_row(&row, &headers, line)?;

        if let Some(previous) = table.insert(record) {
            debug!(
                "line {}: row for '{}' replaces an earlier row",
                line, previous.name
            );
        }
    }

    Ok(table)
}

/// Convert one CSV row into a record
fn convert_csv_row(
    row: &StringRecord,
    headers: &StringRecord,
    line: u64,
) -> Result<Record, BalancerError> {
    let mut cells: HashMap<String, String> = row.deserialize(Some(headers))?;

    let name = match cells.remove(NAME_COLUMN) {
        Some(name) if !name.is_empty() => name,
        _ => return Err(BalancerError::malformed_row(line, "missing 'name' value")),
    };

    let mut record = Record::new(name);
    for (column, value) in cells {
        record.set(column, value);
    }
    Ok(record)
}

/// Write a table to the CSV file at `path`, replacing it
pub fn write_csv_file(path: &Path, schema: &Schema, table: &Table) -> Result<(), BalancerError> {
    let display = path.display().to_string();
    let file = File::create(path).map_err(|e| BalancerError::io(&display, e))?;
    let mut output = BufWriter::new(file);

    write_table_csv(schema, table, &mut output)?;
    output.flush().map_err(|e| BalancerError::io(&display, e))
}

/// Read a table from the CSV file at `path`
pub fn read_csv_file(path: &Path) -> Result<Table, BalancerError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|e| BalancerError::io(&display, e))?;

    read_table_csv(BufReader::new(file))
}

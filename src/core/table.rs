//! Name-keyed record table
//!
//! The [`Table`] is the in-memory meeting point of both conversion directions:
//! extraction fills it from XML files, CSV ingestion fills it from rows, and
//! the CSV writer and the merger read from it.
//!
//! # Duplicate Handling
//!
//! Inserting a record whose name is already present replaces the earlier
//! record (last write wins).

use crate::types::{Record, Schema};
use std::collections::btree_map::{BTreeMap, Values};

/// Records keyed by name, iterated in name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: BTreeMap<String, Record>,
}

impl Table {
    pub fn new() -> Self {
        Table {
            records: BTreeMap::new(),
        }
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// # Returns
    ///
    /// The replaced record, if there was one
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order
    pub fn records(&self) -> Values<'_, String, Record> {
        self.records.values()
    }

    /// Infer the CSV schema from every field carried by any record
    pub fn schema(&self) -> Schema {
        Schema::from_fields(
            self.records
                .values()
                .flat_map(|record| record.fields.keys().cloned()),
        )
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut table = Table::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

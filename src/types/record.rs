//! Record and schema types
//!
//! A [`Record`] is the tabular view of one XML record file: its `name`
//! attribute plus the flat child tags of its data subtree. A [`Schema`] is the
//! ordered column set used when the records are written as CSV.

use std::collections::{BTreeMap, BTreeSet};

/// Column and attribute that identifies a record
pub const NAME_COLUMN: &str = "name";

/// One record's field values
///
/// The key `name` never appears in `fields`; it lives in `name` so the
/// identity of a record cannot be overwritten by a data tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// Unique record name (the `name` attribute of the XML root element)
    pub name: String,

    /// Field name to text value
    pub fields: BTreeMap<String, String>,
}

impl Record {
    /// Create a record with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter, mostly useful in tests and fixtures
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field value, ignoring attempts to set `name` as a field
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        if field != NAME_COLUMN {
            self.fields.insert(field, value.into());
        }
    }

    /// Value of a column for CSV output
    ///
    /// Returns the record name for the `name` column and the empty string for
    /// fields this record does not carry.
    pub fn value(&self, column: &str) -> &str {
        if column == NAME_COLUMN {
            return &self.name;
        }
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Ordered CSV column set
///
/// Always starts with `name`; the remaining columns are sorted and unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Build a schema from any collection of observed field names
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = fields
            .into_iter()
            .map(Into::into)
            .filter(|field| field != NAME_COLUMN)
            .collect();

        let mut columns = Vec::with_capacity(sorted.len() + 1);
        columns.push(NAME_COLUMN.to_string());
        columns.extend(sorted);

        Schema { columns }
    }

    /// All columns, `name` first
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::from_fields(std::iter::empty::<String>())
    }
}

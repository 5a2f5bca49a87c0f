//! Error types for the XML balancer
//!
//! This module defines all error types that can occur while converting between
//! XML record files and CSV tables. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **XML Errors**: Malformed documents, missing `name` attribute, write failures
//! - **CSV Errors**: Malformed CSV, rows without a `name` value
//! - **Discovery Errors**: Invalid glob patterns
//!
//! Duplicate child tags are not errors: they are repaired during merge and
//! reported as [`MergeWarning`](crate::types::MergeWarning)s.

use thiserror::Error;

/// Main error type for the balancer
///
/// Every variant is fatal for the current invocation. Files already written
/// before the error stay written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalancerError {
    /// I/O error occurred while reading or writing files
    #[error("I/O error{}: {message}", path.as_ref().map(|p| format!(" on '{}'", p)).unwrap_or_default())]
    Io {
        /// Path involved in the failed operation (if known)
        path: Option<String>,
        /// Description of the I/O error
        message: String,
    },

    /// An XML record file could not be parsed
    #[error("XML parse error in '{path}': {message}")]
    XmlParse {
        /// File that failed to parse
        path: String,
        /// Parser diagnostic
        message: String,
    },

    /// The record element lacks a required attribute
    #[error("Missing attribute '{attribute}' on record element in '{path}'")]
    MissingAttribute {
        /// File whose root element lacks the attribute
        path: String,
        /// Name of the missing attribute
        attribute: String,
    },

    /// A CSV row cannot be keyed by record name
    #[error("Malformed CSV row at line {line}: {message}")]
    MalformedRow {
        /// Line number of the offending row
        line: u64,
        /// What is wrong with the row
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvParse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A modified XML tree could not be serialized
    #[error("Failed to write XML to '{path}': {message}")]
    XmlWrite {
        /// Destination file
        path: String,
        /// Emitter diagnostic
        message: String,
    },

    /// The file discovery pattern is not a valid glob
    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The rejected pattern
        pattern: String,
        /// Description of the pattern error
        message: String,
    },
}

// Conversion from io::Error to BalancerError
impl From<std::io::Error> for BalancerError {
    fn from(error: std::io::Error) -> Self {
        BalancerError::Io {
            path: None,
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BalancerError
impl From<csv::Error> for BalancerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BalancerError::CsvParse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BalancerError {
    /// Create an Io error bound to a path
    pub fn io(path: &str, error: std::io::Error) -> Self {
        BalancerError::Io {
            path: Some(path.to_string()),
            message: error.to_string(),
        }
    }

    /// Create an XmlParse error
    pub fn xml_parse(path: &str, message: impl ToString) -> Self {
        BalancerError::XmlParse {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a MissingAttribute error
    pub fn missing_attribute(path: &str, attribute: &str) -> Self {
        BalancerError::MissingAttribute {
            path: path.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// Create a MalformedRow error
    pub fn malformed_row(line: u64, message: &str) -> Self {
        BalancerError::MalformedRow {
            line,
            message: message.to_string(),
        }
    }

    /// Create an XmlWrite error
    pub fn xml_write(path: &str, message: impl ToString) -> Self {
        BalancerError::XmlWrite {
            path: path.to_string(),
            message: message.to_string(),
        }
    }

    /// Create an InvalidPattern error
    pub fn invalid_pattern(pattern: &str, message: impl ToString) -> Self {
        BalancerError::InvalidPattern {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }
}

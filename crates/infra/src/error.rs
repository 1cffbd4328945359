//! Bulk-load error model.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use liquorstore_inventory::InventoryError;

/// Which input stream a failure came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stream {
    Catalog,
    Quantities,
}

impl core::fmt::Display for Stream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Stream::Catalog => f.write_str("catalog"),
            Stream::Quantities => f.write_str("quantities"),
        }
    }
}

/// Load-level failure. Any of these aborts the whole load; the partially
/// built store is dropped with it.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Header row does not name the schema's fields, in order.
    #[error(
        "{stream}: header field {index} mismatch (expected {}, found {})",
        .expected.unwrap_or("<nothing>"),
        .found.as_deref().unwrap_or("<nothing>")
    )]
    Schema {
        stream: Stream,
        index: usize,
        expected: Option<&'static str>,
        found: Option<String>,
    },

    /// Data row has the wrong number of fields.
    #[error("{stream} line {line}: expected {expected} fields but found {found}")]
    MalformedRecord {
        stream: Stream,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Enumerated field holds a value outside the closed set.
    #[error("{stream} line {line}: unknown {field} value '{value}'")]
    UnknownEnumValue {
        stream: Stream,
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Numeric field does not parse as a non-negative number.
    #[error("{stream} line {line}: '{value}' is not a valid {field}")]
    NumericFormat {
        stream: Stream,
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Text field fails validation (empty id, blank name).
    #[error("{stream} line {line}: invalid {field}: {reason}")]
    InvalidField {
        stream: Stream,
        line: usize,
        field: &'static str,
        reason: String,
    },

    /// Quantity row names an id no catalog row defined.
    #[error("{stream} line {line}: unknown item '{id}'")]
    UnknownItem {
        stream: Stream,
        line: usize,
        id: String,
    },

    /// Store rejected a row for another reason (e.g. quantity overflow).
    #[error("{stream} line {line}: {source}")]
    Store {
        stream: Stream,
        line: usize,
        #[source]
        source: InventoryError,
    },

    /// Decoded field types do not fit the row being built.
    #[error("{stream} line {line}: decoded record does not match the row layout")]
    SchemaMismatch { stream: Stream, line: usize },

    /// The stream could not be opened.
    #[error("{stream}: cannot open {}: {source}", .path.display())]
    Open {
        stream: Stream,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed.
    #[error("{stream} line {line}: read failed: {source}")]
    Io {
        stream: Stream,
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Line the failure points at, when it points at one.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Schema { .. } => Some(1),
            LoadError::MalformedRecord { line, .. }
            | LoadError::UnknownEnumValue { line, .. }
            | LoadError::NumericFormat { line, .. }
            | LoadError::InvalidField { line, .. }
            | LoadError::UnknownItem { line, .. }
            | LoadError::Store { line, .. }
            | LoadError::SchemaMismatch { line, .. }
            | LoadError::Io { line, .. } => Some(*line),
            LoadError::Open { .. } => None,
        }
    }

    pub fn stream(&self) -> Stream {
        match self {
            LoadError::Schema { stream, .. }
            | LoadError::MalformedRecord { stream, .. }
            | LoadError::UnknownEnumValue { stream, .. }
            | LoadError::NumericFormat { stream, .. }
            | LoadError::InvalidField { stream, .. }
            | LoadError::UnknownItem { stream, .. }
            | LoadError::Store { stream, .. }
            | LoadError::SchemaMismatch { stream, .. }
            | LoadError::Open { stream, .. }
            | LoadError::Io { stream, .. } => *stream,
        }
    }
}

//! Line-level CSV record parsing.
//!
//! A [`RecordParser`] validates or skips the header line according to its
//! schema's [`HeaderPolicy`], then splits each data line on commas and decodes
//! every field with the schema's decoder.
//! Quoting and escaping are not supported.

use crate::csv::schema::{FieldError, FieldValue, HeaderPolicy, RecordSchema};
use crate::error::LoadError;

const DELIMITER: char = ',';

/// Turns text lines into decoded records according to a [`RecordSchema`].
#[derive(Debug, Clone, Copy)]
pub struct RecordParser {
    schema: RecordSchema,
}

impl RecordParser {
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Check the first line of the stream against the schema.
    ///
    /// `header` is `None` when the stream has no lines at all. Under
    /// [`HeaderPolicy::Skip`] anything (including nothing) is accepted.
    pub fn check_header(&self, header: Option<&str>) -> Result<(), LoadError> {
        if self.schema.header == HeaderPolicy::Skip {
            return Ok(());
        }

        let found: Vec<&str> = header.map(split).unwrap_or_default();
        let width = found.len().max(self.schema.arity());
        for index in 0..width {
            let expected = self.schema.fields.get(index).map(|f| f.name);
            let got = found.get(index).copied();
            if expected != got {
                return Err(LoadError::Schema {
                    stream: self.schema.stream,
                    index,
                    expected,
                    found: got.map(str::to_string),
                });
            }
        }
        Ok(())
    }

    /// Split and decode one data line. `line_no` is 1-based.
    pub fn parse(&self, line_no: usize, line: &str) -> Result<Vec<FieldValue>, LoadError> {
        let raw = split(line);
        if raw.len() != self.schema.arity() {
            return Err(LoadError::MalformedRecord {
                stream: self.schema.stream,
                line: line_no,
                expected: self.schema.arity(),
                found: raw.len(),
            });
        }

        self.schema
            .fields
            .iter()
            .zip(raw)
            .map(|(spec, value)| {
                (spec.decode)(value).map_err(|e| {
                    let stream = self.schema.stream;
                    let field = spec.name;
                    match e {
                        FieldError::UnknownEnumValue => LoadError::UnknownEnumValue {
                            stream,
                            line: line_no,
                            field,
                            value: value.to_string(),
                        },
                        FieldError::NumericFormat => LoadError::NumericFormat {
                            stream,
                            line: line_no,
                            field,
                            value: value.to_string(),
                        },
                        FieldError::Invalid(reason) => LoadError::InvalidField {
                            stream,
                            line: line_no,
                            field,
                            reason,
                        },
                    }
                })
            })
            .collect()
    }
}

/// Naive split; a trailing `\r` (CRLF input) is dropped first.
fn split(line: &str) -> Vec<&str> {
    line.strip_suffix('\r').unwrap_or(line).split(DELIMITER).collect()
}

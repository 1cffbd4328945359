//! Delimited-text records: declared field schemas and the record parser.
//!
//! The format is deliberately naive: records are split on every `,`, with no
//! quoting or escaping. A comma inside a free-text field shifts every later
//! field and the row fails its arity check.

pub mod parser;
pub mod schema;

pub use parser::RecordParser;
pub use schema::{
    CATALOG_SCHEMA, FieldError, FieldSpec, FieldValue, HeaderPolicy, QUANTITY_SCHEMA, RecordSchema,
};

//! Field schemas: an ordered list of `(name, decoder)` pairs per stream.

use liquorstore_core::ItemId;
use liquorstore_products::{BottleSize, Category, Price};

use crate::error::Stream;

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Id(ItemId),
    Text(String),
    Category(Category),
    Size(BottleSize),
    Price(Price),
    Quantity(u32),
}

/// Why a single field failed to decode. The parser adds stream, line and
/// field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownEnumValue,
    NumericFormat,
    Invalid(String),
}

pub type Decoder = fn(&str) -> Result<FieldValue, FieldError>;

/// Header name and decoder for one column.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub decode: Decoder,
}

/// What to do with the first line of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Must name every field exactly, in order.
    Validate,
    /// Read and discarded.
    Skip,
}

/// Fixed column layout of one input stream.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub stream: Stream,
    pub header: HeaderPolicy,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// `id,name,category,sizeClass,price`
pub const CATALOG_SCHEMA: RecordSchema = RecordSchema {
    stream: Stream::Catalog,
    header: HeaderPolicy::Validate,
    fields: &[
        FieldSpec { name: "id", decode: decode_id },
        FieldSpec { name: "name", decode: decode_name },
        FieldSpec { name: "category", decode: decode_category },
        FieldSpec { name: "sizeClass", decode: decode_size },
        FieldSpec { name: "price", decode: decode_price },
    ],
};

/// `id,quantity`
pub const QUANTITY_SCHEMA: RecordSchema = RecordSchema {
    stream: Stream::Quantities,
    header: HeaderPolicy::Skip,
    fields: &[
        FieldSpec { name: "id", decode: decode_id },
        FieldSpec { name: "quantity", decode: decode_quantity },
    ],
};

fn decode_id(raw: &str) -> Result<FieldValue, FieldError> {
    ItemId::new(raw)
        .map(FieldValue::Id)
        .map_err(|e| FieldError::Invalid(e.to_string()))
}

fn decode_name(raw: &str) -> Result<FieldValue, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::Invalid("name cannot be empty".to_string()));
    }
    Ok(FieldValue::Text(raw.to_string()))
}

fn decode_category(raw: &str) -> Result<FieldValue, FieldError> {
    raw.parse()
        .map(FieldValue::Category)
        .map_err(|_| FieldError::UnknownEnumValue)
}

fn decode_size(raw: &str) -> Result<FieldValue, FieldError> {
    raw.parse()
        .map(FieldValue::Size)
        .map_err(|_| FieldError::UnknownEnumValue)
}

fn decode_price(raw: &str) -> Result<FieldValue, FieldError> {
    raw.parse()
        .map(FieldValue::Price)
        .map_err(|_| FieldError::NumericFormat)
}

/// A non-negative whole number, optionally with one leading `+`.
fn decode_quantity(raw: &str) -> Result<FieldValue, FieldError> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NumericFormat);
    }
    digits
        .parse()
        .map(FieldValue::Quantity)
        .map_err(|_| FieldError::NumericFormat)
}

//! Bulk loader: catalog stream, then quantity stream, into a fresh store.

use std::io::{self, BufRead};

use serde::Serialize;
use tracing::debug;

use liquorstore_core::ItemId;
use liquorstore_inventory::{AddOutcome, InventoryError, InventoryStore};
use liquorstore_observability::LogSink;
use liquorstore_products::Item;

use crate::csv::{CATALOG_SCHEMA, FieldValue, QUANTITY_SCHEMA, RecordParser};
use crate::error::{LoadError, Stream};

/// Counters describing a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub items_created: usize,
    pub duplicates_suppressed: usize,
    pub quantity_records: usize,
    pub units_loaded: u64,
}

/// A populated store plus what it took to build it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub store: InventoryStore,
    pub report: LoadReport,
}

/// Drives the record parser over both input streams and applies each record
/// to a new [`InventoryStore`].
///
/// Loading is all-or-nothing: the store is only handed back when both streams
/// were consumed without error.
#[derive(Debug, Clone, Default)]
pub struct BulkLoader {
    log: LogSink,
}

impl BulkLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader (and resulting store) that write debug lines to `log`.
    pub fn with_log(log: LogSink) -> Self {
        Self { log }
    }

    /// Load from two buffered readers.
    pub fn load_readers<C, Q>(&self, catalog: C, quantities: Q) -> Result<LoadOutcome, LoadError>
    where
        C: BufRead,
        Q: BufRead,
    {
        self.load(catalog.lines(), quantities.lines())
    }

    /// Load from two line sequences.
    pub fn load<C, Q>(&self, catalog: C, quantities: Q) -> Result<LoadOutcome, LoadError>
    where
        C: IntoIterator<Item = io::Result<String>>,
        Q: IntoIterator<Item = io::Result<String>>,
    {
        let mut store = InventoryStore::with_log(self.log.clone());
        let mut report = LoadReport::default();

        self.load_catalog(&mut store, &mut report, catalog)?;
        self.load_quantities(&mut store, &mut report, quantities)?;

        self.log.emit(|| debug!(?report, "load complete"));
        Ok(LoadOutcome { store, report })
    }

    fn load_catalog<C>(
        &self,
        store: &mut InventoryStore,
        report: &mut LoadReport,
        lines: C,
    ) -> Result<(), LoadError>
    where
        C: IntoIterator<Item = io::Result<String>>,
    {
        let parser = RecordParser::new(CATALOG_SCHEMA);
        for record in data_lines(&parser, lines)? {
            let (line_no, line) = record?;
            self.log
                .emit(|| debug!(line = line_no, text = %line, "catalog record"));
            let values = parser.parse(line_no, &line)?;
            let item = build_item(values, line_no)?;

            match store.add_item(item) {
                AddOutcome::Created => report.items_created += 1,
                AddOutcome::Duplicate => report.duplicates_suppressed += 1,
            }
        }
        Ok(())
    }

    fn load_quantities<Q>(
        &self,
        store: &mut InventoryStore,
        report: &mut LoadReport,
        lines: Q,
    ) -> Result<(), LoadError>
    where
        Q: IntoIterator<Item = io::Result<String>>,
    {
        let parser = RecordParser::new(QUANTITY_SCHEMA);
        for record in data_lines(&parser, lines)? {
            let (line_no, line) = record?;
            self.log
                .emit(|| debug!(line = line_no, text = %line, "quantity record"));
            let values = parser.parse(line_no, &line)?;
            let (id, quantity) = match <[FieldValue; 2]>::try_from(values) {
                Ok([FieldValue::Id(id), FieldValue::Quantity(q)]) => (id, q),
                _ => {
                    return Err(LoadError::SchemaMismatch {
                        stream: Stream::Quantities,
                        line: line_no,
                    });
                }
            };

            store
                .add_stock(id.as_str(), quantity)
                .map_err(|e| quantity_error(e, &id, line_no))?;
            report.quantity_records += 1;
            report.units_loaded += u64::from(quantity);
        }
        Ok(())
    }
}

/// Consume and check the header, then yield the numbered data lines.
///
/// The header is line 1, so data lines start at 2.
fn data_lines<I>(
    parser: &RecordParser,
    lines: I,
) -> Result<impl Iterator<Item = Result<(usize, String), LoadError>>, LoadError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let stream = parser.schema().stream;
    let mut lines = lines.into_iter();

    let header = lines
        .next()
        .transpose()
        .map_err(|source| LoadError::Io { stream, line: 1, source })?;
    parser.check_header(header.as_deref())?;

    Ok(lines.enumerate().map(move |(n, line)| {
        let line_no = n + 2;
        line.map(|l| (line_no, l))
            .map_err(|source| LoadError::Io { stream, line: line_no, source })
    }))
}

fn build_item(values: Vec<FieldValue>, line_no: usize) -> Result<Item, LoadError> {
    let mismatch = || LoadError::SchemaMismatch {
        stream: Stream::Catalog,
        line: line_no,
    };
    let [
        FieldValue::Id(id),
        FieldValue::Text(name),
        FieldValue::Category(category),
        FieldValue::Size(size),
        FieldValue::Price(price),
    ] = <[FieldValue; 5]>::try_from(values).map_err(|_| mismatch())?
    else {
        return Err(mismatch());
    };

    Item::new(id, name, category, size, price).map_err(|e| LoadError::InvalidField {
        stream: Stream::Catalog,
        line: line_no,
        field: "name",
        reason: e.to_string(),
    })
}

fn quantity_error(err: InventoryError, id: &ItemId, line_no: usize) -> LoadError {
    match err {
        InventoryError::UnknownItem { .. } => LoadError::UnknownItem {
            stream: Stream::Quantities,
            line: line_no,
            id: id.to_string(),
        },
        other => LoadError::Store {
            stream: Stream::Quantities,
            line: line_no,
            source: other,
        },
    }
}

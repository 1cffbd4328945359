//! File-opening collaborator for the bulk loader.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use liquorstore_observability::LogSink;

use crate::config::LoaderConfig;
use crate::error::{LoadError, Stream};
use crate::loader::{BulkLoader, LoadOutcome};

/// Open both configured files and run a full load.
///
/// The store and loader log to a debug sink when `config.debug` is set.
pub fn load_from_config(config: &LoaderConfig) -> Result<LoadOutcome, LoadError> {
    let catalog = open(Stream::Catalog, &config.catalog_path)?;
    let quantities = open(Stream::Quantities, &config.quantities_path)?;

    BulkLoader::with_log(LogSink::from_flag(config.debug)).load_readers(catalog, quantities)
}

fn open(stream: Stream, path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            stream,
            path: path.to_path_buf(),
            source,
        })
}

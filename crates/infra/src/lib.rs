//! Infrastructure layer: data files, record parsing, bulk load, config.

pub mod config;
pub mod csv;
pub mod error;
pub mod files;
pub mod loader;

pub use config::LoaderConfig;
pub use error::{LoadError, Stream};
pub use files::load_from_config;
pub use loader::{BulkLoader, LoadOutcome, LoadReport};

//! Inventory domain module.
//!
//! The multi-index inventory store: one master record per item, on-hand
//! quantities kept beside it, and secondary indexes (category, bottle size,
//! price order) that every mutating call updates together. Deterministic,
//! in-memory domain logic (no IO, no storage).

pub mod error;
pub mod price_index;
pub mod store;

pub use error::{InventoryError, InventoryResult};
pub use price_index::PriceIndex;
pub use store::{AddOutcome, InventoryStore};

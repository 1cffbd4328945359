//! Products domain module.
//!
//! This crate contains the catalog entry model: the immutable [`Item`], the
//! closed tag enumerations it is indexed by and its [`Price`]. Pure domain
//! logic (no IO, no storage).

pub mod item;
pub mod price;
pub mod tags;

pub use item::Item;
pub use price::Price;
pub use tags::{BottleSize, Category};

//! Price-ordered secondary index.

use std::collections::BTreeMap;

use liquorstore_core::ItemId;
use liquorstore_products::Price;

/// Item ids ordered by ascending price, ties broken by insertion order.
///
/// Keys are `(price, insertion sequence)`, so the order is a strict total order
/// and a range query can seek straight to the first qualifying entry.
#[derive(Debug, Clone, Default)]
pub struct PriceIndex {
    entries: BTreeMap<(Price, u64), ItemId>,
    next_seq: u64,
}

impl PriceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, price: Price, id: ItemId) {
        self.entries.insert((price, self.next_seq), id);
        self.next_seq += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids with `min <= price <= max`, ascending.
    ///
    /// Empty when `min > max`.
    pub fn range(&self, min: Price, max: Price) -> impl Iterator<Item = &ItemId> + '_ {
        let entries = if min <= max {
            Some(self.entries.range((min, 0)..=(max, u64::MAX)))
        } else {
            None
        };
        entries.into_iter().flatten().map(|(_, id)| id)
    }

    /// Every id, ascending by price.
    pub fn iter(&self) -> impl Iterator<Item = (Price, &ItemId)> + '_ {
        self.entries.iter().map(|((price, _), id)| (*price, id))
    }
}

//! The multi-index inventory store.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use liquorstore_core::ItemId;
use liquorstore_observability::LogSink;
use liquorstore_products::{BottleSize, Category, Item, Price};

use crate::error::{InventoryError, InventoryResult};
use crate::price_index::PriceIndex;

/// Result of [`InventoryStore::add_item`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOutcome {
    /// The item was new and is now in every index.
    Created,
    /// An item with the same id already existed; nothing changed.
    Duplicate,
}

/// Single source of truth for items and their stock levels.
///
/// ## Invariants
///
/// - Every catalog item is in exactly one category bucket, exactly one size
///   bucket and exactly once in the price index.
/// - Every declared category and size has a bucket, empty or not.
/// - Quantities only exist for catalog ids and are never negative.
///
/// Each `&mut self` method either applies all of its index updates or none of
/// them. Query methods return owned copies, never views into the indexes.
#[derive(Debug)]
pub struct InventoryStore {
    catalog: HashMap<ItemId, Item>,
    quantities: HashMap<ItemId, u32>,
    by_category: BTreeMap<Category, BTreeSet<ItemId>>,
    by_size: BTreeMap<BottleSize, BTreeSet<ItemId>>,
    by_price: PriceIndex,
    log: LogSink,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryStore {
    /// Empty store that does not log.
    pub fn new() -> Self {
        Self::with_log(LogSink::disabled())
    }

    /// Empty store that writes its debug lines to `log`.
    pub fn with_log(log: LogSink) -> Self {
        Self {
            catalog: HashMap::new(),
            quantities: HashMap::new(),
            by_category: Category::ALL.into_iter().map(|c| (c, BTreeSet::new())).collect(),
            by_size: BottleSize::ALL.into_iter().map(|s| (s, BTreeSet::new())).collect(),
            by_price: PriceIndex::new(),
            log,
        }
    }

    /// Insert a new item into the catalog and every secondary index.
    ///
    /// First write wins: if the id is already known the call is a no-op and
    /// returns [`AddOutcome::Duplicate`]. Quantities are not touched.
    pub fn add_item(&mut self, item: Item) -> AddOutcome {
        if self.catalog.contains_key(item.item_id()) {
            self.log
                .emit(|| debug!(id = %item.item_id(), "skipping duplicate item"));
            return AddOutcome::Duplicate;
        }

        let id = item.item_id().clone();
        self.by_category
            .entry(item.category())
            .or_default()
            .insert(id.clone());
        self.by_size.entry(item.size()).or_default().insert(id.clone());
        self.by_price.insert(item.price(), id.clone());
        self.log.emit(|| debug!(item = %item, "added item"));
        self.catalog.insert(id, item);

        AddOutcome::Created
    }

    /// Build and insert an item from its attributes.
    pub fn define_item(
        &mut self,
        id: &str,
        name: &str,
        category: Category,
        size: BottleSize,
        price: Price,
    ) -> InventoryResult<AddOutcome> {
        let item = Item::new(ItemId::new(id)?, name, category, size, price)?;
        Ok(self.add_item(item))
    }

    /// Apply a signed change to an item's on-hand quantity.
    ///
    /// Returns the new quantity. Fails without changing anything when the id
    /// is unknown, when the result would be negative, or when it would not fit
    /// in a `u32`. A zero delta never creates a quantity entry.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> InventoryResult<u32> {
        let Some((key, _)) = self.catalog.get_key_value(id) else {
            self.log
                .emit(|| debug!(id, "item not found in catalog"));
            return Err(InventoryError::unknown_item(id));
        };

        let current = self.quantities.get(id).copied().unwrap_or(0);
        if delta == 0 {
            return Ok(current);
        }
        let insufficient = || InventoryError::InsufficientStock {
            id: id.to_string(),
            requested: delta.unsigned_abs(),
            available: current,
        };
        let overflow = || InventoryError::QuantityOverflow { id: id.to_string() };

        let updated = match i64::from(current).checked_add(delta) {
            Some(updated) if updated < 0 => None,
            Some(updated) => Some(u32::try_from(updated).map_err(|_| overflow())?),
            None if delta > 0 => return Err(overflow()),
            None => None,
        };
        let Some(updated) = updated else {
            self.log.emit(|| {
                debug!(id, current, requested = delta.unsigned_abs(), "not enough stock to remove")
            });
            return Err(insufficient());
        };

        self.quantities.insert(key.clone(), updated);
        self.log
            .emit(|| debug!(id, quantity = updated, "quantity updated"));
        Ok(updated)
    }

    /// `adjust_quantity(id, +qty)`.
    pub fn add_stock(&mut self, id: &str, qty: u32) -> InventoryResult<u32> {
        self.adjust_quantity(id, i64::from(qty))
    }

    /// `adjust_quantity(id, -qty)`.
    pub fn remove_stock(&mut self, id: &str, qty: u32) -> InventoryResult<u32> {
        self.adjust_quantity(id, -i64::from(qty))
    }

    /// On-hand quantity; zero for unknown ids and for items never stocked.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    pub fn item_by_id(&self, id: &str) -> Option<Item> {
        self.catalog.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.catalog.contains_key(id)
    }

    /// Every item, ascending by id.
    pub fn all_items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.catalog.values().cloned().collect();
        items.sort_by(|a, b| a.item_id().cmp(b.item_id()));
        items
    }

    /// Items in the category bucket, ascending by id.
    pub fn items_by_category(&self, category: Category) -> Vec<Item> {
        self.by_category
            .get(&category)
            .map(|ids| self.resolve(ids.iter()))
            .unwrap_or_default()
    }

    /// Items in the bottle-size bucket, ascending by id.
    pub fn items_by_origin_size(&self, size: BottleSize) -> Vec<Item> {
        self.by_size
            .get(&size)
            .map(|ids| self.resolve(ids.iter()))
            .unwrap_or_default()
    }

    /// Items with `min <= price <= max`, ascending by price (ties in insertion
    /// order). Empty when `min > max`.
    pub fn items_in_price_range(&self, min: Price, max: Price) -> Vec<Item> {
        self.resolve(self.by_price.range(min, max))
    }

    /// Number of catalog items.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Sum of every on-hand quantity.
    pub fn total_units(&self) -> u64 {
        self.quantities.values().map(|q| u64::from(*q)).sum()
    }

    fn resolve<'a>(&self, ids: impl Iterator<Item = &'a ItemId>) -> Vec<Item> {
        ids.filter_map(|id| self.catalog.get(id)).cloned().collect()
    }
}

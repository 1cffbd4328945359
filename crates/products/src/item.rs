use serde::{Deserialize, Serialize};

use liquorstore_core::{DomainError, Entity, ItemId};

use crate::price::Price;
use crate::tags::{BottleSize, Category};

/// Catalog entry: identity plus descriptive attributes.
///
/// Items are immutable once built. Identity is the [`ItemId`]; two items with
/// the same id are the same item even if their other attributes differ, which
/// is why equality and hashing are by id only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
    size: BottleSize,
    price: Price,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: Category,
        size: BottleSize,
        price: Price,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            category,
            size,
            price,
        })
    }

    pub fn item_id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn size(&self) -> BottleSize {
        self.size
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

/// Unchecked wire shape of an [`Item`]; deserialization goes through
/// [`Item::new`].
#[derive(Deserialize)]
struct ItemRecord {
    id: ItemId,
    name: String,
    category: Category,
    size: BottleSize,
    price: Price,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.id, record.name, record.category, record.size, record.price)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl core::hash::Hash for Item {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// `A1 - Widget - BOURBON - 750ml - $19.99`
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - {} - {} - {} - ${}",
            self.id,
            self.name,
            self.category,
            self.size.volume(),
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(id: &str, name: &str, price: u64) -> Item {
        Item::new(
            ItemId::new(id).unwrap(),
            name,
            Category::Bourbon,
            BottleSize::Fifth,
            Price::from_cents(price),
        )
        .unwrap()
    }

    #[test]
    fn new_item_rejects_blank_name() {
        let err = Item::new(
            ItemId::new("A1").unwrap(),
            "  ",
            Category::Gin,
            BottleSize::Pint,
            Price::ZERO,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn identity_is_the_id_only() {
        let a = test_item("A1", "Widget", 1999);
        let b = test_item("A1", "Other Widget", 500);
        let c = test_item("A2", "Widget", 1999);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_uses_volume_and_two_decimal_price() {
        let item = test_item("A1", "Widget", 1999);
        assert_eq!(item.to_string(), "A1 - Widget - BOURBON - 750ml - $19.99");
    }

    #[test]
    fn deserialization_applies_constructor_checks() {
        let item = test_item("A1", "Widget", 1999);
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name(), "Widget");
        assert_eq!(back.price(), Price::from_cents(1999));

        let blank = r#"{"id":"A1","name":"  ","category":"GIN","size":"PINT","price":0}"#;
        let err = serde_json::from_str::<Item>(blank).unwrap_err();
        assert!(err.to_string().contains("name cannot be empty"));
    }

    #[test]
    fn accessors_expose_attributes() {
        let item = test_item("A1", "Widget", 1999);
        assert_eq!(item.item_id().as_str(), "A1");
        assert_eq!(item.id().as_str(), "A1");
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.category(), Category::Bourbon);
        assert_eq!(item.size(), BottleSize::Fifth);
        assert_eq!(item.price(), Price::from_cents(1999));
    }
}

//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog item.
///
/// Catalog ids are free-form text keys supplied by the data files (e.g. `A1`).
/// The only rule is that they are non-empty and carry no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::invalid_id("ItemId: cannot be empty"));
        }
        if id.trim() != id {
            return Err(DomainError::invalid_id(format!(
                "ItemId: '{id}' has surrounding whitespace"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_rejects_empty() {
        let err = ItemId::new("").unwrap_err();
        match err {
            DomainError::InvalidId(_) => {}
            _ => panic!("Expected InvalidId for empty id"),
        }
    }

    #[test]
    fn item_id_rejects_surrounding_whitespace() {
        assert!(ItemId::new(" A1").is_err());
        assert!(ItemId::new("A1 ").is_err());
    }

    #[test]
    fn item_id_parses_and_displays_verbatim() {
        let id: ItemId = "BRB-001".parse().unwrap();
        assert_eq!(id.as_str(), "BRB-001");
        assert_eq!(id.to_string(), "BRB-001");
    }

    #[test]
    fn item_id_serializes_transparently() {
        let id = ItemId::new("A1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"A1\"");
        let back: ItemId = serde_json::from_str("\"A1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn item_id_deserialization_validates() {
        assert!(serde_json::from_str::<ItemId>("\"\"").is_err());
        assert!(serde_json::from_str::<ItemId>("\" A1\"").is_err());
    }
}

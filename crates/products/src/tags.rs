//! Closed tag enumerations used to bucket catalog items.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use liquorstore_core::DomainError;

/// Spirit category of an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Bourbon,
    Gin,
    Mezcal,
    Rum,
    Scotch,
    Tequila,
    Vodka,
    Whisky,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::Bourbon,
        Category::Gin,
        Category::Mezcal,
        Category::Rum,
        Category::Scotch,
        Category::Tequila,
        Category::Vodka,
        Category::Whisky,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bourbon => "BOURBON",
            Category::Gin => "GIN",
            Category::Mezcal => "MEZCAL",
            Category::Rum => "RUM",
            Category::Scotch => "SCOTCH",
            Category::Tequila => "TEQUILA",
            Category::Vodka => "VODKA",
            Category::Whisky => "WHISKY",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the upper-case tag.
impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::not_found(format!("category '{s}'")))
    }
}

/// Bottle size class of an item. Each class carries a fixed display volume.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BottleSize {
    Pint,
    Fifth,
    Liter,
    Handle,
}

impl BottleSize {
    /// Every size class, smallest first.
    pub const ALL: [BottleSize; 4] = [
        BottleSize::Pint,
        BottleSize::Fifth,
        BottleSize::Liter,
        BottleSize::Handle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BottleSize::Pint => "PINT",
            BottleSize::Fifth => "FIFTH",
            BottleSize::Liter => "LITER",
            BottleSize::Handle => "HANDLE",
        }
    }

    /// Display volume, e.g. `750ml` for a fifth.
    pub fn volume(self) -> &'static str {
        match self {
            BottleSize::Pint => "375ml",
            BottleSize::Fifth => "750ml",
            BottleSize::Liter => "1L",
            BottleSize::Handle => "1.75L",
        }
    }
}

impl core::fmt::Display for BottleSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the upper-case tag.
impl FromStr for BottleSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BottleSize::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| DomainError::not_found(format!("bottle size '{s}'")))
    }
}

//! Configuration loading and representation.

use std::path::PathBuf;

pub const CATALOG_PATH_VAR: &str = "LIQUORSTORE_CATALOG";
pub const QUANTITIES_PATH_VAR: &str = "LIQUORSTORE_QUANTITIES";
pub const DEBUG_VAR: &str = "LIQUORSTORE_DEBUG";

pub const DEFAULT_CATALOG_PATH: &str = "data/product_data.csv";
pub const DEFAULT_QUANTITIES_PATH: &str = "data/inventory_data.csv";

/// Where the startup data lives and whether debug lines are wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub catalog_path: PathBuf,
    pub quantities_path: PathBuf,
    pub debug: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            quantities_path: PathBuf::from(DEFAULT_QUANTITIES_PATH),
            debug: false,
        }
    }
}

impl LoaderConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            catalog_path: get(CATALOG_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            quantities_path: get(QUANTITIES_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.quantities_path),
            debug: get(DEBUG_VAR).is_some_and(|v| parse_flag(&v)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

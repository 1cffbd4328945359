//! One-shot query front end over a freshly loaded inventory.
//!
//! Each invocation parses one command, runs it against the store and renders
//! the result as text. There is no interactive loop and nothing persists.

use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use liquorstore_infra::LoadReport;
use liquorstore_inventory::{InventoryError, InventoryStore};
use liquorstore_products::{BottleSize, Category, Item, Price};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("could not find '{0}' in the inventory")]
    NotFound(String),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("failed to render summary: {0}")]
    Render(#[from] serde_json::Error),
}

/// Query the liquor inventory loaded from the configured CSV files.
#[derive(Debug, Parser)]
#[command(name = "liquorstore", version)]
pub struct Cli {
    /// Defaults to `summary` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, after checks clap cannot express.
    pub fn into_command(self) -> Result<Command, CliError> {
        let command = self.command.unwrap_or(Command::Summary);
        if let Command::Price { min, max } = command {
            if min > max {
                return Err(CliError::Usage(format!(
                    "the minimum price {min} must not exceed the maximum {max}"
                )));
            }
        }
        Ok(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print item and unit counts as JSON.
    Summary,
    /// List every item in the catalog.
    All,
    /// Show one item.
    Show { id: String },
    /// Show how many units of an item are in stock.
    Quantity { id: String },
    /// List items in a category.
    Category {
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    /// List items of a bottle size.
    Size {
        #[arg(value_parser = parse_size)]
        size: BottleSize,
    },
    /// List items priced between `min` and `max`, inclusive.
    Price { min: Price, max: Price },
    /// Add units of an item to stock.
    Add { id: String, qty: u32 },
    /// Remove units of an item from stock.
    Remove { id: String, qty: u32 },
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    items: usize,
    units: u64,
    load: &'a LoadReport,
    by_category: BTreeMap<Category, usize>,
    by_size: BTreeMap<BottleSize, usize>,
}

/// Run `command` against the store and render its output.
pub fn execute(
    store: &mut InventoryStore,
    report: &LoadReport,
    command: Command,
) -> Result<String, CliError> {
    match command {
        Command::Summary => {
            let summary = Summary {
                items: store.len(),
                units: store.total_units(),
                load: report,
                by_category: Category::ALL
                    .into_iter()
                    .map(|c| (c, store.items_by_category(c).len()))
                    .collect(),
                by_size: BottleSize::ALL
                    .into_iter()
                    .map(|s| (s, store.items_by_origin_size(s).len()))
                    .collect(),
            };
            Ok(serde_json::to_string_pretty(&summary)?)
        }
        Command::All => Ok(render_items(&store.all_items())),
        Command::Show { id } => store
            .item_by_id(&id)
            .map(|item| item.to_string())
            .ok_or(CliError::NotFound(id)),
        Command::Quantity { id } => {
            let item = store.item_by_id(&id).ok_or_else(|| CliError::NotFound(id.clone()))?;
            Ok(format!(
                "Found {} \"{}\" in stock.",
                store.quantity_of(&id),
                item.name()
            ))
        }
        Command::Category { category } => Ok(render_items(&store.items_by_category(category))),
        Command::Size { size } => Ok(render_items(&store.items_by_origin_size(size))),
        Command::Price { min, max } => Ok(render_items(&store.items_in_price_range(min, max))),
        Command::Add { id, qty } => {
            let now = store.add_stock(&id, qty)?;
            Ok(format!("Added {qty} of '{id}'; {now} now in stock."))
        }
        Command::Remove { id, qty } => {
            let now = store.remove_stock(&id, qty)?;
            Ok(format!("Removed {qty} of '{id}'; {now} now in stock."))
        }
    }
}

fn render_items(items: &[Item]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }
    items
        .iter()
        .map(|item| format!("\t{item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse().map_err(|_| {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("expected one of {}", names.join(", "))
    })
}

fn parse_size(raw: &str) -> Result<BottleSize, String> {
    raw.parse().map_err(|_| {
        let names: Vec<&str> = BottleSize::ALL.iter().map(|s| s.as_str()).collect();
        format!("expected one of {}", names.join(", "))
    })
}

//! Factory assembly, item loading and the day loop.

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use gildedrose_inventory::rules::{calculator_for_rule, standard_calculators};
use gildedrose_inventory::{InventoryItem, InventoryItemFactory, Item};

use crate::config::SimConfig;

/// Build the factory described by `config`.
///
/// Fails if the default rule or any listed rule name is unknown.
pub fn build_factory(config: &SimConfig) -> anyhow::Result<InventoryItemFactory> {
    let default_calculator = calculator_for_rule(&config.default_rule)
        .with_context(|| format!("resolving default rule {:?}", config.default_rule))?;

    let mut builder = InventoryItemFactory::builder().default_calculator(default_calculator);

    match &config.rules {
        Some(names) => {
            for name in names {
                let calculator = calculator_for_rule(name)
                    .with_context(|| format!("resolving rule {name:?}"))?;
                builder = builder.calculator(calculator);
            }
        }
        None => {
            for calculator in standard_calculators() {
                builder = builder.calculator(calculator);
            }
        }
    }

    Ok(builder.build()?)
}

/// Items from the configured JSON file, or the built-in sample inventory.
pub fn load_items(config: &SimConfig) -> anyhow::Result<Vec<Item>> {
    match &config.inventory_path {
        Some(path) => read_items(path),
        None => Ok(sample_items()),
    }
}

fn read_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading inventory file {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("parsing inventory file {}", path.display()))
}

/// Parse a JSON array of `{"name", "category", "sell_in", "quality"}` objects.
pub fn parse_items(json: &str) -> anyhow::Result<Vec<Item>> {
    Ok(serde_json::from_str(json)?)
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", "misc", 10, 20),
        Item::new("Aged Brie", "aged", 2, 0),
        Item::new("Elixir of the Mongoose", "misc", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", "legendary", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", "legendary", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", "backstage pass", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", "backstage pass", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", "backstage pass", 5, 49),
        Item::new("Conjured Mana Cake", "conjured", 3, 6),
    ]
}

/// Report day 0, then advance every item once per day and report again.
pub fn run(
    factory: &InventoryItemFactory,
    items: Vec<Item>,
    days: u32,
    out: &mut impl Write,
) -> anyhow::Result<Vec<InventoryItem>> {
    let mut inventory: Vec<InventoryItem> = items
        .into_iter()
        .map(|item| factory.get_inventory_item(item))
        .collect();

    tracing::info!(items = inventory.len(), days, "starting simulation");

    for day in 0..=days {
        if day > 0 {
            for inv in inventory.iter_mut() {
                inv.advance_day();
            }
        }
        report_day(day, &inventory, out)?;
    }

    Ok(inventory)
}

fn report_day(day: u32, inventory: &[InventoryItem], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "-------- day {day} --------")?;
    writeln!(out, "name, category, sell_in, quality")?;
    for inv in inventory {
        writeln!(out, "{}", inv.item())?;
    }
    writeln!(out)
}

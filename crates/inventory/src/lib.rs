//! Inventory domain module (quality rules).
//!
//! This crate pairs each stocked item with the quality rule that ages it,
//! implemented purely as deterministic domain logic (no IO, no storage).
//!
//! Flow: [`InventoryItemFactory`] resolves a [`QualityCalculator`] for an
//! [`Item`], binds both into an [`InventoryItem`], and the driver calls
//! [`InventoryItem::advance_day`] once per simulated day.

pub mod calculator;
pub mod factory;
pub mod item;
pub mod rules;

pub use calculator::{DefaultQualityCalculator, MAX_QUALITY, MIN_QUALITY, QualityCalculator};
pub use factory::{InventoryItemFactory, InventoryItemFactoryBuilder};
pub use item::{InventoryItem, Item};
pub use rules::{
    AgedQualityCalculator, BackstagePassQualityCalculator, ConjuredQualityCalculator,
    LegendaryQualityCalculator,
};

//! Calculator registry and inventory item resolution.

use std::sync::Arc;

use gildedrose_core::{DomainError, DomainResult};

use crate::calculator::QualityCalculator;
use crate::item::{InventoryItem, Item};

/// Binds items to the quality calculator that should age them.
///
/// ## Resolution order
///
/// Registered calculators are kept in **registration order** and membership is
/// by instance identity (`Arc::ptr_eq`). Resolution walks that order and picks
/// the first calculator whose `applies_to` returns true, falling back to the
/// default calculator. Removing a calculator and adding it back moves it to
/// the end.
///
/// The registry belongs to the factory; mutating it requires `&mut self`.
/// Items already handed out keep the calculator they were bound to.
#[derive(Debug, Clone)]
pub struct InventoryItemFactory {
    default_calculator: Arc<dyn QualityCalculator>,
    calculators: Vec<Arc<dyn QualityCalculator>>,
}

impl InventoryItemFactory {
    pub fn new(default_calculator: Arc<dyn QualityCalculator>) -> Self {
        Self {
            default_calculator,
            calculators: Vec::new(),
        }
    }

    pub fn builder() -> InventoryItemFactoryBuilder {
        InventoryItemFactoryBuilder::default()
    }

    pub fn default_calculator(&self) -> &Arc<dyn QualityCalculator> {
        &self.default_calculator
    }

    /// Register a calculator. Returns `false` if this instance was already registered.
    pub fn add_quality_calculator(&mut self, calculator: Arc<dyn QualityCalculator>) -> bool {
        if self.contains(&calculator) {
            return false;
        }

        tracing::debug!(calculator = calculator.name(), "registered quality calculator");
        self.calculators.push(calculator);
        true
    }

    /// Deregister a calculator. Returns `false` if it was not registered.
    pub fn remove_quality_calculator(&mut self, calculator: &Arc<dyn QualityCalculator>) -> bool {
        let before = self.calculators.len();
        self.calculators.retain(|c| !Arc::ptr_eq(c, calculator));

        let removed = self.calculators.len() != before;
        if removed {
            tracing::debug!(calculator = calculator.name(), "removed quality calculator");
        }
        removed
    }

    pub fn contains(&self, calculator: &Arc<dyn QualityCalculator>) -> bool {
        self.calculators.iter().any(|c| Arc::ptr_eq(c, calculator))
    }

    /// Registered calculators, in resolution order (the default is not included).
    pub fn calculators(&self) -> impl Iterator<Item = &Arc<dyn QualityCalculator>> {
        self.calculators.iter()
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }

    /// The calculator an item would be bound to right now.
    pub fn resolve(&self, item: &Item) -> &Arc<dyn QualityCalculator> {
        self.calculators
            .iter()
            .find(|c| c.applies_to(item))
            .unwrap_or(&self.default_calculator)
    }

    /// Wrap `item` with the first applicable registered calculator, or the default.
    pub fn get_inventory_item(&self, item: Item) -> InventoryItem {
        let calculator = Arc::clone(self.resolve(&item));

        tracing::debug!(
            item = %item.name,
            category = %item.category,
            calculator = calculator.name(),
            "resolved quality calculator"
        );

        InventoryItem::new(item, calculator)
    }

    /// Build an [`Item`] from raw fields, then resolve it like [`Self::get_inventory_item`].
    pub fn get_inventory_item_from_parts(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
        sell_in: i32,
        quality: i32,
    ) -> InventoryItem {
        self.get_inventory_item(Item::new(name, category, sell_in, quality))
    }
}

/// Incremental construction of an [`InventoryItemFactory`].
///
/// Useful when the default calculator comes from configuration and may be
/// missing; `build` refuses to produce a factory without one.
#[derive(Debug, Default)]
pub struct InventoryItemFactoryBuilder {
    default_calculator: Option<Arc<dyn QualityCalculator>>,
    calculators: Vec<Arc<dyn QualityCalculator>>,
}

impl InventoryItemFactoryBuilder {
    pub fn default_calculator(mut self, calculator: Arc<dyn QualityCalculator>) -> Self {
        self.default_calculator = Some(calculator);
        self
    }

    pub fn calculator(mut self, calculator: Arc<dyn QualityCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    pub fn build(self) -> DomainResult<InventoryItemFactory> {
        let default_calculator = self.default_calculator.ok_or_else(|| {
            DomainError::invalid_argument("default quality calculator is required")
        })?;

        let mut factory = InventoryItemFactory::new(default_calculator);
        for calculator in self.calculators {
            factory.add_quality_calculator(calculator);
        }
        Ok(factory)
    }
}

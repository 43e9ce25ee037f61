use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calculator::QualityCalculator;

/// A stocked item as read and written by the outside world.
///
/// No validation happens here: out-of-range values are accepted and it is up
/// to the bound calculator to keep `quality` within its own bounds going
/// forward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Display name; not unique.
    pub name: String,
    /// Rule dispatch key.
    pub category: String,
    /// Days left to sell. Goes negative once the sell-by date has passed.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        sell_in: i32,
        quality: i32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name, self.category, self.sell_in, self.quality
        )
    }
}

/// An [`Item`] permanently bound to the calculator resolved for it.
///
/// The binding is fixed at construction: later changes to the factory's
/// registry never affect an item that is already ticking.
#[derive(Debug, Clone)]
pub struct InventoryItem {
    item: Item,
    calculator: Arc<dyn QualityCalculator>,
}

impl InventoryItem {
    pub fn new(item: Item, calculator: Arc<dyn QualityCalculator>) -> Self {
        Self { item, calculator }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn into_item(self) -> Item {
        self.item
    }

    pub fn calculator(&self) -> &Arc<dyn QualityCalculator> {
        &self.calculator
    }

    /// Age the wrapped item by exactly one day using the bound calculator.
    pub fn advance_day(&mut self) {
        self.calculator.update(&mut self.item);

        tracing::trace!(
            item = %self.item.name,
            calculator = self.calculator.name(),
            sell_in = self.item.sell_in,
            quality = self.item.quality,
            "advanced one day"
        );
    }
}

//! Quality calculator abstraction and the default aging rule.

use crate::item::Item;

/// Lowest quality any bundled rule will produce.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a rule that raises quality will produce.
pub const MAX_QUALITY: i32 = 50;

/// A per-category rule that ages an item by one day.
///
/// Calculators are stateless and shared: one instance may be bound to many
/// items at once (hence `Send + Sync`).
///
/// ## Contract
///
/// - `applies_to` is a pure predicate. It must be deterministic and must not
///   observe anything but the item it is given.
/// - `update` advances `sell_in` and `quality` by exactly one day. It must not
///   panic for any item it claims via `applies_to`. Calling it on an item it
///   does not claim is a caller bug; implementations do not re-check.
pub trait QualityCalculator: core::fmt::Debug + Send + Sync {
    /// Short, stable rule name (used in logs and reports).
    fn name(&self) -> &'static str;

    fn applies_to(&self, item: &Item) -> bool;

    fn update(&self, item: &mut Item);
}

/// The fallback rule for ordinary items.
///
/// Each day `sell_in` drops by one and `quality` drops by one, or by two once
/// the sell-by date has passed (`sell_in <= 0` before the update). Quality
/// never goes below [`MIN_QUALITY`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DefaultQualityCalculator;

impl QualityCalculator for DefaultQualityCalculator {
    fn name(&self) -> &'static str {
        "default"
    }

    fn applies_to(&self, _item: &Item) -> bool {
        true
    }

    fn update(&self, item: &mut Item) {
        degrade(item, 1);
    }
}

/// Shared degrading step: `per_day` before sell-by, double that after.
pub(crate) fn degrade(item: &mut Item, per_day: i32) {
    let loss = if item.sell_in > 0 {
        per_day
    } else {
        per_day.saturating_mul(2)
    };

    item.sell_in = item.sell_in.saturating_sub(1);
    item.quality = item.quality.saturating_sub(loss).max(MIN_QUALITY);
}

/// Raise quality by `by`, capped at [`MAX_QUALITY`].
///
/// An item that already sits above the cap is left where it is.
pub(crate) fn improve(item: &mut Item, by: i32) {
    if item.quality < MAX_QUALITY {
        item.quality = item.quality.saturating_add(by).min(MAX_QUALITY);
    }
}

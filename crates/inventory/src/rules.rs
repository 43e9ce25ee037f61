//! Category-specific quality rules.
//!
//! Each rule claims exactly one category (compared trimmed and
//! case-insensitively), so the bundled rules never overlap and resolution
//! order between them does not matter.

use std::sync::Arc;

use gildedrose_core::{DomainError, DomainResult};

use crate::calculator::{DefaultQualityCalculator, MIN_QUALITY, QualityCalculator, degrade, improve};
use crate::factory::InventoryItemFactory;
use crate::item::Item;

pub const AGED_CATEGORY: &str = "aged";
pub const LEGENDARY_CATEGORY: &str = "legendary";
pub const BACKSTAGE_PASS_CATEGORY: &str = "backstage pass";
pub const CONJURED_CATEGORY: &str = "conjured";

fn in_category(item: &Item, category: &str) -> bool {
    item.category.trim().eq_ignore_ascii_case(category)
}

/// Items that get better with age: +1 a day, +2 once past sell-by, capped.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct AgedQualityCalculator;

impl QualityCalculator for AgedQualityCalculator {
    fn name(&self) -> &'static str {
        AGED_CATEGORY
    }

    fn applies_to(&self, item: &Item) -> bool {
        in_category(item, AGED_CATEGORY)
    }

    fn update(&self, item: &mut Item) {
        let gain = if item.sell_in > 0 { 1 } else { 2 };
        item.sell_in = item.sell_in.saturating_sub(1);
        improve(item, gain);
    }
}

/// Items that never need to be sold and never change.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct LegendaryQualityCalculator;

impl QualityCalculator for LegendaryQualityCalculator {
    fn name(&self) -> &'static str {
        LEGENDARY_CATEGORY
    }

    fn applies_to(&self, item: &Item) -> bool {
        in_category(item, LEGENDARY_CATEGORY)
    }

    fn update(&self, _item: &mut Item) {}
}

/// Event passes: gain value as the date approaches, worthless afterwards.
///
/// | `sell_in` before the day | quality change |
/// |--------------------------|----------------|
/// | > 10                     | +1             |
/// | 6..=10                   | +2             |
/// | 1..=5                    | +3             |
/// | <= 0                     | drops to 0     |
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct BackstagePassQualityCalculator;

impl QualityCalculator for BackstagePassQualityCalculator {
    fn name(&self) -> &'static str {
        BACKSTAGE_PASS_CATEGORY
    }

    fn applies_to(&self, item: &Item) -> bool {
        in_category(item, BACKSTAGE_PASS_CATEGORY)
    }

    fn update(&self, item: &mut Item) {
        match item.sell_in {
            ..=0 => item.quality = MIN_QUALITY,
            1..=5 => improve(item, 3),
            6..=10 => improve(item, 2),
            _ => improve(item, 1),
        }
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

/// Conjured items degrade twice as fast as ordinary ones.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ConjuredQualityCalculator;

impl QualityCalculator for ConjuredQualityCalculator {
    fn name(&self) -> &'static str {
        CONJURED_CATEGORY
    }

    fn applies_to(&self, item: &Item) -> bool {
        in_category(item, CONJURED_CATEGORY)
    }

    fn update(&self, item: &mut Item) {
        degrade(item, 2);
    }
}

/// One fresh instance of every bundled category rule, in a fixed order.
pub fn standard_calculators() -> Vec<Arc<dyn QualityCalculator>> {
    vec![
        Arc::new(AgedQualityCalculator),
        Arc::new(LegendaryQualityCalculator),
        Arc::new(BackstagePassQualityCalculator),
        Arc::new(ConjuredQualityCalculator),
    ]
}

/// A factory with the default rule as fallback and every bundled rule registered.
pub fn standard_factory() -> InventoryItemFactory {
    let mut factory = InventoryItemFactory::new(Arc::new(DefaultQualityCalculator));
    for calculator in standard_calculators() {
        factory.add_quality_calculator(calculator);
    }
    factory
}

/// Look up a bundled rule by name (`default`, `aged`, `legendary`,
/// `backstage pass`, `conjured`).
pub fn calculator_for_rule(name: &str) -> DomainResult<Arc<dyn QualityCalculator>> {
    let key = name.trim().to_ascii_lowercase();
    let calculator: Arc<dyn QualityCalculator> = match key.as_str() {
        "default" => Arc::new(DefaultQualityCalculator),
        AGED_CATEGORY => Arc::new(AgedQualityCalculator),
        LEGENDARY_CATEGORY => Arc::new(LegendaryQualityCalculator),
        BACKSTAGE_PASS_CATEGORY => Arc::new(BackstagePassQualityCalculator),
        CONJURED_CATEGORY => Arc::new(ConjuredQualityCalculator),
        "" => return Err(DomainError::invalid_argument("rule name cannot be empty")),
        _ => {
            return Err(DomainError::invalid_argument(format!(
                "unknown quality rule: {name}"
            )));
        }
    };
    Ok(calculator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::MAX_QUALITY;
    use proptest::prelude::*;

    fn age(calculator: &dyn QualityCalculator, sell_in: i32, quality: i32) -> (i32, i32) {
        let mut item = Item::new("test item", "any", sell_in, quality);
        calculator.update(&mut item);
        (item.sell_in, item.quality)
    }

    #[test]
    fn aged_items_gain_quality() {
        assert_eq!(age(&AgedQualityCalculator, 2, 0), (1, 1));
        assert_eq!(age(&AgedQualityCalculator, 0, 10), (-1, 12));
        assert_eq!(age(&AgedQualityCalculator, -3, 49), (-4, 50));
        assert_eq!(age(&AgedQualityCalculator, 5, 50), (4, 50));
    }

    #[test]
    fn legendary_items_never_change() {
        assert_eq!(age(&LegendaryQualityCalculator, 0, 80), (0, 80));
        assert_eq!(age(&LegendaryQualityCalculator, -1, 80), (-1, 80));
    }

    #[test]
    fn backstage_passes_gain_faster_then_expire() {
        assert_eq!(age(&BackstagePassQualityCalculator, 15, 20), (14, 21));
        assert_eq!(age(&BackstagePassQualityCalculator, 11, 20), (10, 21));
        assert_eq!(age(&BackstagePassQualityCalculator, 10, 20), (9, 22));
        assert_eq!(age(&BackstagePassQualityCalculator, 6, 20), (5, 22));
        assert_eq!(age(&BackstagePassQualityCalculator, 5, 20), (4, 23));
        assert_eq!(age(&BackstagePassQualityCalculator, 1, 20), (0, 23));
        assert_eq!(age(&BackstagePassQualityCalculator, 0, 20), (-1, 0));
        assert_eq!(age(&BackstagePassQualityCalculator, 5, 49), (4, MAX_QUALITY));
    }

    #[test]
    fn conjured_items_degrade_twice_as_fast() {
        assert_eq!(age(&ConjuredQualityCalculator, 3, 6), (2, 4));
        assert_eq!(age(&ConjuredQualityCalculator, 0, 6), (-1, 2));
        assert_eq!(age(&ConjuredQualityCalculator, 0, 3), (-1, 0));
    }

    #[test]
    fn category_match_ignores_case_and_padding() {
        let item = Item::new("Backstage passes to a TAFKAL80ETC concert", " Backstage Pass ", 10, 20);
        assert!(BackstagePassQualityCalculator.applies_to(&item));
        assert!(!AgedQualityCalculator.applies_to(&item));
    }

    #[test]
    fn standard_factory_routes_each_category() {
        let factory = standard_factory();
        let cases = [
            ("Aged Brie", "aged", "aged"),
            ("Sulfuras, Hand of Ragnaros", "legendary", "legendary"),
            ("Backstage passes to a TAFKAL80ETC concert", "backstage pass", "backstage pass"),
            ("Conjured Mana Cake", "conjured", "conjured"),
            ("+5 Dexterity Vest", "misc", "default"),
        ];

        for (name, category, expected) in cases {
            let inv = factory.get_inventory_item_from_parts(name, category, 5, 10);
            assert_eq!(inv.calculator().name(), expected, "{name}");
        }
    }

    #[test]
    fn calculator_for_rule_knows_bundled_rules() {
        for name in ["default", "aged", "Legendary", " backstage pass ", "CONJURED"] {
            assert!(calculator_for_rule(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn calculator_for_rule_rejects_unknown_and_empty_names() {
        match calculator_for_rule("vintage") {
            Err(DomainError::InvalidArgument(msg)) if msg.contains("vintage") => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
        match calculator_for_rule("  ") {
            Err(DomainError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: at most one bundled rule claims any given item.
        #[test]
        fn bundled_rules_are_mutually_exclusive(category in "[ a-zA-Z]{0,16}") {
            let item = Item::new("probe", category, 1, 1);
            let claims = standard_calculators()
                .iter()
                .filter(|c| c.applies_to(&item))
                .count();
            prop_assert!(claims <= 1);
        }

        /// Property: rules that raise quality stay within [0, 50] from in-range starts.
        #[test]
        fn improving_rules_stay_in_bounds(
            sell_in in -20i32..30,
            quality in 0i32..=50,
            days in 0usize..60,
        ) {
            for calculator in [
                &AgedQualityCalculator as &dyn QualityCalculator,
                &BackstagePassQualityCalculator,
            ] {
                let mut item = Item::new("probe", "any", sell_in, quality);
                for _ in 0..days {
                    calculator.update(&mut item);
                    prop_assert!((MIN_QUALITY..=MAX_QUALITY).contains(&item.quality));
                }
            }
        }
    }
}

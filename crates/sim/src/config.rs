//! Driver configuration from environment variables.

use std::path::PathBuf;

use gildedrose_observability::LogFormat;

pub const DAYS_VAR: &str = "GILDEDROSE_DAYS";
pub const INVENTORY_VAR: &str = "GILDEDROSE_INVENTORY";
pub const LOG_FORMAT_VAR: &str = "GILDEDROSE_LOG_FORMAT";
pub const RULES_VAR: &str = "GILDEDROSE_RULES";
pub const DEFAULT_RULE_VAR: &str = "GILDEDROSE_DEFAULT_RULE";

pub const DEFAULT_DAYS: u32 = 2;
pub const DEFAULT_RULE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Days to simulate after the initial (day 0) report.
    pub days: u32,
    /// JSON item list; the built-in sample inventory is used when unset.
    pub inventory_path: Option<PathBuf>,
    /// Rule used when no registered rule claims an item.
    pub default_rule: String,
    /// Rules to register, in resolution order. `None` registers every bundled rule.
    pub rules: Option<Vec<String>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            inventory_path: None,
            default_rule: DEFAULT_RULE.to_string(),
            rules: None,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(DAYS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(days) => config.days = days,
                Err(e) => tracing::warn!(
                    "{DAYS_VAR}={raw:?} is not a day count ({e}); using {DEFAULT_DAYS}"
                ),
            }
        }

        config.inventory_path = get(INVENTORY_VAR).map(PathBuf::from);

        if let Some(raw) = get(DEFAULT_RULE_VAR) {
            config.default_rule = raw.trim().to_string();
        }

        config.rules = get(RULES_VAR).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        });

        config
    }
}

/// Log format requested via `GILDEDROSE_LOG_FORMAT`.
///
/// Read separately from [`SimConfig`] because logging has to be up before the
/// rest of the config can report problems.
pub fn log_format_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LogFormat, String> {
    match lookup(LOG_FORMAT_VAR) {
        Some(raw) if !raw.trim().is_empty() => raw.parse(),
        _ => Ok(LogFormat::default()),
    }
}

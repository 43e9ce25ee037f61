use anyhow::Context;

use gildedrose_sim::SimConfig;
use gildedrose_sim::config::{LOG_FORMAT_VAR, log_format_from_lookup};
use gildedrose_sim::simulation::{build_factory, load_items, run};

fn main() -> anyhow::Result<()> {
    let log_format = log_format_from_lookup(|key| std::env::var(key).ok());
    gildedrose_observability::init(log_format.clone().unwrap_or_default());
    if let Err(e) = log_format {
        tracing::warn!("{LOG_FORMAT_VAR}: {e}; using default format");
    }

    let config = SimConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let factory = build_factory(&config)?;
    let items = load_items(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&factory, items, config.days, &mut out).context("writing report")?;

    Ok(())
}

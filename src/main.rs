//! msgcache - Fixed-capacity message caches over a flat-file store
//!
//! Workload driver binary: synthesizes messages, persists them to the
//! flat-file store, exercises the LRU and random caches under an identical
//! access pattern, and reports comparative hit/miss statistics.

mod cache;
mod config;
mod error;
mod message;
mod store;
mod workload;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use workload::run_comparison;

/// Main entry point for the cache comparison driver.
///
/// # Run Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the comparison workload (store + both caches)
/// 4. Log the comparative statistics and print the report as JSON
fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "msgcache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cache comparison driver");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, total_messages={}, message_length={}, access_count={}, workload_seed={}, store_path={}",
        config.cache_capacity,
        config.total_messages,
        config.message_length,
        config.access_count,
        config.workload_seed,
        config.store_path
    );

    let report = run_comparison(&config).context("comparison workload failed")?;

    info!(
        "LRU cache: hits={}, misses={}, evictions={}, hit_rate={:.4}",
        report.lru.hits, report.lru.misses, report.lru.evictions, report.lru.hit_rate
    );
    info!(
        "Random cache: hits={}, misses={}, evictions={}, hit_rate={:.4}",
        report.random.hits, report.random.misses, report.random.evictions, report.random.hit_rate
    );
    info!(store_fallbacks = report.store_fallbacks, "store re-fetches after LRU misses");

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");

    Ok(())
}

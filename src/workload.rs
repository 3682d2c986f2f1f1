//! Workload Module
//!
//! Synthesizes messages, drives both caches under an identical random
//! access pattern, and reports comparative hit/miss statistics.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::cache::{Cache, CacheStats, LruCache, RandomCache};
use crate::config::Config;
use crate::error::Result;
use crate::message::Message;
use crate::store::MessageStore;

/// Characters used for generated message content
const CONTENT_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.?!";

// == Synthesis ==
/// Generates a random word of the given length from the content charset.
pub fn random_word(rng: &mut SmallRng, length: usize) -> String {
    (0..length)
        .map(|_| CONTENT_CHARSET[rng.gen_range(0..CONTENT_CHARSET.len())] as char)
        .collect()
}

/// Generates `count` messages with sequential ids and random content.
pub fn generate_messages(count: usize, content_length: usize, rng: &mut SmallRng) -> Vec<Message> {
    (0..count)
        .map(|i| {
            Message::new(
                format!("MSG-{i:06}"),
                "sender",
                "receiver",
                random_word(rng, content_length),
            )
        })
        .collect()
}

// == Report ==
/// Counters of one cache at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub hit_rate: f64,
}

impl From<&CacheStats> for CacheReport {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Comparative statistics of one workload run.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub cache_capacity: usize,
    pub total_messages: usize,
    pub access_count: usize,
    pub lru: CacheReport,
    pub random: CacheReport,
    /// LRU misses satisfied by re-fetching from the durable store
    pub store_fallbacks: u64,
}

// == Comparison Run ==
/// Exercises the LRU and random caches under one synthetic workload.
///
/// Clears the store, generates the configured number of messages, appends
/// each to the store and puts it into both caches, then issues random-id
/// lookups against both. An LRU miss falls back to the store; the
/// reconstructed message is re-put into the LRU cache.
pub fn run_comparison(config: &Config) -> Result<ComparisonReport> {
    let mut rng = SmallRng::seed_from_u64(config.workload_seed);
    let store = MessageStore::new(&config.store_path);
    store.clear()?;

    let messages = generate_messages(config.total_messages, config.message_length, &mut rng);
    info!(count = messages.len(), "generated synthetic messages");

    let mut lru = LruCache::new(config.cache_capacity);
    // Derived seed keeps the replacement stream independent of the workload
    let mut random = RandomCache::new(config.cache_capacity, config.workload_seed.wrapping_add(1));

    for message in &messages {
        store.append(message)?;
        lru.put(message.clone())?;
        random.put(message.clone())?;
    }
    debug!(
        lru_resident = lru.len(),
        random_resident = random.len(),
        "caches populated"
    );

    let mut store_fallbacks = 0u64;
    if !messages.is_empty() {
        for _ in 0..config.access_count {
            let target = &messages[rng.gen_range(0..messages.len())];
            let id = target.id();

            if lru.get(id).is_none() {
                if let Some(found) = store.find(id)? {
                    store_fallbacks += 1;
                    lru.put(found)?;
                }
            }
            random.get(id);
        }
    }

    Ok(ComparisonReport {
        cache_capacity: config.cache_capacity,
        total_messages: config.total_messages,
        access_count: config.access_count,
        lru: lru.stats().into(),
        random: random.stats().into(),
        store_fallbacks,
    })
}

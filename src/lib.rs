//! msgcache - Fixed-capacity message caches over a flat-file store
//!
//! Provides an LRU cache and a random-eviction baseline behind one
//! interface, a durable append-only message store, and a synthetic
//! workload driver comparing the two eviction policies.

pub mod cache;
pub mod config;
pub mod error;
pub mod message;
pub mod store;
pub mod workload;

pub use cache::{Cache, CacheStats, LruCache, PutOutcome, RandomCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use message::Message;
pub use store::MessageStore;

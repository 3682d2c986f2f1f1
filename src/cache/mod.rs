//! Cache Module
//!
//! Two fixed-capacity in-memory caches over the same interface: an LRU
//! cache with strict recency eviction and a random-eviction baseline used
//! to compare replacement-policy quality.

mod lru;
mod random;
mod stats;


// Re-export public types
pub use lru::LruCache;
pub use random::RandomCache;
pub use stats::CacheStats;

use crate::error::Result;
use crate::message::Message;

// == Public Constants ==
/// Default number of resident messages per cache
pub const DEFAULT_CAPACITY: usize = 16;

// == Put Outcome ==
/// Result of admitting a message into a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// The message was freshly inserted
    Inserted,
    /// A resident message with the same id had its content updated in place
    Updated,
}

// == Cache Trait ==
/// Common interface exposed by both cache variants to the workload driver.
pub trait Cache {
    /// Admits a message, evicting per the cache's replacement policy when full.
    fn put(&mut self, message: Message) -> Result<PutOutcome>;

    /// Looks up a resident message by id, counting a hit or a miss.
    fn get(&mut self, id: &str) -> Option<&Message>;

    /// Returns the cumulative hit/miss/eviction counters.
    fn stats(&self) -> &CacheStats;

    /// Returns the number of resident messages.
    fn len(&self) -> usize;

    /// Returns true if no messages are resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every resident message and resets the counters.
    fn clear(&mut self);
}

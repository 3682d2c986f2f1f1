//! Random Cache Module
//!
//! Fixed-array cache with uniform-random replacement, used as a baseline
//! to compare eviction-policy quality against the LRU cache.
//!
//! A `put` draws a uniformly random slot in [0, N) and unconditionally
//! overwrites it, whether the slot is empty or holds a resident message
//! (possibly one just inserted). No ordering is maintained; lookup is a
//! linear scan over all slots.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cache::{Cache, CacheStats, PutOutcome};
use crate::error::{CacheError, Result};
use crate::message::Message;

// == Random Cache ==
/// Fixed-capacity cache replacing a uniformly random slot on every put.
#[derive(Debug)]
pub struct RandomCache {
    /// Slot array; a slot is either empty or holds one resident message
    slots: Vec<Option<Message>>,
    /// Replacement-slot generator, seeded for reproducible runs
    rng: SmallRng,
    /// Performance counters
    stats: CacheStats,
}

impl RandomCache {
    // == Constructor ==
    /// Creates an empty cache of `capacity` slots with a seeded generator.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            rng: SmallRng::seed_from_u64(seed),
            stats: CacheStats::new(),
        }
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the ids of all resident messages, in slot order.
    pub fn resident_ids(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|m| m.id()))
            .collect()
    }
}

impl Cache for RandomCache {
    /// Places the message in a uniformly random slot, displacing whatever
    /// resident happened to occupy it.
    ///
    /// Ids are never deduplicated, so a re-put of a resident id simply
    /// lands in another random slot.
    fn put(&mut self, message: Message) -> Result<PutOutcome> {
        if self.slots.is_empty() {
            return Err(CacheError::ZeroCapacity(message.id().to_string()));
        }

        let idx = self.rng.gen_range(0..self.slots.len());
        if self.slots[idx].is_some() {
            self.stats.record_eviction();
        }
        self.slots[idx] = Some(message);
        Ok(PutOutcome::Inserted)
    }

    /// Scans every slot for a matching id; slot placement is never altered.
    fn get(&mut self, id: &str) -> Option<&Message> {
        let pos = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().map_or(false, |m| m.id() == id));

        match pos {
            Some(idx) => {
                self.stats.record_hit();
                self.slots[idx].as_ref()
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empties every slot and resets the counters.
    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.stats.reset();
    }
}

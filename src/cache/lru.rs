//! LRU Cache Module
//!
//! Bounded associative cache with O(1) amortized get/put and strict
//! recency-based eviction.
//!
//! A `HashMap` maps each resident id to a slot in a node arena; the nodes
//! form a doubly linked recency list threaded through the arena by index,
//! ordered from most-recently-used (head) to least-recently-used (tail).
//! An eviction only ever happens while admitting a new message, so the
//! evicted node's slot is reused immediately and the arena never holds a
//! vacant slot.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{Cache, CacheStats, PutOutcome};
use crate::error::{CacheError, Result};
use crate::message::Message;

// == Cache Node ==
/// One resident message plus its recency-list links.
#[derive(Debug)]
struct Node {
    message: Message,
    /// Arena slot of the next most recently used node
    prev: Option<usize>,
    /// Arena slot of the next least recently used node
    next: Option<usize>,
}

// == LRU Cache ==
/// Fixed-capacity cache evicting the least-recently-used message on overflow.
#[derive(Debug)]
pub struct LruCache {
    /// id -> arena slot of the resident node
    index: HashMap<String, usize>,
    /// Node arena; every slot holds a resident node
    nodes: Vec<Node>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot
    tail: Option<usize>,
    /// Maximum number of resident messages
    capacity: usize,
    /// Performance counters
    stats: CacheStats,
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` messages.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            capacity,
            stats: CacheStats::new(),
        }
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Peek ==
    /// Returns the least recently used message without touching it.
    pub fn peek_lru(&self) -> Option<&Message> {
        self.tail.map(|idx| &self.nodes[idx].message)
    }

    /// Returns the most recently used message without touching it.
    pub fn peek_mru(&self) -> Option<&Message> {
        self.head.map(|idx| &self.nodes[idx].message)
    }

    // == Recency Walk ==
    /// Returns resident ids ordered from most to least recently used.
    pub fn recency_keys(&self) -> Vec<&str> {
        let mut keys = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            keys.push(self.nodes[idx].message.id());
            cursor = self.nodes[idx].next;
        }
        keys
    }

    // == List Maintenance ==
    /// Unlinks the node at `idx` from the recency list.
    fn detach(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    /// Links the node at `idx` at the head of the recency list.
    fn attach_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;

        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(idx);
        }
        self.head = Some(idx);

        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    // == Consistency Check ==
    /// Verifies the index/list bijection and double-link integrity.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.nodes.len(), "index/arena size mismatch");
        assert!(self.nodes.len() <= self.capacity, "capacity exceeded");

        let mut visited = 0;
        let mut expected_prev = None;
        let mut cursor = self.head;
        let mut last = None;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            assert_eq!(node.prev, expected_prev, "broken prev link at {idx}");
            assert_eq!(
                self.index.get(node.message.id()),
                Some(&idx),
                "index does not point at list node for {}",
                node.message.id()
            );
            visited += 1;
            expected_prev = Some(idx);
            last = Some(idx);
            cursor = node.next;
        }
        assert_eq!(visited, self.nodes.len(), "list does not cover every node");
        assert_eq!(last, self.tail, "tail does not terminate the list");
    }
}

impl Cache for LruCache {
    /// Admits a message at the most-recently-used position.
    ///
    /// If the id is already resident, its content is replaced in place and
    /// its node relinked at the head (`Updated`); the hit/miss counters are
    /// not touched. Otherwise the current tail is evicted first when the
    /// cache is full, and the new message is linked at the head
    /// (`Inserted`). Admission into a zero-capacity cache fails without
    /// mutating any state.
    fn put(&mut self, message: Message) -> Result<PutOutcome> {
        if let Some(&idx) = self.index.get(message.id()) {
            self.nodes[idx].message.content = message.content;
            self.detach(idx);
            self.attach_front(idx);
            return Ok(PutOutcome::Updated);
        }

        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity(message.id().to_string()));
        }

        let slot = if self.nodes.len() == self.capacity {
            // Full: evict the tail and reuse its arena slot.
            let Some(tail_idx) = self.tail else {
                // Full implies a non-empty list; unreachable with capacity > 0.
                return Err(CacheError::ZeroCapacity(message.id().to_string()));
            };
            self.detach(tail_idx);
            let evicted = &self.nodes[tail_idx].message;
            debug!(id = evicted.id(), "evicting least recently used message");
            self.index.remove(evicted.id());
            self.stats.record_eviction();

            self.nodes[tail_idx] = Node {
                message,
                prev: None,
                next: None,
            };
            tail_idx
        } else {
            self.nodes.push(Node {
                message,
                prev: None,
                next: None,
            });
            self.nodes.len() - 1
        };

        self.index
            .insert(self.nodes[slot].message.id().to_string(), slot);
        self.attach_front(slot);
        Ok(PutOutcome::Inserted)
    }

    /// Looks up a resident message, relinking it at the head on a hit.
    ///
    /// A miss leaves the recency list untouched.
    fn get(&mut self, id: &str) -> Option<&Message> {
        let idx = match self.index.get(id) {
            Some(&idx) => idx,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        self.detach(idx);
        self.attach_front(idx);
        self.stats.record_hit();
        Some(&self.nodes[idx].message)
    }

    fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every resident message and resets the counters.
    ///
    /// Safe to call on an empty cache.
    fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.stats.reset();
    }
}

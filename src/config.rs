//! Configuration Module
//!
//! Handles loading and managing driver configuration from environment variables.

use std::env;

/// Workload driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of entries each cache can hold
    pub cache_capacity: usize,
    /// Number of synthetic messages to generate
    pub total_messages: usize,
    /// Length of generated message content in characters
    pub message_length: usize,
    /// Number of random lookups issued against each cache
    pub access_count: usize,
    /// Seed for the workload's pseudo-random generator
    pub workload_seed: u64,
    /// Path of the flat-file message store
    pub store_path: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Entries per cache (default: 16)
    /// - `TOTAL_MESSAGES` - Synthetic messages generated (default: 1000)
    /// - `MESSAGE_LENGTH` - Content length in characters (default: 20)
    /// - `ACCESS_COUNT` - Random lookups per cache (default: 1000)
    /// - `WORKLOAD_SEED` - PRNG seed for reproducible runs (default: 42)
    /// - `STORE_PATH` - Message store file path (default: message_store.txt)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(16),
            total_messages: env::var("TOTAL_MESSAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            message_length: env::var("MESSAGE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            access_count: env::var("ACCESS_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            workload_seed: env::var("WORKLOAD_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(42),
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "message_store.txt".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 16,
            total_messages: 1000,
            message_length: 20,
            access_count: 1000,
            workload_seed: 42,
            store_path: "message_store.txt".into(),
        }
    }
}

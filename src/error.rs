//! Error types for the message cache crate
//!
//! Provides unified error handling using thiserror.
//!
//! A cache `get` miss or a store `find` miss is a normal outcome and is
//! communicated as `None`, never through this enum.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for caches and the durable store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Store file could not be opened, read, or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cache constructed with zero capacity cannot admit any entry
    #[error("cache has zero capacity, cannot admit {0}")]
    ZeroCapacity(String),

    /// Message rejected before any I/O (empty field, embedded delimiter)
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// A store record matched by id but could not be reconstructed
    #[error("malformed store record: {0}")]
    MalformedRecord(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache and store operations.
pub type Result<T> = std::result::Result<T, CacheError>;

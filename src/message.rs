//! Message Module
//!
//! Defines the message record cached in memory and persisted to the store.

use chrono::Utc;

// == Message ==
/// A single message record keyed by a unique string identifier.
///
/// The id is immutable once assigned; the payload fields are plain owned
/// strings and may be mutated by the owning container (a cache update
/// replaces `content` in place). Exactly one container owns a `Message`
/// at a time, so eviction drops the record rather than handing it off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique identifier, e.g. "MSG-000042"
    id: String,
    /// Creation time as an RFC 3339 string
    pub timestamp: String,
    /// Originating party
    pub sender: String,
    /// Destination party
    pub receiver: String,
    /// Message body
    pub content: String,
}

impl Message {
    // == Constructor ==
    /// Creates a new message stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            sender: sender.into(),
            receiver: receiver.into(),
            content: content.into(),
        }
    }

    // == Reconstruction ==
    /// Rebuilds a message with an explicit timestamp.
    ///
    /// Used by the store when reconstructing a record from its line format.
    pub fn from_parts(
        id: impl Into<String>,
        timestamp: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            content: content.into(),
        }
    }

    // == Id ==
    /// Returns the message identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    // == Fields ==
    /// Returns every field as a (name, value) pair, in store line order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("id", &self.id),
            ("timestamp", &self.timestamp),
            ("sender", &self.sender),
            ("receiver", &self.receiver),
            ("content", &self.content),
        ]
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_new() {
        let msg = Message::new("MSG-000001", "alice", "bob", "hello");

        assert_eq!(msg.id(), "MSG-000001");
        assert_eq!(msg.sender, "alice");
        assert_eq!(msg.receiver, "bob");
        assert_eq!(msg.content, "hello");
        assert!(!msg.timestamp.is_empty());
    }

    #[test]
    fn test_message_timestamp_is_rfc3339() {
        let msg = Message::new("MSG-000002", "alice", "bob", "hello");

        assert!(chrono::DateTime::parse_from_rfc3339(&msg.timestamp).is_ok());
    }

    #[test]
    fn test_message_from_parts_preserves_timestamp() {
        let msg = Message::from_parts("MSG-000003", "2024-01-01T00:00:00Z", "a", "b", "c");

        assert_eq!(msg.timestamp, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_message_fields_order() {
        let msg = Message::from_parts("i", "t", "s", "r", "c");
        let names: Vec<&str> = msg.fields().iter().map(|(name, _)| *name).collect();

        assert_eq!(names, ["id", "timestamp", "sender", "receiver", "content"]);
    }
}

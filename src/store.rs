//! Message Store Module
//!
//! Durable flat-file persistence for messages: append-only writes and
//! linear-scan retrieval by id.
//!
//! Each record is one line of delimiter-separated fields:
//!
//! ```text
//! id|timestamp|sender|receiver|content\n
//! ```
//!
//! This line format is the store's only external contract.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CacheError, Result};
use crate::message::Message;

/// Field separator within a record line.
pub const FIELD_DELIMITER: char = '|';

// == Message Store ==
/// Append-only flat-file store with linear-scan lookup.
#[derive(Debug)]
pub struct MessageStore {
    /// Path of the backing file
    path: PathBuf,
}

impl MessageStore {
    // == Constructor ==
    /// Creates a store handle rooted at the given file path.
    ///
    /// The file itself is created lazily on the first `append`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Clear ==
    /// Truncates the store to empty. Idempotent.
    pub fn clear(&self) -> Result<()> {
        File::create(&self.path)?;
        debug!(path = %self.path.display(), "message store cleared");
        Ok(())
    }

    // == Append ==
    /// Appends one message as a single record line.
    ///
    /// Every field is validated before any I/O: an empty field, or a field
    /// containing the delimiter or a newline, is rejected so no partial or
    /// ambiguous line is ever written. The whole line is written with one
    /// `write_all` call.
    pub fn append(&self, message: &Message) -> Result<()> {
        for (name, value) in message.fields() {
            if value.is_empty() {
                return Err(CacheError::InvalidMessage(format!("{name} is empty")));
            }
            if value.contains(FIELD_DELIMITER) || value.contains('\n') {
                return Err(CacheError::InvalidMessage(format!(
                    "{name} contains a reserved character"
                )));
            }
        }

        let line = format!(
            "{id}{d}{ts}{d}{from}{d}{to}{d}{body}\n",
            id = message.id(),
            ts = message.timestamp,
            from = message.sender,
            to = message.receiver,
            body = message.content,
            d = FIELD_DELIMITER,
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    // == Find ==
    /// Scans records from the start of the file and returns the first whose
    /// id matches, with all fields reconstructed as independent copies.
    ///
    /// Returns `Ok(None)` when no record matches or the store file does not
    /// exist yet; other I/O errors propagate.
    pub fn find(&self, id: &str) -> Result<Option<Message>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        for line in BufReader::new(file).lines() {
            let line = line?;
            match line.split_once(FIELD_DELIMITER) {
                Some((record_id, rest)) if record_id == id => {
                    return Self::parse_rest(id, rest).map(Some);
                }
                _ => {}
            }
        }

        Ok(None)
    }

    /// Reconstructs the remaining fields of a line whose id already matched.
    fn parse_rest(id: &str, rest: &str) -> Result<Message> {
        let mut parts = rest.splitn(4, FIELD_DELIMITER);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(timestamp), Some(sender), Some(receiver), Some(content)) => Ok(
                Message::from_parts(id, timestamp, sender, receiver, content),
            ),
            _ => Err(CacheError::MalformedRecord(format!(
                "record {id} has missing fields"
            ))),
        }
    }
}

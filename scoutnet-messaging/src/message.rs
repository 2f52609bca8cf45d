//! Message and thread identity types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scoutnet_common::types::ProfileRef;

/// Thread between two participants, independent of who wrote first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadKey {
    low: Uuid,
    high: Uuid,
}

impl ThreadKey {
    pub fn between(a: Uuid, b: Uuid) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn includes(&self, participant: Uuid) -> bool {
        self.low == participant || self.high == participant
    }

    pub fn participants(&self) -> (Uuid, Uuid) {
        (self.low, self.high)
    }
}

/// A stored message. `content` is always the raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned ID
    pub id: Uuid,
    pub thread: ThreadKey,
    /// Author, with the role their profile declared when the message was
    /// written. Reads decide redaction on this recorded role; a later role
    /// change on the profile does not reach messages already stored.
    pub sender: ProfileRef,
    pub recipient_id: Uuid,
    pub content: String,
    /// Server-assigned timestamp
    pub sent_at: DateTime<Utc>,
    /// Recorded as counterpart content rather than through the send check
    #[serde(default)]
    pub inbound: bool,
}

impl Message {
    /// Stamp a new message with a fresh ID and the current time
    pub fn new(sender: ProfileRef, recipient_id: Uuid, content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            thread: ThreadKey::between(sender.profile_id, recipient_id),
            sender,
            recipient_id,
            content: content.to_string(),
            sent_at: Utc::now(),
            inbound: false,
        }
    }

    /// Stamp counterpart content written by `sender`
    pub fn inbound(sender: ProfileRef, recipient_id: Uuid, content: &str) -> Self {
        Self {
            inbound: true,
            ..Self::new(sender, recipient_id, content)
        }
    }
}

/// Receipt returned to the composer once a message is appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAccepted {
    pub message_id: Uuid,
    pub thread: ThreadKey,
    pub sent_at: DateTime<Utc>,
}

impl From<&Message> for MessageAccepted {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id,
            thread: message.thread,
            sent_at: message.sent_at,
        }
    }
}

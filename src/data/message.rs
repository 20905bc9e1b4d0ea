//! Message records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The most recent message of a chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message id
    pub id: String,
    /// Text body
    pub content: String,
    /// When the message was created (RFC 3339 when serialized)
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(id: impl Into<String>, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at,
        }
    }
}

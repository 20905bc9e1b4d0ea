//! Conversation participants

use serde::{Deserialize, Serialize};

/// A participant in a chat room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar image URI
    pub image_uri: String,
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_uri: image_uri.into(),
        }
    }
}

//! Chat room records and peer lookup

use crate::data::message::Message;
use crate::data::user::User;
use serde::{Deserialize, Serialize};

/// Number of participants every chat room has
pub const ROOM_PARTICIPANTS: usize = 2;

/// A conversation: its participants and its most recent message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    /// Unique room id, also the list row key
    pub id: String,
    /// Exactly two participants: the local user and the peer
    pub users: Vec<User>,
    /// Most recent message
    pub last_message: Message,
}

impl ChatRoom {
    /// Create a new chat room
    pub fn new(id: impl Into<String>, users: Vec<User>, last_message: Message) -> Self {
        Self {
            id: id.into(),
            users,
            last_message,
        }
    }

    /// The participant who is not `local_user_id`
    ///
    /// Returns `None` unless exactly one participant differs from the local
    /// user, so a room the local user is not part of has no peer.
    pub fn peer_of(&self, local_user_id: &str) -> Option<&User> {
        if !self.users.iter().any(|u| u.id == local_user_id) {
            return None;
        }

        let mut others = self.users.iter().filter(|u| u.id != local_user_id);
        match (others.next(), others.next()) {
            (Some(peer), None) => Some(peer),
            _ => None,
        }
    }

    /// Check the data model invariants, returning a reason on failure
    pub fn check(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("empty id".to_string());
        }
        if self.users.len() != ROOM_PARTICIPANTS {
            return Err(format!(
                "expected {} users, found {}",
                ROOM_PARTICIPANTS,
                self.users.len()
            ));
        }
        Ok(())
    }
}

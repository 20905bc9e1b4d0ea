//! Read-only chat room providers

use crate::data::chat_room::ChatRoom;
use crate::data::mock;
use crate::{Error, Result};
use std::collections::HashSet;

/// Ordered, read-only sequence of chat rooms
///
/// The order of `chat_rooms()` is the display order.
pub trait ChatRoomSource {
    /// All chat rooms in display order
    fn chat_rooms(&self) -> &[ChatRoom];

    /// Number of chat rooms
    fn len(&self) -> usize {
        self.chat_rooms().len()
    }

    /// Whether the source has no chat rooms
    fn is_empty(&self) -> bool {
        self.chat_rooms().is_empty()
    }

    /// Chat room at `index`
    fn get(&self, index: usize) -> Option<&ChatRoom> {
        self.chat_rooms().get(index)
    }
}

/// Chat rooms fixed at construction time
///
/// # Example
/// ```rust
/// use chatshell::data::{ChatRoomSource, StaticChatRooms};
///
/// let source = StaticChatRooms::mock()?;
/// assert!(!source.is_empty());
/// # Ok::<(), chatshell::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StaticChatRooms {
    rooms: Vec<ChatRoom>,
}

impl StaticChatRooms {
    /// Create a validated source
    ///
    /// Fails on the first room that breaks an invariant or reuses an id.
    pub fn new(rooms: Vec<ChatRoom>) -> Result<Self> {
        {
            let mut seen = HashSet::with_capacity(rooms.len());
            for room in &rooms {
                room.check().map_err(|reason| Error::MalformedRoom {
                    id: room.id.clone(),
                    reason,
                })?;

                if !seen.insert(room.id.as_str()) {
                    return Err(Error::DuplicateRoomId(room.id.clone()));
                }
            }
        }

        tracing::info!("Loaded {} chat rooms", rooms.len());
        Ok(Self { rooms })
    }

    /// Built-in mock conversations
    pub fn mock() -> Result<Self> {
        Self::new(mock::chat_rooms()?)
    }

    /// Parse chat rooms from a JSON array
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rooms: Vec<ChatRoom> = serde_json::from_str(json)?;
        Self::new(rooms)
    }

    /// Load chat rooms from a JSON file
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// Consume the source, returning its rooms
    pub fn into_rooms(self) -> Vec<ChatRoom> {
        self.rooms
    }
}

impl ChatRoomSource for StaticChatRooms {
    fn chat_rooms(&self) -> &[ChatRoom] {
        &self.rooms
    }
}

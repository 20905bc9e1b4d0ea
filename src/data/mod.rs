//! Chat data module
//!
//! This module holds the conversation records shown by the chat list:
//! - `user` - Conversation participants
//! - `message` - Message records
//! - `chat_room` - Chat rooms and peer lookup
//! - `source` - Read-only chat room providers and validation
//! - `mock` - Built-in mock conversations

pub mod chat_room;
pub mod message;
pub mod mock;
pub mod source;
pub mod user;

// Re-export commonly used types
pub use chat_room::ChatRoom;
pub use message::Message;
pub use source::{ChatRoomSource, StaticChatRooms};
pub use user::User;

//! Built-in mock conversations

use crate::data::{ChatRoom, Message, User};
use crate::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};

/// Id of the local user in the mock data
pub const LOCAL_USER_ID: &str = "u1";

/// Peer name, last message and its UTC time as (year, month, day, hour, minute)
const PEERS: [(&str, &str, (i32, u32, u32, u32, u32)); 10] = [
    ("Lukas", "Oh hey there, how was the trip?", (2024, 1, 3, 12, 11)),
    ("Elon", "I need to ship the rocket by Friday", (2024, 1, 2, 9, 32)),
    ("Jeff", "Let me check what the warehouse says", (2023, 12, 28, 18, 47)),
    ("Zuck", "The new release is out, try it", (2023, 12, 24, 8, 5)),
    ("Graham", "Can you send me the slides?", (2023, 12, 20, 16, 40)),
    ("Biff", "See you at the café", (2023, 12, 18, 11, 22)),
    ("Mia", "Happy birthday! 🎉", (2023, 12, 11, 7, 59)),
    ("Nora", "Did the package arrive?", (2023, 11, 30, 20, 14)),
    ("Omar", "Thanks, that fixed it", (2023, 11, 21, 13, 3)),
    ("Priya", "Call me when you are free", (2023, 11, 5, 10, 0)),
];

/// The local user shared by all mock rooms
pub fn local_user() -> User {
    User::new(LOCAL_USER_ID, "Me", "https://avatars.example.com/u1.png")
}

/// Mock chat rooms, newest first
///
/// Fails if a mock timestamp names no valid instant.
pub fn chat_rooms() -> Result<Vec<ChatRoom>> {
    PEERS
        .iter()
        .enumerate()
        .map(|(i, (name, content, time))| {
            let n = i + 1;
            let id = n.to_string();
            let created_at = instant(*time).ok_or_else(|| Error::MalformedRoom {
                id: id.clone(),
                reason: format!("invalid timestamp {:?}", time),
            })?;
            let peer = User::new(
                format!("u{}", n + 1),
                *name,
                format!("https://avatars.example.com/u{}.png", n + 1),
            );
            Ok(ChatRoom::new(
                id,
                vec![local_user(), peer],
                Message::new(format!("m{}", n), *content, created_at),
            ))
        })
        .collect()
}

fn instant((year, month, day, hour, minute): (i32, u32, u32, u32, u32)) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

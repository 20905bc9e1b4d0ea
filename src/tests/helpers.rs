//! Shared test helpers

use crate::data::{ChatRoom, Message, User};
use crate::formatter::DateZone;
use crate::settings::Settings;
use chrono::{DateTime, TimeZone, Utc};

/// Instant from UTC calendar fields
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test instant")
}

/// Two-user room between local user "me" and peer `peer_name`
pub fn room(id: &str, peer_name: &str, content: &str, created_at: DateTime<Utc>) -> ChatRoom {
    ChatRoom::new(
        id,
        vec![
            User::new("me", "Me", "a"),
            User::new(format!("peer-{}", id), peer_name, format!("avatar-{}", id)),
        ],
        Message::new(format!("m-{}", id), content, created_at),
    )
}

/// `count` rooms with ids "0".."count"
pub fn rooms(count: usize) -> Vec<ChatRoom> {
    (0..count)
        .map(|i| room(&i.to_string(), &format!("Peer {}", i), "hi", utc(2024, 1, 3, 12, 0)))
        .collect()
}

/// Settings for tests: local user "me", UTC dates, no log file
pub fn test_settings() -> Settings {
    Settings {
        local_user_id: "me".to_string(),
        log_path: None,
        date_zone: DateZone::Utc,
        ..Settings::default()
    }
}

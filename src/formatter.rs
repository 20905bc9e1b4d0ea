//! Row formatting - projects a chat room onto display-ready fields

use crate::data::ChatRoom;
use crate::{Error, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Date label pattern: zero-padded day and month, four-digit year
pub const DATE_LABEL_FORMAT: &str = "%d/%m/%Y";

/// Display-ready projection of one chat room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    /// Row key (the chat room id)
    pub key: String,
    /// Peer display name
    pub peer_name: String,
    /// Peer avatar URI
    pub avatar_uri: String,
    /// Last message content, untouched
    pub preview: String,
    /// Last message date as `DD/MM/YYYY`
    pub date_label: String,
}

/// Calendar used for date labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateZone {
    /// The machine's local time zone
    #[default]
    Local,
    /// UTC
    Utc,
}

/// Formats rows for one local user
#[derive(Debug, Clone)]
pub struct RowFormatter {
    local_user_id: String,
    zone: DateZone,
}

impl RowFormatter {
    /// Create a formatter for `local_user_id`
    pub fn new(local_user_id: impl Into<String>, zone: DateZone) -> Self {
        Self {
            local_user_id: local_user_id.into(),
            zone,
        }
    }

    /// The local user the peer is resolved against
    pub fn local_user_id(&self) -> &str {
        &self.local_user_id
    }

    /// Format one chat room
    ///
    /// # Errors
    /// `Error::NoPeer` if the room has no unique participant other than the
    /// local user.
    pub fn format(&self, room: &ChatRoom) -> Result<RowViewModel> {
        let peer = room
            .peer_of(&self.local_user_id)
            .ok_or_else(|| Error::NoPeer(room.id.clone()))?;

        let created_at = &room.last_message.created_at;
        let date_label = match self.zone {
            DateZone::Local => format_date_label(created_at),
            DateZone::Utc => format_date_label_in(created_at, &Utc),
        };

        Ok(RowViewModel {
            key: room.id.clone(),
            peer_name: peer.name.clone(),
            avatar_uri: peer.image_uri.clone(),
            preview: room.last_message.content.clone(),
            date_label,
        })
    }
}

/// Format one chat room using local calendar dates
pub fn format_row(room: &ChatRoom, local_user_id: &str) -> Result<RowViewModel> {
    RowFormatter::new(local_user_id, DateZone::Local).format(room)
}

/// Format the local calendar date of `instant` as `DD/MM/YYYY`
pub fn format_date_label(instant: &DateTime<Utc>) -> String {
    format_date_label_in(instant, &Local)
}

/// Format the calendar date of `instant` in `tz` as `DD/MM/YYYY`
pub fn format_date_label_in<Tz>(instant: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.with_timezone(tz).format(DATE_LABEL_FORMAT).to_string()
}

//! Chatshell - a terminal chat application shell
//!
//! This library provides the chat-list pipeline (data source, row formatter,
//! virtualized list) and the navigation scaffold used by the `chatshell-tui`
//! binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod data;
pub mod formatter;
pub mod settings;
pub mod tui;

#[cfg(test)]
mod tests;

use crate::settings::Settings;
use std::sync::Mutex;

/// Result type alias for Chatshell operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chatshell operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two chat rooms share the same id
    #[error("Duplicate chat room id: {0}")]
    DuplicateRoomId(String),

    /// Chat room breaks a data model invariant
    #[error("Malformed chat room {id}: {reason}")]
    MalformedRoom {
        /// Id of the offending room
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// No unique conversation peer for the local user
    #[error("No peer for local user in chat room {0}")]
    NoPeer(String),

    /// Route name not registered with the navigator
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Route name registered twice
    #[error("Route already registered: {0}")]
    DuplicateRoute(String),

    /// Settings could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging to the file named in settings.
///
/// The terminal is owned by the UI, so nothing is logged to stdout. Without a
/// configured log path no subscriber is installed.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_path else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    // Ignore the error if a global subscriber is already set (tests, embedders)
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init();

    Ok(())
}

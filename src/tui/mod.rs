//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability
//! and potential reuse in other UI implementations.

pub mod app;
pub mod list_view;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use list_view::{ListView, RenderedRow};
pub use navigation::{ActiveRoute, Navigator, RouteRegistry, StackNavigator, TabNavigator};
pub use screens::ChatsScreen;
pub use types::{ScreenKind, ScreenOptions};

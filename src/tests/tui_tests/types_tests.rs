// Types Tests - Testing ScreenOptions

use crate::tui::{ScreenKind, ScreenOptions};

#[test]
fn test_screen_options_tab_label_defaults_to_title() {
    let options = ScreenOptions::new("Chats", ScreenKind::Chats);

    assert_eq!(options.tab_label.as_deref(), Some("Chats"));
    assert_eq!(options.tab_text(), "Chats");
    assert!(options.header_actions.is_empty());
}

#[test]
fn test_screen_options_icon_only_tab() {
    let options = ScreenOptions::new("camera", ScreenKind::Placeholder)
        .with_icon("📷")
        .without_tab_label();

    assert!(options.tab_label.is_none());
    assert_eq!(options.tab_text(), "📷");
    assert_eq!(options.title, "camera");
}

#[test]
fn test_screen_options_falls_back_to_title() {
    let options = ScreenOptions::new("Status", ScreenKind::Placeholder).without_tab_label();
    assert_eq!(options.tab_text(), "Status");
}

#[test]
fn test_screen_options_header_actions_in_order() {
    let options = ScreenOptions::new("WhatsApp", ScreenKind::Tabs)
        .with_header_action("🔍")
        .with_header_action("⋮");

    assert_eq!(options.header_actions, vec!["🔍".to_string(), "⋮".to_string()]);
}

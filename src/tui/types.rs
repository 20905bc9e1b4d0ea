//! Core types for TUI screens and navigation

/// Stack route hosting the tab group
pub const ROOT_ROUTE: &str = "Root";
/// Stack route shown for unknown route names
pub const NOT_FOUND_ROUTE: &str = "NotFound";
/// Camera tab
pub const CAMERA_TAB: &str = "Camera";
/// Chats tab
pub const CHATS_TAB: &str = "Chats";
/// Status tab
pub const STATUS_TAB: &str = "Status";
/// Calls tab
pub const CALLS_TAB: &str = "Calls";

/// What a route mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// The tab group
    Tabs,
    /// The chat list screen
    Chats,
    /// A screen with nothing but its title
    Placeholder,
    /// Unknown route screen
    NotFound,
}

/// Per-route presentation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    /// Header title
    pub title: String,
    /// Tab bar label; `None` shows the icon only
    pub tab_label: Option<String>,
    /// Tab bar icon
    pub icon: Option<String>,
    /// Header actions drawn on the right
    pub header_actions: Vec<String>,
    /// Mounted screen
    pub kind: ScreenKind,
}

impl ScreenOptions {
    /// Options with the tab label defaulting to the title
    pub fn new(title: impl Into<String>, kind: ScreenKind) -> Self {
        let title = title.into();
        Self {
            tab_label: Some(title.clone()),
            title,
            icon: None,
            header_actions: Vec::new(),
            kind,
        }
    }

    /// Set the tab icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Hide the tab label
    pub fn without_tab_label(mut self) -> Self {
        self.tab_label = None;
        self
    }

    /// Add a header action
    pub fn with_header_action(mut self, action: impl Into<String>) -> Self {
        self.header_actions.push(action.into());
        self
    }

    /// Text shown in the tab bar: the label, else the icon, else the title
    pub fn tab_text(&self) -> &str {
        self.tab_label
            .as_deref()
            .or(self.icon.as_deref())
            .unwrap_or(&self.title)
    }
}

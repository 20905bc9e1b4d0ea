//! Main TUI application state and logic

use crate::data::{ChatRoomSource, StaticChatRooms};
use crate::formatter::RowFormatter;
use crate::settings::{Settings, DEFAULT_SETTINGS_PATH};
use crate::tui::navigation::{resolve_screen, ActiveRoute, RouteRegistry, StackNavigator, TabNavigator};
use crate::tui::screens::ChatsScreen;
use crate::tui::theme::Theme;
use crate::tui::types::*;
use crate::{Error, Result};
use std::rc::Rc;

/// Application state
pub struct App {
    /// Loaded settings
    pub settings: Settings,
    /// Root stack navigator
    pub stack: StackNavigator,
    /// Tab group hosted by the root route
    pub tabs: TabNavigator,
    /// Chats screen
    pub chats_screen: ChatsScreen,
    /// Palette for the configured colour scheme
    pub theme: Theme,
    /// Should quit
    pub should_quit: bool,
    /// Last layout or navigation problem shown to the user
    pub status_message: Option<String>,
}

impl App {
    /// Create new application
    ///
    /// # Arguments
    /// * `settings_path` - Settings file; `settings.json` in the working
    ///   directory when `None`
    pub fn new_with_settings<P: AsRef<std::path::Path>>(
        settings_path: Option<P>,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let settings = match settings_path {
            Some(path) => Settings::load(path)?,
            None => Settings::load(DEFAULT_SETTINGS_PATH)?,
        };

        Self::from_settings(settings)
    }

    /// Create an application from loaded settings
    ///
    /// Rooms come from `data_path` when set, otherwise from the mock data.
    pub fn from_settings(settings: Settings) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let source = match &settings.data_path {
            Some(path) => {
                tracing::info!("Loading chat rooms from {}", path);
                StaticChatRooms::from_json_file(path)?
            }
            None => StaticChatRooms::mock()?,
        };

        Ok(Self::with_source(settings, Rc::new(source))?)
    }

    /// Create new application with the default settings file
    pub fn new() -> std::result::Result<Self, Box<dyn std::error::Error>> {
        Self::new_with_settings(None::<&str>)
    }

    /// Create an application over an explicit data source
    ///
    /// Fails if a room has no peer for the configured local user.
    pub fn with_source(settings: Settings, source: Rc<dyn ChatRoomSource>) -> Result<Self> {
        if let Some(room) = source
            .chat_rooms()
            .iter()
            .find(|room| room.peer_of(&settings.local_user_id).is_none())
        {
            return Err(Error::NoPeer(room.id.clone()));
        }

        let formatter = RowFormatter::new(settings.local_user_id.clone(), settings.date_zone);
        let chats_screen = ChatsScreen::new(source, formatter, settings.list_buffer_rows);
        let (stack, tabs) = register_routes(&settings)?;

        let mut app = Self {
            theme: Theme::for_scheme(settings.color_scheme),
            settings,
            stack,
            tabs,
            chats_screen,
            should_quit: false,
            status_message: None,
        };

        let initial = app.settings.initial_tab.clone();
        app.open_route(&initial);
        Ok(app)
    }

    /// Options of the mounted screen
    pub fn current_screen(&self) -> Option<&ScreenOptions> {
        resolve_screen(&self.stack, &self.tabs)
    }

    /// Kind of the mounted screen
    pub fn current_kind(&self) -> Option<ScreenKind> {
        self.current_screen().map(|options| options.kind)
    }

    /// Open a route by name
    ///
    /// Tab names activate the tab under the root route, stack names are pushed,
    /// and anything else lands on the not-found route.
    pub fn open_route(&mut self, name: &str) {
        let opened = if self.tabs.is_registered(name) {
            self.stack.pop_to_root();
            self.tabs.navigate(name)
        } else {
            self.stack.navigate(name)
        };

        if let Err(e) = opened {
            tracing::warn!("{}; showing {}", e, NOT_FOUND_ROUTE);
            self.status_message = Some(e.to_string());
            // NotFound is always registered by register_routes
            let _ = self.stack.navigate(NOT_FOUND_ROUTE);
        } else {
            self.status_message = None;
            tracing::info!("Opened route {}", name);
        }
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        self.tabs.next_tab();
    }

    /// Switch to the previous tab
    pub fn previous_tab(&mut self) {
        self.tabs.previous_tab();
    }

    /// Switch to the tab at `index` (zero-based)
    pub fn select_tab(&mut self, index: usize) {
        if let Err(e) = self.tabs.select_index(index) {
            tracing::debug!("Ignoring tab selection: {}", e);
        }
    }

    /// Go back one stack route
    pub fn go_back(&mut self) {
        if self.stack.go_back() {
            self.status_message = None;
        }
    }
}

/// Build the stack and tab route tables
///
/// The stack holds `Root` (hosting the tabs) and `NotFound`; the tabs are
/// Camera, Chats, Status and Calls with Chats as the default.
pub fn register_routes(settings: &Settings) -> Result<(StackNavigator, TabNavigator)> {
    let mut stack = StackNavigator::new();
    stack.register(
        ROOT_ROUTE,
        ScreenOptions::new(settings.app_title.clone(), ScreenKind::Tabs)
            .with_header_action("🔍")
            .with_header_action("⋮"),
    )?;
    stack.register(NOT_FOUND_ROUTE, ScreenOptions::new("Oops!", ScreenKind::NotFound))?;
    stack.navigate(ROOT_ROUTE)?;

    let mut tabs = TabNavigator::new();
    tabs.register(
        CAMERA_TAB,
        ScreenOptions::new("camera", ScreenKind::Placeholder)
            .with_icon("📷")
            .without_tab_label(),
    )?;
    tabs.register(CHATS_TAB, ScreenOptions::new("Chats", ScreenKind::Chats))?;
    tabs.register(STATUS_TAB, ScreenOptions::new("Status", ScreenKind::Placeholder))?;
    tabs.register(CALLS_TAB, ScreenOptions::new("Calls", ScreenKind::Placeholder))?;
    tabs.navigate(CHATS_TAB)?;

    Ok((stack, tabs))
}

//! UI rendering module - screen-specific rendering functions
//!
//! The stack route decides the frame: the root route draws the header, the
//! tab bar and the active tab's screen; the not-found route draws its own
//! page.

mod chat_list;
mod header;
mod helpers;
mod not_found;
mod placeholder;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use crate::tui::app::App;
use crate::tui::navigation::Navigator;
use crate::tui::types::ScreenKind;

// Re-export render functions
pub use chat_list::render_chat_list;
pub use header::{render_header, render_tab_bar};
pub use not_found::render_not_found;
pub use placeholder::render_placeholder;

// Re-export helper functions
pub use helpers::{avatar_initial, ellipsize};

/// Key hints shown under the root screens
pub const HELP_TEXT: &str = "←/→: Tabs | ↑↓/j/k: Navigate | PgUp/PgDn: Page | q: Quit";

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    match app.current_kind() {
        Some(ScreenKind::NotFound) | None => render_not_found(f, size, app),
        Some(kind) => render_root(f, size, app, kind),
    }
}

fn render_root(f: &mut Frame, area: Rect, app: &mut App, kind: ScreenKind) {
    let theme = app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Help text
        ])
        .split(area);

    if let Some(options) = app.stack.active_options() {
        render_header(f, chunks[0], options, &theme);
    }
    render_tab_bar(f, chunks[1], &app.tabs, &theme);

    match kind {
        ScreenKind::Chats => render_chat_list(f, chunks[2], app),
        _ => {
            if let Some(options) = app.current_screen() {
                render_placeholder(f, chunks[2], options, &theme);
            }
        }
    }

    let (help_text, help_style) = match &app.status_message {
        Some(message) => (message.as_str(), Style::default().fg(Color::Yellow)),
        None => (HELP_TEXT, Style::default().fg(Color::DarkGray)),
    };
    let help = Paragraph::new(help_text)
        .style(help_style)
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

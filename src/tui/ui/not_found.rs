//! Not-found screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::types::ScreenOptions;
use super::header::render_header;

/// Renders the screen shown for routes that don't exist
pub fn render_not_found(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme;
    let fallback = ScreenOptions::new("Oops!", crate::tui::types::ScreenKind::NotFound);
    let options = app.current_screen().unwrap_or(&fallback);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Message
            Constraint::Length(3), // Status
        ])
        .split(area);

    render_header(f, chunks[0], options, &theme);
    render_message(f, chunks[1], &theme);

    let status_text = app.status_message.as_deref().unwrap_or("");
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);
}

fn render_message(f: &mut Frame, area: Rect, theme: &Theme) {
    let base = Style::default().bg(theme.background);
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        "This screen doesn't exist.",
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Press Esc to go to the home screen",
        Style::default().fg(theme.muted),
    )));

    let message = Paragraph::new(lines)
        .style(base)
        .alignment(Alignment::Center);
    f.render_widget(message, area);
}

//! Placeholder screen rendering for tabs without content

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use crate::tui::theme::Theme;
use crate::tui::types::ScreenOptions;

/// Renders the screen title and a note, centered
pub fn render_placeholder(f: &mut Frame, area: Rect, options: &ScreenOptions, theme: &Theme) {
    let base = Style::default().bg(theme.background);
    f.render_widget(Block::default().style(base), area);

    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        options.title.clone(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Nothing here yet",
        Style::default().fg(theme.muted),
    )));

    let body = Paragraph::new(lines)
        .style(base)
        .alignment(Alignment::Center);
    f.render_widget(body, area);
}

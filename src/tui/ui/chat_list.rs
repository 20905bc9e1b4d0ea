//! Chat list screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use crate::formatter::RowViewModel;
use crate::tui::app::App;
use crate::tui::list_view::ROW_HEIGHT;
use crate::tui::theme::Theme;
use super::helpers::{avatar_initial, ellipsize};

/// Width of the avatar badge column
const AVATAR_WIDTH: u16 = 5;
/// Width of the date column (`DD/MM/YYYY` plus a margin)
const DATE_WIDTH: u16 = 11;

/// Renders the chat list into `area`, formatting only the rows in view
pub fn render_chat_list(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme;
    f.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    if app.chats_screen.room_count() == 0 {
        let empty_msg = Paragraph::new("No chats yet")
            .style(Style::default().fg(theme.muted).bg(theme.background))
            .alignment(Alignment::Center);
        f.render_widget(empty_msg, area);
        return;
    }

    let viewport_rows = (area.height / ROW_HEIGHT) as usize;
    if let Err(e) = app.chats_screen.layout(viewport_rows) {
        tracing::error!("Chat list layout failed: {}", e);
        let error_msg = Paragraph::new(format!("Cannot show chats: {}", e))
            .style(Style::default().fg(ratatui::style::Color::Red).bg(theme.background))
            .alignment(Alignment::Center);
        f.render_widget(error_msg, area);
        app.status_message = Some(e.to_string());
        return;
    }

    let list = &app.chats_screen.list;
    let selected = list.selected();
    for (slot, rendered) in list.visible_rows().iter().enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + slot as u16 * ROW_HEIGHT,
            width: area.width,
            height: ROW_HEIGHT,
        };
        render_row(f, row_area, &rendered.row, selected == Some(rendered.index), &theme);
    }
}

/// Renders one row: avatar, name over preview, date
fn render_row(f: &mut Frame, area: Rect, row: &RowViewModel, is_selected: bool, theme: &Theme) {
    let base = if is_selected {
        Style::default().bg(theme.selection_bg)
    } else {
        Style::default().bg(theme.background)
    };
    f.render_widget(Block::default().style(base), area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(AVATAR_WIDTH), // Avatar
            Constraint::Min(1),               // Name and preview
            Constraint::Length(DATE_WIDTH),   // Date
        ])
        .split(area);

    let avatar = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", avatar_initial(&row.peer_name)),
            Style::default()
                .bg(theme.avatar_bg)
                .fg(theme.avatar_fg)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .style(base);
    f.render_widget(avatar, chunks[0]);

    let width = chunks[1].width as usize;
    let name_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let name_style = if is_selected {
        name_style.add_modifier(Modifier::REVERSED)
    } else {
        name_style
    };
    let middle = Paragraph::new(vec![
        Line::from(Span::styled(ellipsize(&row.peer_name, width), name_style)),
        Line::from(Span::styled(ellipsize(&row.preview, width), Style::default().fg(theme.muted))),
    ])
    .style(base);
    f.render_widget(middle, chunks[1]);

    let date = Paragraph::new(Span::styled(
        format!("{} ", row.date_label),
        Style::default().fg(theme.muted),
    ))
    .style(base)
    .alignment(Alignment::Right);
    f.render_widget(date, chunks[2]);
}

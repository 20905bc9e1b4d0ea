//! Stack header and tab bar rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
    Frame,
};
use crate::tui::navigation::{RouteRegistry, TabNavigator};
use crate::tui::theme::Theme;
use crate::tui::types::ScreenOptions;

/// Renders the header: bold title on the left, actions on the right
pub fn render_header(f: &mut Frame, area: Rect, options: &ScreenOptions, theme: &Theme) {
    let style = Style::default().bg(theme.header_bg).fg(theme.header_fg);
    f.render_widget(Block::default().style(style), area);

    let actions = Line::from(
        options
            .header_actions
            .iter()
            .map(|action| Span::styled(format!(" {} ", action), style))
            .collect::<Vec<_>>(),
    );
    let actions_width = actions.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(actions_width)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        format!(" {}", options.title),
        style.add_modifier(Modifier::BOLD),
    ))
    .style(style);
    f.render_widget(title, chunks[0]);

    let actions = Paragraph::new(actions)
        .style(style)
        .alignment(Alignment::Right);
    f.render_widget(actions, chunks[1]);
}

/// Renders the tab bar with the active tab highlighted
pub fn render_tab_bar(f: &mut Frame, area: Rect, tabs: &TabNavigator, theme: &Theme) {
    let titles: Vec<Line> = tabs
        .routes()
        .into_iter()
        .filter_map(|name| tabs.options(name))
        .map(|options| Line::from(options.tab_text().to_uppercase()))
        .collect();

    let tab_bar = Tabs::new(titles)
        .select(tabs.active_index().unwrap_or(0))
        .style(Style::default().bg(theme.tab_bar_bg).fg(theme.tab_inactive))
        .highlight_style(
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" ");
    f.render_widget(tab_bar, area);
}

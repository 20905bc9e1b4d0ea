//! UI helper functions

use ratatui::text::Span;

/// Upper-cased first visible character of `name`, `?` when there is none
pub fn avatar_initial(name: &str) -> char {
    name.chars()
        .find(|c| !c.is_whitespace())
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or('?')
}

/// Fit `text` on one line at most `max_width` terminal cells wide
///
/// Line breaks become spaces; overlong text ends with an ellipsis. Wide
/// glyphs (emoji, CJK) count as two cells.
pub fn ellipsize(text: &str, max_width: usize) -> String {
    let single_line: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if cell_width(&single_line) <= max_width {
        return single_line;
    }
    if max_width == 0 {
        return String::new();
    }

    // The ellipsis takes one cell
    let budget = max_width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    let mut buf = [0u8; 4];
    for c in single_line.chars() {
        let width = cell_width(c.encode_utf8(&mut buf));
        if used + width > budget {
            break;
        }
        used += width;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

fn cell_width(text: &str) -> usize {
    Span::raw(text).width()
}

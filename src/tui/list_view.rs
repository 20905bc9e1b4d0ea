//! Windowed chat list
//!
//! Only rooms inside the visible window, plus `buffer` rows on each side, are
//! formatted. Formatted rows are cached by room id and dropped once they leave
//! the window, so the cost of a layout pass follows the viewport size rather
//! than the number of conversations.

use crate::data::{ChatRoom, ChatRoomSource};
use crate::formatter::RowViewModel;
use crate::Result;
use std::collections::HashMap;
use std::ops::Range;

/// Terminal lines per chat row (name over preview)
pub const ROW_HEIGHT: u16 = 2;

/// Default number of off-screen rows kept formatted on each side
pub const DEFAULT_BUFFER_ROWS: usize = 5;

/// A formatted row at its position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    /// Index in the source
    pub index: usize,
    /// Formatted fields, keyed by room id
    pub row: RowViewModel,
}

/// Indices to materialize: the visible rows plus `buffer` on each side
pub fn window(offset: usize, len: usize, viewport_rows: usize, buffer: usize) -> Range<usize> {
    let start = offset.saturating_sub(buffer).min(len);
    let end = offset
        .saturating_add(viewport_rows)
        .saturating_add(buffer)
        .min(len);
    start..end.max(start)
}

/// Virtualized list state
#[derive(Debug, Clone)]
pub struct ListView {
    offset: usize,
    selected: Option<usize>,
    buffer: usize,
    viewport_rows: usize,
    window: Range<usize>,
    cache: HashMap<String, RowViewModel>,
    visible: Vec<RenderedRow>,
    formatted_total: usize,
}

impl ListView {
    /// Create a list keeping `buffer` off-screen rows on each side
    pub fn new(buffer: usize) -> Self {
        Self {
            offset: 0,
            selected: None,
            buffer,
            viewport_rows: 0,
            window: 0..0,
            cache: HashMap::new(),
            visible: Vec::new(),
            formatted_total: 0,
        }
    }

    /// First visible index
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Selected index
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Off-screen buffer size
    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Rows that fit the viewport in the last layout pass
    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Window materialized by the last layout pass
    pub fn materialized(&self) -> Range<usize> {
        self.window.clone()
    }

    /// Number of cached rows
    pub fn cached_rows(&self) -> usize {
        self.cache.len()
    }

    /// Formatter calls made since creation
    pub fn formatted_total(&self) -> usize {
        self.formatted_total
    }

    /// Visible rows from the last layout pass, in source order
    pub fn visible_rows(&self) -> &[RenderedRow] {
        &self.visible
    }

    /// Lay the list out for a viewport of `viewport_rows` rows
    ///
    /// Formats rooms entering the window with `format` and reuses cached rows
    /// for the rest. Returns how many rooms were formatted in this pass. If
    /// `format` fails the list keeps the state of the previous pass.
    pub fn layout<S, F>(&mut self, source: &S, viewport_rows: usize, mut format: F) -> Result<usize>
    where
        S: ChatRoomSource + ?Sized,
        F: FnMut(&ChatRoom) -> Result<RowViewModel>,
    {
        let rooms = source.chat_rooms();
        let (selected, offset) = self.clamped(rooms.len(), viewport_rows);

        let window = window(offset, rooms.len(), viewport_rows, self.buffer);
        let mut cache = HashMap::with_capacity(window.len());
        let mut formatted = 0;

        for room in &rooms[window.clone()] {
            let row = match self.cache.get(&room.id) {
                Some(row) => row.clone(),
                None => {
                    formatted += 1;
                    format(room)?
                }
            };
            cache.insert(room.id.clone(), row);
        }

        let visible_end = (offset + viewport_rows).min(rooms.len());
        self.visible = (offset..visible_end)
            .filter_map(|index| {
                cache.get(&rooms[index].id).map(|row| RenderedRow {
                    index,
                    row: row.clone(),
                })
            })
            .collect();

        self.viewport_rows = viewport_rows;
        self.selected = selected;
        self.offset = offset;
        self.cache = cache;
        self.window = window;
        self.formatted_total += formatted;
        Ok(formatted)
    }

    /// Select the next row, stopping at the last one
    pub fn select_next(&mut self, len: usize) {
        let next = self.selected.map_or(0, |i| i + 1);
        self.select(next, len);
    }

    /// Select the previous row, stopping at the first one
    pub fn select_previous(&mut self, len: usize) {
        let previous = self.selected.map_or(0, |i| i.saturating_sub(1));
        self.select(previous, len);
    }

    /// Move the selection one viewport down
    pub fn page_down(&mut self, len: usize) {
        let step = self.viewport_rows.max(1);
        let next = self.selected.map_or(0, |i| i.saturating_add(step));
        self.select(next, len);
    }

    /// Move the selection one viewport up
    pub fn page_up(&mut self, len: usize) {
        let step = self.viewport_rows.max(1);
        let previous = self.selected.map_or(0, |i| i.saturating_sub(step));
        self.select(previous, len);
    }

    /// Select the first row
    pub fn select_first(&mut self, len: usize) {
        self.select(0, len);
    }

    /// Select the last row
    pub fn select_last(&mut self, len: usize) {
        self.select(len.saturating_sub(1), len);
    }

    fn select(&mut self, index: usize, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(index.min(len - 1));
        self.follow_selection();
    }

    /// Keep the selected row inside the viewport
    fn follow_selection(&mut self) {
        self.offset = follow(self.selected, self.offset, self.viewport_rows);
    }

    /// Selection and offset clamped to a list of `len` rows
    fn clamped(&self, len: usize, viewport_rows: usize) -> (Option<usize>, usize) {
        if len == 0 {
            return (None, 0);
        }

        let selected = Some(self.selected.map_or(0, |i| i.min(len - 1)));
        let max_offset = len.saturating_sub(viewport_rows.max(1));
        let offset = follow(selected, self.offset.min(max_offset), viewport_rows);
        (selected, offset)
    }
}

/// Offset that keeps `selected` inside a viewport starting at `offset`
fn follow(selected: Option<usize>, offset: usize, viewport_rows: usize) -> usize {
    let Some(selected) = selected else {
        return offset;
    };
    let viewport = viewport_rows.max(1);
    if selected < offset {
        selected
    } else if selected >= offset + viewport {
        selected + 1 - viewport
    } else {
        offset
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_ROWS)
    }
}

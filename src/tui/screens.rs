//! Screen state structures for TUI

use crate::data::ChatRoomSource;
use crate::formatter::RowFormatter;
use crate::tui::list_view::ListView;
use crate::Result;
use std::rc::Rc;

/// Chats screen state: one list view bound to the data source
pub struct ChatsScreen {
    /// Chat rooms shown by the list
    source: Rc<dyn ChatRoomSource>,
    /// Row formatter for the local user
    formatter: RowFormatter,
    /// Windowed list state
    pub list: ListView,
}

impl ChatsScreen {
    /// Create new chats screen
    pub fn new(source: Rc<dyn ChatRoomSource>, formatter: RowFormatter, buffer_rows: usize) -> Self {
        Self {
            source,
            formatter,
            list: ListView::new(buffer_rows),
        }
    }

    /// Number of chat rooms in the source
    pub fn room_count(&self) -> usize {
        self.source.len()
    }

    /// The data source
    pub fn source(&self) -> &dyn ChatRoomSource {
        self.source.as_ref()
    }

    /// Lay out the list for `viewport_rows` visible rows
    ///
    /// Returns how many rooms were formatted in this pass.
    pub fn layout(&mut self, viewport_rows: usize) -> Result<usize> {
        let formatter = &self.formatter;
        self.list
            .layout(self.source.as_ref(), viewport_rows, |room| formatter.format(room))
    }

    /// Move to next chat
    pub fn next(&mut self) {
        self.list.select_next(self.source.len());
    }

    /// Move to previous chat
    pub fn previous(&mut self) {
        self.list.select_previous(self.source.len());
    }

    /// Move one page down
    pub fn page_down(&mut self) {
        self.list.page_down(self.source.len());
    }

    /// Move one page up
    pub fn page_up(&mut self) {
        self.list.page_up(self.source.len());
    }

    /// Jump to the first chat
    pub fn first(&mut self) {
        self.list.select_first(self.source.len());
    }

    /// Jump to the last chat
    pub fn last(&mut self) {
        self.list.select_last(self.source.len());
    }
}

// ListView Tests - Testing windowed layout, row keys and selection

use super::super::helpers::rooms;
use crate::data::{ChatRoom, ChatRoomSource, StaticChatRooms};
use crate::formatter::{DateZone, RowFormatter, RowViewModel};
use crate::tui::list_view::{window, ListView};
use crate::Result;

fn source(count: usize) -> StaticChatRooms {
    StaticChatRooms::new(rooms(count)).expect("valid rooms")
}

fn formatter() -> RowFormatter {
    RowFormatter::new("me", DateZone::Utc)
}

fn format(room: &ChatRoom) -> Result<RowViewModel> {
    formatter().format(room)
}

#[test]
fn test_window_bounds() {
    assert_eq!(window(0, 100, 10, 5), 0..15);
    assert_eq!(window(20, 100, 10, 5), 15..35);
    assert_eq!(window(95, 100, 10, 5), 90..100);
    assert_eq!(window(0, 3, 10, 5), 0..3);
    assert_eq!(window(0, 0, 10, 5), 0..0);
    assert_eq!(window(4, 10, 0, 0), 4..4);
}

#[test]
fn test_layout_renders_every_room_in_order() {
    let source = source(6);
    let mut list = ListView::new(2);

    let formatted = list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(formatted, 6);

    let keys: Vec<&str> = list.visible_rows().iter().map(|r| r.row.key.as_str()).collect();
    assert_eq!(keys, vec!["0", "1", "2", "3", "4", "5"]);

    let indices: Vec<usize> = list.visible_rows().iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_layout_is_lazy() {
    let source = source(1000);
    let mut list = ListView::new(5);
    let mut calls = 0;

    list.layout(&source, 10, |room| {
        calls += 1;
        format(room)
    })
    .expect("Failed to lay out");

    assert!(calls <= 10 + 5, "Formatted {} rooms for a 10-row viewport", calls);
    assert_eq!(list.visible_rows().len(), 10);
    assert_eq!(list.cached_rows(), calls);
    assert_eq!(list.formatted_total(), calls);
}

#[test]
fn test_layout_reuses_cached_rows() {
    let source = source(50);
    let mut list = ListView::new(3);

    let first = list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(first, 13);

    let second = list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(second, 0, "Unchanged window formats nothing");
}

#[test]
fn test_layout_formats_only_rows_entering_window() {
    let source = source(50);
    let mut list = ListView::new(2);
    list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(list.materialized(), 0..12);

    // Scroll one row past the viewport
    for _ in 0..10 {
        list.select_next(source.len());
    }
    assert_eq!(list.offset(), 1);

    let formatted = list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(list.materialized(), 0..13);
    assert_eq!(formatted, 1, "Only the newly buffered row is formatted");
}

#[test]
fn test_layout_evicts_rows_leaving_window() {
    let source = source(100);
    let mut list = ListView::new(2);
    list.layout(&source, 10, format).expect("Failed to lay out");

    list.select_last(source.len());
    list.layout(&source, 10, format).expect("Failed to lay out");

    assert_eq!(list.offset(), 90);
    assert_eq!(list.materialized(), 88..100);
    assert_eq!(list.cached_rows(), 12);
    assert_eq!(list.visible_rows().first().map(|r| r.row.key.as_str()), Some("90"));
    assert_eq!(list.visible_rows().last().map(|r| r.row.key.as_str()), Some("99"));
}

#[test]
fn test_layout_propagates_formatter_errors() {
    let source = source(3);
    let mut list = ListView::new(0);
    let wrong_user = RowFormatter::new("nobody", DateZone::Utc);

    let result = list.layout(&source, 5, |room| wrong_user.format(room));
    assert!(matches!(result, Err(crate::Error::NoPeer(_))));
}

#[test]
fn test_layout_failure_keeps_previous_pass() {
    let source = source(20);
    let mut list = ListView::new(0);
    list.layout(&source, 5, format).expect("Failed to lay out");

    let result = list.layout(&source, 10, |room| {
        if room.id == "7" {
            Err(crate::Error::NoPeer(room.id.clone()))
        } else {
            format(room)
        }
    });
    assert!(matches!(result, Err(crate::Error::NoPeer(id)) if id == "7"));

    assert_eq!(list.viewport_rows(), 5);
    assert_eq!(list.materialized(), 0..5);
    assert_eq!(list.cached_rows(), 5);
    assert_eq!(list.visible_rows().len(), 5);
    assert_eq!(list.formatted_total(), 5);

    let formatted = list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(formatted, 5, "Cached rows survive the failed pass");
}

#[test]
fn test_layout_empty_source() {
    let source = source(0);
    let mut list = ListView::default();

    let formatted = list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(formatted, 0);
    assert!(list.visible_rows().is_empty());
    assert!(list.selected().is_none());
}

#[test]
fn test_layout_selects_first_row() {
    let source = source(3);
    let mut list = ListView::new(1);
    assert!(list.selected().is_none());

    list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(list.selected(), Some(0));
}

#[test]
fn test_selection_clamps_at_ends() {
    let mut list = ListView::new(1);

    list.select_next(3);
    assert_eq!(list.selected(), Some(0));
    list.select_next(3);
    list.select_next(3);
    list.select_next(3);
    assert_eq!(list.selected(), Some(2), "Should stop at the last row");

    list.select_previous(3);
    list.select_previous(3);
    list.select_previous(3);
    assert_eq!(list.selected(), Some(0), "Should stop at the first row");

    list.select_next(0);
    assert!(list.selected().is_none(), "Empty list has no selection");
}

#[test]
fn test_selection_paging_follows_viewport() {
    let source = source(30);
    let mut list = ListView::new(0);
    list.layout(&source, 10, format).expect("Failed to lay out");

    list.page_down(source.len());
    assert_eq!(list.selected(), Some(10));
    assert_eq!(list.offset(), 1, "Selected row stays in view");

    list.page_down(source.len());
    list.page_down(source.len());
    assert_eq!(list.selected(), Some(29));
    assert_eq!(list.offset(), 20);

    list.page_up(source.len());
    assert_eq!(list.selected(), Some(19));
    assert_eq!(list.offset(), 19);

    list.select_first(source.len());
    assert_eq!(list.selected(), Some(0));
    assert_eq!(list.offset(), 0);
}

#[test]
fn test_layout_clamps_offset_when_viewport_grows() {
    let source = source(20);
    let mut list = ListView::new(0);
    list.layout(&source, 5, format).expect("Failed to lay out");
    list.select_last(source.len());
    list.layout(&source, 5, format).expect("Failed to lay out");
    assert_eq!(list.offset(), 15);

    list.layout(&source, 10, format).expect("Failed to lay out");
    assert_eq!(list.offset(), 10);
    assert_eq!(list.visible_rows().len(), 10);
    assert_eq!(list.selected(), Some(19));
}

//! # List View State
//!
//! The rows currently shown in the table, in query order, plus the cursor,
//! the multi-selection marks and the horizontal column offset.
//!
//! ## Selection Rules
//! ```text
//! marked rows present?  ──yes──► selection = marked rows (display order)
//!        │ no
//!        ▼
//! cursor on a row?      ──yes──► selection = [cursor row]
//!        │ no
//!        ▼
//! selection = []  (commands treat this as "nothing to do")
//! ```

use std::collections::BTreeSet;

use inventory_core::{InventoryItem, ItemFields};

/// Column headings, left to right.
pub const COLUMNS: [&str; 5] = ["ID", "Number", "Category", "Name", "Quantity"];

/// Displayed rows and selection.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<InventoryItem>,
    cursor: Option<usize>,
    marked: BTreeSet<i64>,
    column_offset: usize,
}

impl ListView {
    pub fn rows(&self) -> &[InventoryItem] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn cursor_row(&self) -> Option<&InventoryItem> {
        self.cursor.and_then(|index| self.rows.get(index))
    }

    pub fn column_offset(&self) -> usize {
        self.column_offset
    }

    pub fn is_marked(&self, id: i64) -> bool {
        self.marked.contains(&id)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Replaces the rows with a fresh query result.
    ///
    /// The cursor is clamped to the new length; marks for rows that are no
    /// longer shown are dropped.
    pub fn replace(&mut self, rows: Vec<InventoryItem>) {
        self.rows = rows;
        self.cursor = match self.cursor {
            _ if self.rows.is_empty() => None,
            Some(index) => Some(index.min(self.rows.len() - 1)),
            None => None,
        };

        let shown: BTreeSet<i64> = self.rows.iter().map(|row| row.id).collect();
        self.marked.retain(|id| shown.contains(id));
    }

    /// Moves the cursor by `delta` rows, stopping at either end.
    ///
    /// ## Returns
    /// The newly selected row if the cursor actually moved. With no rows,
    /// or when already at the boundary, nothing changes and `None` is
    /// returned.
    pub fn move_cursor(&mut self, delta: isize) -> Option<&InventoryItem> {
        if self.rows.is_empty() {
            return None;
        }

        let last = self.rows.len() - 1;
        let target = match self.cursor {
            None if delta < 0 => last,
            None => 0,
            Some(index) => index.saturating_add_signed(delta).min(last),
        };

        self.move_to(target)
    }

    /// Puts the cursor on `index` (clamped). Same return rule as
    /// [`move_cursor`](Self::move_cursor).
    pub fn move_to(&mut self, index: usize) -> Option<&InventoryItem> {
        let last = self.rows.len().checked_sub(1)?;
        let target = index.min(last);

        if self.cursor == Some(target) {
            return None;
        }

        self.cursor = Some(target);
        self.rows.get(target)
    }

    /// Toggles the mark on the cursor row.
    pub fn toggle_mark(&mut self) {
        let Some(id) = self.cursor_row().map(|row| row.id) else {
            return;
        };

        if !self.marked.remove(&id) {
            self.marked.insert(id);
        }
    }

    pub fn clear_marks(&mut self) {
        self.marked.clear();
    }

    /// Ids of the current selection, in display order.
    pub fn selection(&self) -> Vec<i64> {
        if !self.marked.is_empty() {
            return self
                .rows
                .iter()
                .filter(|row| self.marked.contains(&row.id))
                .map(|row| row.id)
                .collect();
        }

        self.cursor_row().map(|row| vec![row.id]).unwrap_or_default()
    }

    /// Writes new values into the cursor row (display only).
    ///
    /// ## Returns
    /// The id of the row that was changed, if the cursor is on one.
    pub fn apply_to_cursor(&mut self, fields: ItemFields) -> Option<i64> {
        let row = self.cursor.and_then(|index| self.rows.get_mut(index))?;
        row.apply(fields);
        Some(row.id)
    }

    /// Removes a row from the display. The cursor stays on the same
    /// position, clamped to the shorter list.
    pub fn remove(&mut self, id: i64) -> bool {
        let Some(position) = self.rows.iter().position(|row| row.id == id) else {
            return false;
        };

        self.rows.remove(position);
        self.marked.remove(&id);
        self.cursor = match self.cursor {
            _ if self.rows.is_empty() => None,
            Some(index) if index > position => Some(index - 1),
            Some(index) => Some(index.min(self.rows.len() - 1)),
            None => None,
        };
        true
    }

    /// Scrolls the visible columns. The ID column is the leftmost stop and
    /// Quantity the rightmost.
    pub fn scroll_columns(&mut self, delta: isize) {
        self.column_offset = self
            .column_offset
            .saturating_add_signed(delta)
            .min(COLUMNS.len() - 1);
    }
}

/// Cell text for a row, in [`COLUMNS`] order.
pub fn cells(item: &InventoryItem) -> [String; 5] {
    [
        item.id.to_string(),
        item.number.clone(),
        item.category.clone(),
        item.name.clone(),
        item.quantity.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> InventoryItem {
        InventoryItem::from_fields(id, ItemFields::new(format!("N-{id}"), "Tools", name, 1))
    }

    fn three_rows() -> ListView {
        let mut list = ListView::default();
        list.replace(vec![item(1, "Hammer"), item(2, "Saw"), item(3, "Drill")]);
        list
    }

    #[test]
    fn test_move_on_empty_list_does_nothing() {
        let mut list = ListView::default();
        assert!(list.move_cursor(1).is_none());
        assert!(list.move_cursor(-1).is_none());
        assert_eq!(list.cursor(), None);
        assert!(list.selection().is_empty());
    }

    #[test]
    fn test_move_reports_only_real_changes() {
        let mut list = three_rows();

        assert_eq!(list.move_cursor(1).map(|r| r.id), Some(1));
        assert_eq!(list.move_cursor(5).map(|r| r.id), Some(3));
        // Already at the end
        assert!(list.move_cursor(1).is_none());
        assert_eq!(list.move_cursor(-1).map(|r| r.id), Some(2));
        assert_eq!(list.move_to(0).map(|r| r.id), Some(1));
        assert!(list.move_cursor(-3).is_none());
    }

    #[test]
    fn test_up_from_no_cursor_selects_last() {
        let mut list = three_rows();
        assert_eq!(list.move_cursor(-1).map(|r| r.id), Some(3));
    }

    #[test]
    fn test_selection_prefers_marks() {
        let mut list = three_rows();
        list.move_to(2);
        assert_eq!(list.selection(), vec![3]);

        list.toggle_mark();
        list.move_to(0);
        list.toggle_mark();
        // Display order, not mark order
        assert_eq!(list.selection(), vec![1, 3]);

        list.toggle_mark();
        assert_eq!(list.selection(), vec![3]);
    }

    #[test]
    fn test_replace_clamps_cursor_and_drops_stale_marks() {
        let mut list = three_rows();
        list.move_to(2);
        list.toggle_mark();

        list.replace(vec![item(1, "Hammer")]);
        assert_eq!(list.cursor(), Some(0));
        assert_eq!(list.marked_count(), 0);

        list.replace(Vec::new());
        assert_eq!(list.cursor(), None);
    }

    #[test]
    fn test_remove_keeps_cursor_position() {
        let mut list = three_rows();
        list.move_to(2);

        assert!(list.remove(1));
        assert_eq!(list.cursor_row().map(|r| r.id), Some(3));

        assert!(list.remove(3));
        assert_eq!(list.cursor_row().map(|r| r.id), Some(2));

        assert!(!list.remove(42));
        assert!(list.remove(2));
        assert_eq!(list.cursor(), None);
    }

    #[test]
    fn test_apply_to_cursor() {
        let mut list = three_rows();
        assert_eq!(list.apply_to_cursor(ItemFields::default()), None);

        list.move_to(1);
        let changed = list.apply_to_cursor(ItemFields::new("N-2", "Tools", "Jigsaw", 4));
        assert_eq!(changed, Some(2));
        assert_eq!(list.rows()[1].name, "Jigsaw");
        assert_eq!(list.rows()[1].id, 2);
    }

    #[test]
    fn test_scroll_columns_stays_in_range() {
        let mut list = ListView::default();
        list.scroll_columns(-1);
        assert_eq!(list.column_offset(), 0);
        list.scroll_columns(10);
        assert_eq!(list.column_offset(), COLUMNS.len() - 1);
    }

    #[test]
    fn test_cells_follow_column_order() {
        let cells = cells(&item(7, "Level"));
        assert_eq!(cells, ["7", "N-7", "Tools", "Level", "1"].map(String::from));
    }
}

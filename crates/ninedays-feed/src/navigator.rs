//! Bounded cursor over the forecast list.

use crate::types::ForecastDay;

/// Cursor over the ordered forecast list.
///
/// The cursor is always a valid index while the list is non-empty; both
/// movement operations saturate at the ends, and replacing the list snaps
/// the cursor back to the first day.
#[derive(Debug, Clone, Default)]
pub struct ForecastNavigator {
    list: Vec<ForecastDay>,
    cursor: usize,
}

impl ForecastNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with freshly fetched data and reset to the start.
    pub fn set_list(&mut self, list: Vec<ForecastDay>) {
        self.list = list;
        self.cursor = 0;
    }

    /// Advance one day, saturating at the last index.
    pub fn move_next(&mut self) {
        if self.can_move_next() {
            self.cursor += 1;
        }
    }

    /// Step back one day, saturating at the first index.
    pub fn move_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The day under the cursor, or `None` when the list is empty.
    pub fn current(&self) -> Option<&ForecastDay> {
        self.list.get(self.cursor)
    }

    pub fn can_move_next(&self) -> bool {
        self.cursor + 1 < self.list.len()
    }

    pub fn can_move_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

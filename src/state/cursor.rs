// Keyboard cursor over the posts list.
// Tracks the highlighted row independently of the store's selected post.

use ratatui::widgets::ListState;

/// Highlighted row in the posts list.
#[derive(Debug, Clone, Default)]
pub struct PostCursor {
    pub list_state: ListState,
}

impl PostCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently highlighted index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move to the next row, stopping at the end.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Move to the previous row, stopping at the start.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    /// Keep the cursor inside a list that may have shrunk or grown.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_bounds() {
        let mut cursor = PostCursor::new();

        cursor.select_next(3);
        assert_eq!(cursor.selected(), Some(0));
        cursor.select_next(3);
        cursor.select_next(3);
        cursor.select_next(3);
        assert_eq!(cursor.selected(), Some(2));

        cursor.select_prev(3);
        cursor.select_prev(3);
        cursor.select_prev(3);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_ignored() {
        let mut cursor = PostCursor::new();
        cursor.select_next(0);
        cursor.select_prev(0);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn test_clamp() {
        let mut cursor = PostCursor::new();
        cursor.clamp(5);
        assert_eq!(cursor.selected(), Some(0));

        cursor.select(Some(4));
        cursor.clamp(2);
        assert_eq!(cursor.selected(), Some(1));

        cursor.clamp(0);
        assert_eq!(cursor.selected(), None);
    }
}

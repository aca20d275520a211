// File: ./src/tui/state.rs
// UI-only state for the TUI: selection, input line and mode.
//
// None of this is list data. The items themselves live in the repository and
// reach the TUI through the `ListView` the controller re-renders into.
use crate::model::Item;
use crate::stats::Stats;
use crate::view::Renderer;
use ratatui::widgets::ListState;
use unicode_width::UnicodeWidthStr;

/// Latest materialized copy of the list, rebuilt on every render.
#[derive(Debug, Default, Clone)]
pub struct ListView {
    pub items: Vec<Item>,
    pub stats: Stats,
}

impl ListView {
    pub fn editing_item(&self) -> Option<&Item> {
        self.items.iter().find(|i| i.editing)
    }
}

impl Renderer for ListView {
    fn render(&mut self, items: &[Item], stats: &Stats) {
        self.items = items.to_vec();
        self.stats = *stats;
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum InputMode {
    Normal,
    Creating,
    /// Editing the item with this id.
    Editing(String),
}

pub struct AppState {
    pub list_state: ListState,
    pub mode: InputMode,
    pub input_buffer: String,
    /// Cursor position in chars, not bytes.
    pub cursor_position: usize,
    pub message: String,
    pub show_full_help: bool,
    pub strikethrough_completed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            message: String::new(),
            show_full_help: false,
            strikethrough_completed: false,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_id(&self, view: &ListView) -> Option<String> {
        self.selected_index()
            .and_then(|i| view.items.get(i))
            .map(|item| item.id.to_string())
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Brings the UI in line with a freshly rendered list.
    ///
    /// When an item has just entered edit mode, the input line takes its text
    /// with the cursor at the end, ready to be changed. When edit mode ended,
    /// the input line is released.
    pub fn sync_with(&mut self, view: &ListView) {
        match self.list_state.selected() {
            _ if view.items.is_empty() => self.list_state.select(Some(0)),
            Some(i) if i >= view.items.len() => self.select_last(view.items.len()),
            None => self.list_state.select(Some(0)),
            _ => {}
        }

        match view.editing_item() {
            Some(item) if self.mode != InputMode::Editing(item.id.to_string()) => {
                if let Some(pos) = view.items.iter().position(|i| i.id == item.id) {
                    self.list_state.select(Some(pos));
                }
                self.mode = InputMode::Editing(item.id.to_string());
                self.set_input(&item.text);
            }
            None if matches!(self.mode, InputMode::Editing(_)) => {
                self.mode = InputMode::Normal;
                self.clear_input();
            }
            _ => {}
        }
    }

    // --- Input line editing ---

    pub fn set_input(&mut self, text: &str) {
        self.input_buffer = text.to_string();
        self.cursor_position = self.input_buffer.chars().count();
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input_buffer.len(), |(i, _)| i)
    }

    pub fn enter_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input_buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let idx = self.byte_index();
        self.input_buffer.remove(idx);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            let idx = self.byte_index();
            self.input_buffer.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.input_buffer.chars().count();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Display width of the text left of the cursor, for placing the caret.
    pub fn cursor_column(&self) -> u16 {
        let prefix = &self.input_buffer[..self.byte_index()];
        u16::try_from(prefix.width()).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemId;

    fn view(n: usize) -> ListView {
        let items: Vec<Item> = (0..n)
            .map(|i| Item::new(ItemId::new(i.to_string()), format!("item {}", i)))
            .collect();
        let stats = Stats::from_items(&items);
        ListView { items, stats }
    }

    #[test]
    fn test_input_editing_is_char_based() {
        let mut s = AppState::new();
        s.set_input("café");
        assert_eq!(s.cursor_position, 4);
        s.delete_char();
        assert_eq!(s.input_buffer, "caf");
        s.move_cursor_home();
        s.enter_char('x');
        assert_eq!(s.input_buffer, "xcaf");
        s.delete_forward();
        assert_eq!(s.input_buffer, "xaf");
        assert_eq!(s.cursor_column(), 1);
    }

    #[test]
    fn test_sync_enters_and_leaves_edit_mode() {
        let mut s = AppState::new();
        let mut v = view(3);
        v.items[2].editing = true;

        s.sync_with(&v);
        assert_eq!(s.mode, InputMode::Editing("2".into()));
        assert_eq!(s.input_buffer, "item 2");
        assert_eq!(s.cursor_position, 6);
        assert_eq!(s.selected_index(), Some(2));

        v.items[2].editing = false;
        s.sync_with(&v);
        assert_eq!(s.mode, InputMode::Normal);
        assert!(s.input_buffer.is_empty());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut s = AppState::new();
        s.list_state.select(Some(10));
        s.sync_with(&view(2));
        assert_eq!(s.selected_index(), Some(1));

        s.next(2);
        assert_eq!(s.selected_index(), Some(1));
        s.previous(2);
        s.previous(2);
        assert_eq!(s.selected_index(), Some(0));
    }
}

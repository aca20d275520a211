// File: src/tui/handlers.rs
// Maps key presses to UI changes and list actions.
use crate::action::UserAction;
use crate::tui::action::Action;
use crate::tui::state::{AppState, InputMode, ListView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_event(key: KeyEvent, state: &mut AppState, view: &ListView) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match state.mode.clone() {
        InputMode::Normal => handle_normal(key, state, view),
        InputMode::Creating => match key.code {
            KeyCode::Enter => {
                let text = std::mem::take(&mut state.input_buffer);
                state.cursor_position = 0;
                // Stay in Creating so several items can be typed in a row.
                Some(Action::List(UserAction::Submit(text)))
            }
            KeyCode::Esc => {
                state.mode = InputMode::Normal;
                state.clear_input();
                None
            }
            _ => {
                handle_input_key(key, state);
                None
            }
        },
        InputMode::Editing(id) => match key.code {
            KeyCode::Enter => Some(Action::List(UserAction::CommitEdit(
                id,
                state.input_buffer.clone(),
            ))),
            KeyCode::Esc => {
                // Leave edit mode with the text the item already has.
                let current = view
                    .items
                    .iter()
                    .find(|i| i.id == id.as_str())
                    .map(|i| i.text.clone())
                    .unwrap_or_default();
                Some(Action::List(UserAction::CommitEdit(id, current)))
            }
            _ => {
                handle_input_key(key, state);
                None
            }
        },
    }
}

fn handle_normal(key: KeyEvent, state: &mut AppState, view: &ListView) -> Option<Action> {
    let len = view.items.len();
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => {
            state.show_full_help = !state.show_full_help;
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next(len);
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous(len);
            None
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.list_state.select(Some(0));
            None
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.select_last(len);
            None
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            state.mode = InputMode::Creating;
            state.clear_input();
            state.message = "New item: Enter to save, Esc to finish".to_string();
            None
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => state
            .selected_id(view)
            .map(|id| Action::List(UserAction::Toggle(id))),
        KeyCode::Char('e') | KeyCode::Enter => state
            .selected_id(view)
            .map(|id| Action::List(UserAction::BeginEdit(id))),
        _ => None,
    }
}

fn handle_input_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c) => state.enter_char(c),
        KeyCode::Backspace => state.delete_char(),
        KeyCode::Delete => state.delete_forward(),
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        KeyCode::Home => state.move_cursor_home(),
        KeyCode::End => state.move_cursor_end(),
        _ => {}
    }
}

//! Key handling.
//!
//! Global shortcuts are checked first, then the key goes to whatever control
//! has focus. Pure state edits happen here; anything touching storage comes
//! back as an [`Action`] for the dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commands::Action;
use crate::state::{AppState, Button, Focus, FormField};

/// Rows moved by `PageUp`/`PageDown`.
const PAGE_SIZE: isize = 10;

pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return Some(Action::Close),
            KeyCode::Char('v') => return Some(Action::ViewAll),
            KeyCode::Char('a') => return Some(Action::Add),
            KeyCode::Char('u') => return Some(Action::Update),
            KeyCode::Char('d') => return Some(Action::Delete),
            _ => return None,
        }
    }

    match key.code {
        KeyCode::Esc => return Some(Action::Close),
        KeyCode::Tab => {
            state.focus_next();
            return None;
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return None;
        }
        _ => {}
    }

    match state.focus {
        Focus::Field(field) => handle_field_key(state, field, key.code),
        Focus::Filter => handle_filter_key(state, key.code),
        Focus::Buttons => handle_button_key(state, key.code),
        Focus::Table => handle_table_key(state, key.code),
    }
}

fn handle_field_key(state: &mut AppState, field: FormField, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(c) => state.form.push_char(field, c),
        KeyCode::Backspace => state.form.backspace(field),
        KeyCode::Enter => {
            state.focus = match field.next() {
                Some(next) => Focus::Field(next),
                None => Focus::Filter,
            };
        }
        _ => {}
    }
    None
}

fn handle_filter_key(state: &mut AppState, code: KeyCode) -> Option<Action> {
    let delta = match code {
        KeyCode::Left | KeyCode::Up => -1,
        KeyCode::Right | KeyCode::Down => 1,
        _ => return None,
    };

    state.filter.cycle(delta).then_some(Action::ApplyFilter)
}

fn handle_button_key(state: &mut AppState, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => state.cycle_button(-1),
        KeyCode::Right => state.cycle_button(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            return Some(match state.focused_button() {
                Button::ViewAll => Action::ViewAll,
                Button::Add => Action::Add,
                Button::Update => Action::Update,
                Button::Delete => Action::Delete,
                Button::Close => Action::Close,
            });
        }
        _ => {}
    }
    None
}

fn handle_table_key(state: &mut AppState, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up => state.move_selection(-1),
        KeyCode::Down => state.move_selection(1),
        KeyCode::PageUp => state.move_selection(-PAGE_SIZE),
        KeyCode::PageDown => state.move_selection(PAGE_SIZE),
        KeyCode::Home => state.select_row(0),
        KeyCode::End => state.select_row(usize::MAX),
        KeyCode::Char(' ') => state.list.toggle_mark(),
        KeyCode::Left => state.list.scroll_columns(-1),
        KeyCode::Right => state.list.scroll_columns(1),
        KeyCode::Delete => return Some(Action::Delete),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{InventoryItem, ItemFields};

    fn press(state: &mut AppState, code: KeyCode) -> Option<Action> {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(state: &mut AppState, c: char) -> Option<Action> {
        handle_key_event(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn with_rows() -> AppState {
        let mut state = AppState::new();
        state.list.replace(
            (1..=15)
                .map(|id| InventoryItem::from_fields(id, ItemFields::new(format!("N-{id}"), "Tools", "Item", id)))
                .collect(),
        );
        state.filter.set_categories(vec!["Tools".into(), "Paint".into()]);
        state.focus = Focus::Table;
        state
    }

    #[test]
    fn test_global_shortcuts() {
        let mut state = AppState::new();
        assert_eq!(ctrl(&mut state, 'c'), Some(Action::Close));
        assert_eq!(ctrl(&mut state, 'q'), Some(Action::Close));
        assert_eq!(ctrl(&mut state, 'v'), Some(Action::ViewAll));
        assert_eq!(ctrl(&mut state, 'a'), Some(Action::Add));
        assert_eq!(ctrl(&mut state, 'u'), Some(Action::Update));
        assert_eq!(ctrl(&mut state, 'd'), Some(Action::Delete));
        assert_eq!(press(&mut state, KeyCode::Esc), Some(Action::Close));
        // Shortcuts never leak into the focused field
        assert_eq!(state.form.value(FormField::Number), "");
    }

    #[test]
    fn test_typing_and_enter_walk_the_form() {
        let mut state = AppState::new();
        for c in "N-9x".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.form.value(FormField::Number), "N-9");

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, Focus::Field(FormField::Category));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.focus, Focus::Filter);
    }

    #[test]
    fn test_tab_and_backtab_move_focus() {
        let mut state = AppState::new();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, Focus::Field(FormField::Category));
        press(&mut state, KeyCode::BackTab);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, Focus::Table);
    }

    #[test]
    fn test_filter_change_requests_view() {
        let mut state = with_rows();
        state.focus = Focus::Filter;

        assert_eq!(press(&mut state, KeyCode::Right), Some(Action::ApplyFilter));
        assert_eq!(state.filter.current(), "Tools");
        assert_eq!(press(&mut state, KeyCode::Left), Some(Action::ApplyFilter));
        assert_eq!(state.filter.current(), "All");
        assert_eq!(press(&mut state, KeyCode::Enter), None);
    }

    #[test]
    fn test_button_bar_activates_focused_button() {
        let mut state = AppState::new();
        state.focus = Focus::Buttons;

        assert_eq!(press(&mut state, KeyCode::Enter), Some(Action::ViewAll));
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        assert_eq!(press(&mut state, KeyCode::Enter), Some(Action::Update));
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Left);
        assert_eq!(press(&mut state, KeyCode::Enter), Some(Action::Close));
    }

    #[test]
    fn test_table_navigation_loads_form() {
        let mut state = with_rows();

        press(&mut state, KeyCode::Down);
        assert_eq!(state.list.cursor(), Some(0));
        assert_eq!(state.form.value(FormField::Number), "N-1");

        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.list.cursor(), Some(10));
        press(&mut state, KeyCode::End);
        assert_eq!(state.list.cursor(), Some(14));
        assert_eq!(state.form.value(FormField::Quantity), "15");
        press(&mut state, KeyCode::PageUp);
        assert_eq!(state.list.cursor(), Some(4));
        press(&mut state, KeyCode::Home);
        assert_eq!(state.list.cursor(), Some(0));
    }

    #[test]
    fn test_table_marks_scrolls_and_deletes() {
        let mut state = with_rows();
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.list.is_marked(1));

        press(&mut state, KeyCode::Right);
        assert_eq!(state.list.column_offset(), 1);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.list.column_offset(), 0);

        assert_eq!(press(&mut state, KeyCode::Delete), Some(Action::Delete));
    }
}

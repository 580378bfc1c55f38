//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, InputMode, Route};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Navigate to the detail view for this character id.
    OpenDetail(String),
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if state.show_help {
        return handle_help(state, key);
    }
    match state.input_mode {
        InputMode::Normal => match state.route() {
            Route::List { .. } => handle_list(state, key),
            Route::Detail { .. } => handle_detail(state, key),
        },
        InputMode::Search => handle_search(state, key),
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.show_help = false;
            state.help_scroll = 0;
        }
        _ => {}
    }
    KeyAction::None
}

/// Keys on the listing view.
fn handle_list(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Char('?') => {
            state.show_help = true;
            KeyAction::None
        }
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            KeyAction::None
        }

        // Filters apply immediately; the refetch subscription picks them up.
        KeyCode::Char('g') => {
            state.list.cycle_gender();
            KeyAction::None
        }
        KeyCode::Char('s') => {
            state.list.cycle_species();
            KeyAction::None
        }

        // Pagination control.
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            state.list.prev_page();
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            state.list.next_page();
            KeyAction::None
        }

        // Row navigation.
        KeyCode::Up | KeyCode::Char('k') => {
            state.list.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.list.select_down();
            KeyAction::None
        }

        KeyCode::Enter => match state.list.selected_id() {
            Some(id) => KeyAction::OpenDetail(id),
            None => KeyAction::None,
        },

        KeyCode::Esc => {
            if !state.list.search_input.is_empty() {
                state.list.clear_search();
            }
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Keys on the detail view.
fn handle_detail(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Char('?') => {
            state.show_help = true;
            KeyAction::None
        }

        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            state.navigate_back();
            KeyAction::None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(detail) = &mut state.detail {
                detail.scroll = detail.scroll.saturating_sub(1);
            }
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(detail) = &mut state.detail {
                detail.scroll = detail.scroll.saturating_add(1);
            }
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Keys while editing the search input. Every edit lands in the raw text
/// immediately; the commit into the query key happens on the debounce tick.
fn handle_search(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Backspace => {
            state.list.pop_search_char();
        }
        KeyCode::Char(c) => {
            state.list.push_search_char(c);
        }
        _ => {}
    }
    KeyAction::None
}

//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{AppState, InputMode, LoadState, Route};
use super::style::Styles;
use super::widgets::{render_characters, render_detail, render_help};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    match state.route().clone() {
        Route::List { .. } => render_list(frame, area, state),
        Route::Detail { .. } => {
            if let Some(detail) = &mut state.detail {
                render_detail(frame, area, detail);
            }
        }
    }

    // Popup overlays everything.
    if state.show_help {
        render_help(frame, area, &mut state.help_scroll);
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Filter bar
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Pagination footer
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_filter_bar(frame, chunks[1], state);
    render_characters(frame, chunks[2], &mut state.list);
    render_footer(frame, chunks[3], state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" mortui — character catalog").style(Styles::header());
    frame.render_widget(header, area);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    fn option_label(value: &str) -> &str {
        if value.is_empty() { "All" } else { value }
    }

    let searching = state.input_mode == InputMode::Search;
    let search_style = if searching {
        Styles::search_input()
    } else {
        Styles::default()
    };
    let search_text = if searching {
        format!("{}█", state.list.search_input)
    } else {
        state.list.search_input.clone()
    };

    let line = Line::from(vec![
        Span::styled(" Gender: ", Styles::label()),
        Span::raw(option_label(state.list.gender()).to_string()),
        Span::styled("  Species: ", Styles::label()),
        Span::raw(option_label(state.list.species()).to_string()),
        Span::styled("  Search: ", Styles::label()),
        Span::styled(search_text, search_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Pagination readout. The page bound always follows the most recently
/// returned `info.pages`, even when the page was set before it was known.
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let pages = state
        .list
        .known_pages
        .map(|p| p.to_string())
        .unwrap_or_else(|| "?".to_string());
    let count = match &state.list.load {
        LoadState::Loaded(page) => format!(" · {} characters", page.info.count),
        _ => String::new(),
    };

    let line = Line::from(vec![
        Span::styled(format!(" Page {}/{}{}", state.list.page, pages, count), Styles::default()),
        Span::styled("   ←→ page · g gender · s species · / search · ? help · q quit", Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

//! Character listing table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::tui::state::{ListState, LoadState};
use crate::tui::style::Styles;

/// Renders the listing content area: the character table, or the
/// loading/error placeholder for the current query key.
pub fn render_characters(frame: &mut Frame, area: Rect, list: &mut ListState) {
    let page = match &list.load {
        LoadState::Loading => {
            frame.render_widget(Paragraph::new("Loading...").style(Styles::dim()), area);
            return;
        }
        LoadState::Error(message) => {
            frame.render_widget(
                Paragraph::new(format!("Error fetching data: {}", message))
                    .style(Styles::error()),
                area,
            );
            return;
        }
        LoadState::Loaded(page) => page,
    };

    if page.results.is_empty() {
        frame.render_widget(
            Paragraph::new("No characters match the current filters").style(Styles::dim()),
            area,
        );
        return;
    }

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("NAME"),
        Cell::from("SPECIES"),
        Cell::from("GENDER"),
    ])
    .style(Styles::table_header());

    let rows: Vec<Row> = page
        .results
        .iter()
        .map(|c| {
            Row::new(vec![
                Cell::from(c.id.clone()),
                Cell::from(c.name.clone()),
                Cell::from(c.species.clone()),
                Cell::from(c.gender.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(24),
            Constraint::Length(22),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected());

    frame.render_stateful_widget(table, area, &mut list.table);
}

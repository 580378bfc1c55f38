//! Character detail panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::fmt::format_created;
use crate::tui::state::{DetailState, LoadState};
use crate::tui::style::Styles;

/// Renders the detail view for one character.
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &mut DetailState) {
    let block = Block::default()
        .title(format!(" Character {} ", detail.id))
        .borders(Borders::ALL)
        .border_style(Styles::accent());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let created = match &detail.load {
        LoadState::Loaded(character) => format_created(&character.created),
        _ => String::new(),
    };
    let lines: Vec<Line> = match &detail.load {
        LoadState::Loading => vec![Line::from(Span::styled("Loading...", Styles::dim()))],
        LoadState::Error(message) => vec![Line::from(Span::styled(
            format!("Error fetching character: {}", message),
            Styles::error(),
        ))],
        LoadState::Loaded(character) => vec![
            Line::from(Span::styled(character.name.clone(), Styles::accent())),
            Line::default(),
            Line::from(vec![
                Span::styled("● ", Styles::status(&character.status)),
                Span::raw(character.status.clone()),
            ]),
            Line::default(),
            field("Gender", &character.gender),
            field("Species", &character.species),
            field("Location", &character.location.name),
            field("Created", &created),
            Line::default(),
            Line::from(vec![
                Span::styled("Image:    ", Styles::label()),
                Span::styled(character.image.clone(), Styles::dim()),
            ]),
            Line::default(),
            Line::from(Span::styled("Esc to go back", Styles::dim())),
        ],
    };

    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    if detail.scroll > max_scroll {
        detail.scroll = max_scroll;
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0));
    frame.render_widget(paragraph, inner);
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<9} ", format!("{}:", label)), Styles::label()),
        Span::raw(value),
    ])
}

//! Help popup widget.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 72);
    let popup_height = (area.height * 70 / 100).clamp(10, 24);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Keys ")
        .borders(Borders::ALL)
        .border_style(Styles::accent());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Esc", Styles::accent()),
        Span::styled(" to close, ", Styles::dim()),
        Span::styled("↑↓", Styles::accent()),
        Span::styled(" to scroll", Styles::dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    fn entry(keys: &'static str, text: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<12}", keys), Styles::accent()),
            Span::raw(text),
        ])
    }

    vec![
        Line::from(Span::styled("Listing", Styles::label())),
        entry("↑/k ↓/j", "move selection"),
        entry("←/h →/l", "previous / next page"),
        entry("g", "cycle gender filter"),
        entry("s", "cycle species filter"),
        entry("/", "search by name (commits 2s after typing stops)"),
        entry("Esc", "clear search"),
        entry("Enter", "open character detail"),
        Line::default(),
        Line::from(Span::styled("Detail", Styles::label())),
        entry("↑/k ↓/j", "scroll"),
        entry("Esc", "back to listing"),
        Line::default(),
        Line::from(Span::styled("Global", Styles::label())),
        entry("?", "this help"),
        entry("q / Ctrl-C", "quit"),
    ]
}

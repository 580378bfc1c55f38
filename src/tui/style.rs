//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Status circle colors, matching the catalog's own scheme.
    pub const STATUS_ALIVE: Color = Color::Green;
    pub const STATUS_DEAD: Color = Color::Red;
    pub const STATUS_UNKNOWN: Color = Color::Gray;

    pub const ACCENT: Color = Color::Cyan;
    pub const ERROR: Color = Color::Red;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Field label style in the detail panel.
    pub fn label() -> Style {
        Style::default()
            .fg(Theme::FG_DIM)
            .add_modifier(Modifier::BOLD)
    }

    /// Error message style.
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Search input style while editing.
    pub fn search_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Accent style (titles, key hints).
    pub fn accent() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a character status value (Alive/Dead/unknown).
    pub fn status(status: &str) -> Style {
        let color = match status {
            "Alive" => Theme::STATUS_ALIVE,
            "Dead" => Theme::STATUS_DEAD,
            _ => Theme::STATUS_UNKNOWN,
        };
        Style::default().fg(color)
    }
}

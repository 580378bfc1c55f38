//! TUI widgets.

mod characters;
mod detail;
mod help;

pub use characters::render_characters;
pub use detail::render_detail;
pub use help::render_help;

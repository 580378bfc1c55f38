//! Terminal User Interface for the character catalog.
//!
//! This module provides an interactive viewer with a paginated, filterable
//! character listing and a per-character detail view.

mod app;
pub(crate) mod event;
mod input;
mod render;
pub mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, InputMode, Route};

//! mortui - terminal viewer for the Rick and Morty character catalog.
//!
//! Queries the public GraphQL API and renders:
//! - a paginated, filterable character listing (gender, species, debounced
//!   name search)
//! - a per-character detail view

pub mod api;
pub mod client;
pub mod fetch;
pub mod fmt;
pub mod tui;

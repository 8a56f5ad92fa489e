//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::feed::{Feed, FeedEntry};
use crate::core::state::App;

/// The demo entries, for comparing against `App::selected_entry()`.
pub fn entries() -> Vec<FeedEntry> {
    Feed::demo().entries
}

/// Creates a test App over the demo feed (5 nav items, 8 entries).
pub fn test_app() -> App {
    App::new(Feed::demo())
}

/// A test App that has already seen a resize.
pub fn sized_app(width: u16, height: u16) -> App {
    App {
        viewport_width: width,
        viewport_height: height,
        ..test_app()
    }
}

/// Flatten rendered lines to plain strings (styles dropped).
pub fn plain(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

//! # Application State
//!
//! Core navigation state for Paneboard. Domain logic only, no TUI types.
//! Presentation (geometry, cells, colors) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav_items: Arc<[NavigationItem]>   // sidebar labels (fixed)
//! ├── feed_entries: Arc<[FeedEntry]>     // feed posts (fixed)
//! ├── nav_cursor: usize                  // selected sidebar row
//! ├── feed_cursor: usize                 // selected feed row
//! ├── active_pane: Pane                  // which list receives movement
//! ├── viewport_width: u16                // 0 = not yet known
//! └── viewport_height: u16               // 0 = not yet known
//! ```
//!
//! `App` is a snapshot. State changes only happen through
//! `update(&state, action)` in action.rs, which returns a new snapshot.
//! The sequences sit behind `Arc` so cloning a snapshot is cheap.

use crate::core::feed::{Feed, FeedEntry, NavigationItem};
use std::sync::Arc;

/// The two focusable panes. The preview pane is never focused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    #[default]
    Navigation,
    Feed,
}

impl Pane {
    pub fn toggled(self) -> Self {
        match self {
            Pane::Navigation => Pane::Feed,
            Pane::Feed => Pane::Navigation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub nav_items: Arc<[NavigationItem]>,
    pub feed_entries: Arc<[FeedEntry]>,
    pub nav_cursor: usize,
    pub feed_cursor: usize,
    pub active_pane: Pane,
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl App {
    pub fn new(feed: Feed) -> Self {
        Self {
            nav_items: feed.nav.into(),
            feed_entries: feed.entries.into(),
            nav_cursor: 0,
            feed_cursor: 0,
            active_pane: Pane::default(),
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    /// True until the first non-zero resize arrives.
    pub fn viewport_unknown(&self) -> bool {
        self.viewport_width == 0 || self.viewport_height == 0
    }

    /// The entry under the feed cursor, if the feed is non-empty.
    pub fn selected_entry(&self) -> Option<&FeedEntry> {
        self.feed_entries.get(self.feed_cursor)
    }

    pub fn cursor(&self, pane: Pane) -> usize {
        match pane {
            Pane::Navigation => self.nav_cursor,
            Pane::Feed => self.feed_cursor,
        }
    }

    pub fn len(&self, pane: Pane) -> usize {
        match pane {
            Pane::Navigation => self.nav_items.len(),
            Pane::Feed => self.feed_entries.len(),
        }
    }

    /// Pull both cursors back into `[0, len - 1]` (or 0 for an empty list).
    pub fn clamped(mut self) -> Self {
        self.nav_cursor = clamp_cursor(self.nav_cursor, self.nav_items.len());
        self.feed_cursor = clamp_cursor(self.feed_cursor, self.feed_entries.len());
        self
    }

    pub(crate) fn with_cursor(mut self, pane: Pane, cursor: usize) -> Self {
        match pane {
            Pane::Navigation => self.nav_cursor = cursor,
            Pane::Feed => self.feed_cursor = cursor,
        }
        self
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

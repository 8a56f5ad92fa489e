//! # Feed Data
//!
//! The external data source: an ordered list of navigation labels and an
//! ordered list of feed entries. Both are fixed for the whole session.
//!
//! ```text
//! Feed
//! ├── nav: Vec<NavigationItem>     // sidebar labels
//! └── entries: Vec<FeedEntry>      // posts shown in the feed pane
//! ```
//!
//! The core doesn't care where a feed comes from. `Feed::demo()` is the
//! built-in content, `Feed::load()` reads a TOML or JSON file.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A sidebar label, identified by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationItem {
    pub label: String,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub category: String,
    pub author: String,
    #[serde(rename = "score", default)]
    pub score_count: u32,
    #[serde(rename = "comments", default)]
    pub comment_count: u32,
}

impl FeedEntry {
    pub fn new(
        title: &str,
        category: &str,
        author: &str,
        score_count: u32,
        comment_count: u32,
    ) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            author: author.to_string(),
            score_count,
            comment_count,
        }
    }

    /// " by u/gopher_dev", shown after the category.
    pub fn by_author(&self) -> String {
        format!(" by u/{}", self.author)
    }

    /// "342 upvotes | 45 comments"
    pub fn metrics(&self) -> String {
        format!(
            "{} upvotes | {} comments",
            self.score_count, self.comment_count
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub nav: Vec<NavigationItem>,
    #[serde(default)]
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug)]
pub enum FeedError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Io(e) => write!(f, "feed I/O error: {e}"),
            FeedError::Toml(e) => write!(f, "feed parse error (toml): {e}"),
            FeedError::Json(e) => write!(f, "feed parse error (json): {e}"),
        }
    }
}

impl std::error::Error for FeedError {}

impl Feed {
    /// Built-in demo content.
    pub fn demo() -> Self {
        let nav = ["Home", "Popular", "Explore", "Settings", "Login/Auth"]
            .into_iter()
            .map(NavigationItem::new)
            .collect();

        let entries = vec![
            FeedEntry::new(
                "Building a Reddit TUI with Rust and ratatui",
                "r/rust",
                "ferris_dev",
                342,
                45,
            ),
            FeedEntry::new(
                "What are your favorite terminal tools?",
                "r/commandline",
                "cli_enthusiast",
                528,
                89,
            ),
            FeedEntry::new(
                "Show HN: My weekend project - a Reddit client for the terminal",
                "r/programming",
                "weekend_coder",
                1205,
                134,
            ),
            FeedEntry::new(
                "TUI vs GUI: The eternal debate",
                "r/linux",
                "terminal_lover",
                876,
                201,
            ),
            FeedEntry::new(
                "Crossterm and ratatui are amazing for building TUIs",
                "r/rust",
                "crab_fan",
                445,
                67,
            ),
            FeedEntry::new(
                "Ask Reddit: What's your development setup?",
                "r/AskReddit",
                "curious_dev",
                2301,
                456,
            ),
            FeedEntry::new(
                "Vim vs Emacs: A comprehensive comparison",
                "r/programming",
                "editor_wars",
                689,
                342,
            ),
            FeedEntry::new(
                "Why I switched from GUI apps to terminal",
                "r/commandline",
                "minimalist_dev",
                934,
                178,
            ),
        ];

        Self { nav, entries }
    }

    /// Load a feed file. `.json` files are parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, FeedError> {
        let contents = fs::read_to_string(path).map_err(FeedError::Io)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let feed: Feed = if is_json {
            serde_json::from_str(&contents).map_err(FeedError::Json)?
        } else {
            toml::from_str(&contents).map_err(FeedError::Toml)?
        };

        info!(
            "Loaded feed from {} ({} nav items, {} entries)",
            path.display(),
            feed.nav.len(),
            feed.entries.len()
        );
        debug!("Feed: {:?}", feed);
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_feed_shape() {
        let feed = Feed::demo();
        assert_eq!(feed.nav.len(), 5);
        assert_eq!(feed.entries.len(), 8);
        assert_eq!(feed.nav[0].label, "Home");
        assert_eq!(feed.nav[4].label, "Login/Auth");
    }

    #[test]
    fn test_entry_formatting() {
        let entry = FeedEntry::new("Title", "r/rust", "ferris", 342, 45);
        assert_eq!(entry.by_author(), " by u/ferris");
        assert_eq!(entry.metrics(), "342 upvotes | 45 comments");
    }

    #[test]
    fn test_load_toml_feed() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
nav = ["Inbox", "Archive"]

[[entries]]
title = "First"
category = "r/one"
author = "alice"
score = 10
comments = 2

[[entries]]
title = "Second"
category = "r/two"
author = "bob"
"#
        )
        .unwrap();

        let feed = Feed::load(file.path()).unwrap();
        assert_eq!(feed.nav, vec![NavigationItem::new("Inbox"), NavigationItem::new("Archive")]);
        assert_eq!(feed.entries.len(), 2);
        assert_eq!(feed.entries[0].score_count, 10);
        assert_eq!(feed.entries[0].comment_count, 2);
        // Counters are optional
        assert_eq!(feed.entries[1].score_count, 0);
    }

    #[test]
    fn test_load_json_feed() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"nav": ["Home"], "entries": [{{"title": "T", "category": "c", "author": "a", "score": 1, "comments": 3}}]}}"#
        )
        .unwrap();

        let feed = Feed::load(file.path()).unwrap();
        assert_eq!(feed.nav.len(), 1);
        assert_eq!(feed.entries[0].comment_count, 3);
    }

    #[test]
    fn test_load_sparse_feed_is_empty() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let feed = Feed::load(file.path()).unwrap();
        assert!(feed.nav.is_empty());
        assert!(feed.entries.is_empty());
    }

    #[test]
    fn test_load_malformed_feed() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "nav = [unterminated").unwrap();
        let err = Feed::load(file.path()).unwrap_err();
        assert!(matches!(err, FeedError::Toml(_)));
        assert!(err.to_string().starts_with("feed parse error"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Feed::load(Path::new("/nonexistent/paneboard/feed.toml")).unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }
}

//! Content for each pane, built fresh from the `App` snapshot every frame.
//!
//! These functions only produce lines. Clipping to the pane happens in
//! `cells`, borders in `frame`. The two lists scroll so the cursor row is
//! always on screen; the scroll position is derived from the cursor, so
//! there is no scroll state to keep in sync.

use crate::core::feed::FeedEntry;
use crate::core::state::App;
use crate::tui::cells::scroll_offset;
use crate::tui::theme::{Role, Theme};
use ratatui::text::{Line, Span};

pub const NAV_HEADING: &str = "NAVIGATION";
pub const FEED_HEADING: &str = "POSTS";
pub const PREVIEW_HEADING: &str = "PREVIEW";

/// Shown in the preview pane when there is no entry to preview.
pub const NO_SELECTION: [&str; 3] = ["PREVIEW", "", "Select a post to view"];

pub const HELP_TEXT: &str = "Tab: switch panes | ↑↓/j/k: navigate | q: quit";

const PLACEHOLDER_BODY: [&str; 5] = [
    "Lorem ipsum dolor sit amet,",
    "consectetur adipiscing elit.",
    "",
    "Sed do eiusmod tempor incididunt",
    "ut labore et dolore magna aliqua.",
];

/// Rows each feed entry takes: title, byline, metrics, spacer.
const FEED_ROWS_PER_ENTRY: usize = 4;

/// Heading plus the blank line under it.
const HEADER_ROWS: usize = 2;

fn heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(text.to_string(), theme.style(Role::Heading, false)),
    ])
}

fn cursor_marker(selected: bool, theme: &Theme) -> Span<'static> {
    if selected {
        Span::styled("> ", theme.style(Role::Cursor, false))
    } else {
        Span::raw("  ")
    }
}

fn byline(entry: &FeedEntry, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(entry.category.clone(), theme.style(Role::Category, false)),
        Span::raw(entry.by_author()),
    ]
}

/// Heading, then the slice of `body` that keeps the focus rows visible
/// within `inner_height` rows.
fn scrolled(
    header: Line<'static>,
    body: Vec<Line<'static>>,
    focus_start: usize,
    focus_len: usize,
    inner_height: usize,
) -> Vec<Line<'static>> {
    let window = inner_height.saturating_sub(HEADER_ROWS);
    let offset = scroll_offset(body.len(), focus_start, focus_len, window);

    let mut lines = Vec::with_capacity(HEADER_ROWS + window);
    lines.push(header);
    lines.push(Line::default());
    lines.extend(body.into_iter().skip(offset));
    lines
}

pub fn nav_lines(app: &App, theme: &Theme, inner_height: usize) -> Vec<Line<'static>> {
    let body = app
        .nav_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Line::from(vec![
                cursor_marker(i == app.nav_cursor, theme),
                Span::raw(item.label.clone()),
            ])
        })
        .collect();

    scrolled(heading(NAV_HEADING, theme), body, app.nav_cursor, 1, inner_height)
}

pub fn feed_lines(app: &App, theme: &Theme, inner_height: usize) -> Vec<Line<'static>> {
    let mut body = Vec::with_capacity(app.feed_entries.len() * FEED_ROWS_PER_ENTRY);
    for (i, entry) in app.feed_entries.iter().enumerate() {
        body.push(Line::from(vec![
            cursor_marker(i == app.feed_cursor, theme),
            Span::styled(entry.title.clone(), theme.style(Role::Title, false)),
        ]));

        let mut by = vec![Span::raw("   ")];
        by.extend(byline(entry, theme));
        body.push(Line::from(by));

        body.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(entry.metrics(), theme.style(Role::Meta, false)),
        ]));
        body.push(Line::default());
    }

    // The spacer row doesn't need to be visible
    scrolled(
        heading(FEED_HEADING, theme),
        body,
        app.feed_cursor * FEED_ROWS_PER_ENTRY,
        FEED_ROWS_PER_ENTRY - 1,
        inner_height,
    )
}

/// Read-only projection of the selected feed entry.
pub fn preview_lines(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let Some(entry) = app.selected_entry() else {
        return NO_SELECTION.iter().map(|&s| Line::from(s)).collect();
    };

    let mut lines = vec![
        heading(PREVIEW_HEADING, theme),
        Line::default(),
        Line::from(Span::styled(
            entry.title.clone(),
            theme.style(Role::Title, false),
        )),
        Line::default(),
        Line::from(byline(entry, theme)),
        Line::from(Span::styled(entry.metrics(), theme.style(Role::Meta, false))),
        Line::default(),
        Line::from("-".repeat(20)),
        Line::default(),
    ];
    lines.extend(PLACEHOLDER_BODY.iter().map(|&s| Line::from(s)));
    lines
}

pub fn control_lines(theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        HELP_TEXT,
        theme.style(Role::Meta, false),
    ))]
}

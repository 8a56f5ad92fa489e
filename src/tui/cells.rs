//! Clipping and padding of styled text to an exact grid of terminal cells.
//!
//! Everything the frame composer stitches together comes through here, so
//! the output of [`render_block`] is always rectangular: exactly `height`
//! lines, each exactly `width` display cells wide.
//!
//! Width is measured per grapheme cluster in display cells, not per char.
//! `"日本"` is two chars but four cells, and `"❤\u{FE0F}"` is two chars
//! forming one two-cell glyph. The measuring function is passed in as a
//! [`DisplayWidth`] so tests (or a terminal with different ambiguous-width
//! rules) can swap it out.

use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Measures how many terminal cells a grapheme cluster occupies.
pub trait DisplayWidth {
    /// Cell width of one grapheme cluster, or `None` for control characters.
    fn grapheme_width(&self, grapheme: &str) -> Option<usize>;

    fn str_width(&self, s: &str) -> usize {
        s.graphemes(true)
            .filter_map(|g| self.grapheme_width(g))
            .sum()
    }
}

/// Standard Unicode East Asian Width rules, via `unicode-width`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeCells;

impl DisplayWidth for UnicodeCells {
    fn grapheme_width(&self, grapheme: &str) -> Option<usize> {
        if grapheme.chars().next().is_some_and(char::is_control) {
            return None;
        }
        Some(grapheme.width())
    }
}

/// A line of `width` spaces.
pub fn blank_line(width: usize) -> Line<'static> {
    Line::from(" ".repeat(width))
}

/// Clip or pad one styled line to exactly `width` cells.
///
/// Span styles survive. Control characters are dropped. A wide grapheme
/// that would straddle the right edge is dropped too and its cell padded
/// with a space, so a glyph is never split.
pub fn fit_line<W: DisplayWidth + ?Sized>(line: &Line<'_>, width: usize, cells: &W) -> Line<'static> {
    let width = width.max(1);
    let mut used = 0;
    let mut spans = Vec::with_capacity(line.spans.len() + 1);

    'spans: for span in &line.spans {
        let mut content = String::with_capacity(span.content.len());
        let mut full = false;
        for grapheme in span.content.graphemes(true) {
            let Some(w) = cells.grapheme_width(grapheme) else {
                continue;
            };
            if used + w > width {
                full = true;
                break;
            }
            used += w;
            content.push_str(grapheme);
        }
        if !content.is_empty() {
            spans.push(Span::styled(content, span.style));
        }
        if full {
            break 'spans;
        }
    }

    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }

    Line::from(spans).style(line.style)
}

/// Render `content` into exactly `height` lines of exactly `width` cells.
///
/// Missing lines become blank, extra lines are dropped. Zero sizes are
/// bumped to 1 so the result is never empty.
pub fn render_block<W: DisplayWidth + ?Sized>(
    content: &[Line<'_>],
    width: usize,
    height: usize,
    cells: &W,
) -> Vec<Line<'static>> {
    let width = width.max(1);
    let height = height.max(1);

    (0..height)
        .map(|i| match content.get(i) {
            Some(line) => fit_line(line, width, cells),
            None => blank_line(width),
        })
        .collect()
}

/// First row to show so that rows `[focus_start, focus_start + focus_len)`
/// fit inside a window of `height` rows over `total` rows.
///
/// A focus block taller than the window is pinned to its first row.
pub fn scroll_offset(total: usize, focus_start: usize, focus_len: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    let max_offset = total - height;
    (focus_start + focus_len)
        .saturating_sub(height)
        .min(focus_start)
        .min(max_offset)
}

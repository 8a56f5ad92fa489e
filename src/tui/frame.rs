//! Frame composition: bordered panes joined into the full dashboard.
//!
//! ```text
//! compose()
//!   ├── plan()                  pane sizes from the viewport
//!   ├── pane() × 3              content → render_block → bordered
//!   ├── join_horizontal()       nav | feed | preview, top aligned
//!   ├── pane()                  control bar, full width
//!   └── join_vertical()         row above control bar
//! ```
//!
//! Focus is only visible here: the border of the active pane gets the
//! focused color, every other border the neutral one.

use crate::core::state::{App, Pane};
use crate::tui::cells::{DisplayWidth, render_block};
use crate::tui::layout::{CONTROL_BAR_HEIGHT, plan};
use crate::tui::panes;
use crate::tui::theme::{Role, Theme};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Rounded border glyphs.
const TOP_LEFT: &str = "╭";
const TOP_RIGHT: &str = "╮";
const BOTTOM_LEFT: &str = "╰";
const BOTTOM_RIGHT: &str = "╯";
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Cells taken by the left and right (or top and bottom) border.
const BORDER_OVERHEAD: usize = 2;

/// Wrap a rectangular block of `inner_width` cells in a rounded border.
pub fn bordered(
    block: Vec<Line<'static>>,
    inner_width: usize,
    style: Style,
) -> Vec<Line<'static>> {
    let rule = HORIZONTAL.repeat(inner_width);
    let mut lines = Vec::with_capacity(block.len() + BORDER_OVERHEAD);

    lines.push(Line::from(Span::styled(
        format!("{TOP_LEFT}{rule}{TOP_RIGHT}"),
        style,
    )));
    for line in block {
        let mut spans = Vec::with_capacity(line.spans.len() + 2);
        spans.push(Span::styled(VERTICAL, style));
        spans.extend(line.spans.into_iter().map(|span| span.patch_style(line.style)));
        spans.push(Span::styled(VERTICAL, style));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!("{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}"),
        style,
    )));

    lines
}

/// A bordered pane whose outer size is `width` × `height`.
///
/// The inside never shrinks below one cell, so a degenerate size still
/// yields a 3×3 pane rather than nothing.
pub fn pane<W: DisplayWidth + ?Sized>(
    content: &[Line<'_>],
    width: u16,
    height: u16,
    border: Style,
    cells: &W,
) -> Vec<Line<'static>> {
    let inner_width = usize::from(width).saturating_sub(BORDER_OVERHEAD).max(1);
    let inner_height = usize::from(height).saturating_sub(BORDER_OVERHEAD).max(1);
    bordered(render_block(content, inner_width, inner_height, cells), inner_width, border)
}

/// Place panes side by side. All panes must have the same height.
pub fn join_horizontal(panes: Vec<Vec<Line<'static>>>) -> Vec<Line<'static>> {
    let height = panes.first().map_or(0, Vec::len);
    debug_assert!(panes.iter().all(|p| p.len() == height));

    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new(); height];
    for pane in panes {
        for (row, line) in rows.iter_mut().zip(pane) {
            row.extend(line.spans);
        }
    }
    rows.into_iter().map(Line::from).collect()
}

/// Stack blocks top to bottom. Widths are independent.
pub fn join_vertical(blocks: Vec<Vec<Line<'static>>>) -> Vec<Line<'static>> {
    blocks.into_iter().flatten().collect()
}

/// The full frame for `app`: `viewport_height` lines of `viewport_width`
/// cells, or nothing while the viewport is still unknown.
pub fn compose<W: DisplayWidth + ?Sized>(app: &App, theme: &Theme, cells: &W) -> Vec<Line<'static>> {
    if app.viewport_unknown() {
        return Vec::new();
    }
    let app = &app.clone().clamped();

    let geometry = plan(app.viewport_width, app.viewport_height, CONTROL_BAR_HEIGHT);
    let inner_height = usize::from(geometry.pane_height).saturating_sub(BORDER_OVERHEAD);
    let border = |focused: bool| theme.style(Role::Border, focused);

    let nav = pane(
        &panes::nav_lines(app, theme, inner_height),
        geometry.nav_width,
        geometry.pane_height,
        border(app.active_pane == Pane::Navigation),
        cells,
    );
    let feed = pane(
        &panes::feed_lines(app, theme, inner_height),
        geometry.feed_width,
        geometry.pane_height,
        border(app.active_pane == Pane::Feed),
        cells,
    );
    let preview = pane(
        &panes::preview_lines(app, theme),
        geometry.preview_width,
        geometry.pane_height,
        border(false),
        cells,
    );
    let control = pane(
        &panes::control_lines(theme),
        app.viewport_width,
        CONTROL_BAR_HEIGHT,
        border(false),
        cells,
    );

    join_vertical(vec![join_horizontal(vec![nav, feed, preview]), control])
}

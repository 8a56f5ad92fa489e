//! Pane geometry for the three-pane dashboard.
//!
//! ```text
//! ┌── nav ──┬──── feed ────┬──── preview ────┐  ─┐
//! │         │              │                 │   │ pane_height
//! │         │              │                 │   │
//! └─────────┴──────────────┴─────────────────┘  ─┘
//! ┌──────────────── control bar ─────────────┐  ─┐
//! └──────────────────────────────────────────┘  ─┘ CONTROL_BAR_HEIGHT
//! ```
//!
//! Widths always add up to the terminal width once it is at least
//! `NAV_MIN_WIDTH`. Anything smaller is left for the cell renderer to
//! clamp; the planner never fails.

/// Height of the bordered help bar at the bottom, in rows.
pub const CONTROL_BAR_HEIGHT: u16 = 3;

/// Below this the navigation border and labels stop being readable.
pub const NAV_MIN_WIDTH: u16 = 15;

/// The navigation pane takes one fifth of the terminal width.
pub const NAV_WIDTH_DIVISOR: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneGeometry {
    pub nav_width: u16,
    pub feed_width: u16,
    pub preview_width: u16,
    pub pane_height: u16,
}

pub fn plan(viewport_width: u16, viewport_height: u16, control_bar_height: u16) -> PaneGeometry {
    let nav_width = (viewport_width / NAV_WIDTH_DIVISOR).max(NAV_MIN_WIDTH);
    let remaining = viewport_width.saturating_sub(nav_width);
    let feed_width = remaining / 2;

    PaneGeometry {
        nav_width,
        feed_width,
        // Odd remainders go to the preview
        preview_width: remaining - feed_width,
        pane_height: viewport_height.saturating_sub(control_bar_height),
    }
}

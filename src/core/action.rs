//! # Actions
//!
//! Everything that can happen in Paneboard becomes an `Action`.
//! User presses Tab? That's `Action::FocusToggle`.
//! Terminal resized? That's `Action::Resize { width, height }`.
//!
//! The `update()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! The old snapshot is left untouched, so a test can keep it around and
//! compare: `assert_eq!(update(&state, MoveUp).0, state)`.

use crate::core::state::App;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Resize { width: u16, height: u16 },
    FocusToggle,
    MoveUp,
    MoveDown,
    Quit,
    /// Any key the dashboard doesn't bind.
    Ignore,
}

/// What the event loop should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(state: &App, action: Action) -> (App, Effect) {
    // Recover from a corrupted snapshot before applying anything
    let app = state.clone().clamped();
    let pane = app.active_pane;

    let (next, effect) = match action {
        Action::Resize { width, height } => (
            App {
                viewport_width: width,
                viewport_height: height,
                ..app
            },
            Effect::None,
        ),
        Action::FocusToggle => (
            App {
                active_pane: pane.toggled(),
                ..app
            },
            Effect::None,
        ),
        Action::MoveUp => {
            let cursor = app.cursor(pane).saturating_sub(1);
            (app.with_cursor(pane, cursor), Effect::None)
        }
        Action::MoveDown => {
            let last = app.len(pane).saturating_sub(1);
            let cursor = (app.cursor(pane) + 1).min(last);
            (app.with_cursor(pane, cursor), Effect::None)
        }
        Action::Quit => (app, Effect::Quit),
        Action::Ignore => (app, Effect::None),
    };

    let next = next.clamped();
    debug!(
        "{:?}: pane={:?} nav={} feed={} viewport={}x{}",
        action,
        next.active_pane,
        next.nav_cursor,
        next.feed_cursor,
        next.viewport_width,
        next.viewport_height
    );
    (next, effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::feed::Feed;
    use crate::core::state::Pane;
    use crate::test_support::test_app;

    fn apply(state: &App, actions: &[Action]) -> App {
        actions
            .iter()
            .fold(state.clone(), |app, &action| update(&app, action).0)
    }

    fn assert_cursors_in_bounds(app: &App) {
        if !app.nav_items.is_empty() {
            assert!(app.nav_cursor < app.nav_items.len());
        }
        if !app.feed_entries.is_empty() {
            assert!(app.feed_cursor < app.feed_entries.len());
        }
    }

    #[test]
    fn test_resize_sets_viewport_only() {
        let app = test_app();
        let (next, effect) = update(&app, Action::Resize { width: 80, height: 24 });
        assert_eq!(effect, Effect::None);
        assert_eq!(next.viewport_width, 80);
        assert_eq!(next.viewport_height, 24);
        assert_eq!(next.nav_cursor, app.nav_cursor);
        assert_eq!(next.feed_cursor, app.feed_cursor);
        assert_eq!(next.active_pane, app.active_pane);
    }

    #[test]
    fn test_focus_toggle_is_its_own_inverse() {
        let app = test_app();
        let once = update(&app, Action::FocusToggle).0;
        assert_eq!(once.active_pane, Pane::Feed);
        let twice = update(&once, Action::FocusToggle).0;
        assert_eq!(twice.active_pane, app.active_pane);
    }

    #[test]
    fn test_move_up_at_zero_is_idempotent() {
        let app = test_app();
        assert_eq!(update(&app, Action::MoveUp).0, app);
    }

    #[test]
    fn test_move_down_at_last_is_idempotent() {
        let app = apply(&test_app(), &[Action::MoveDown; 4]);
        assert_eq!(app.nav_cursor, 4);
        assert_eq!(update(&app, Action::MoveDown).0, app);
    }

    #[test]
    fn test_move_only_affects_active_pane() {
        let app = apply(&test_app(), &[Action::MoveDown, Action::MoveDown]);
        assert_eq!(app.nav_cursor, 2);
        assert_eq!(app.feed_cursor, 0);

        let app = apply(&app, &[Action::FocusToggle, Action::MoveDown]);
        assert_eq!(app.nav_cursor, 2);
        assert_eq!(app.feed_cursor, 1);
    }

    #[test]
    fn test_move_down_ten_times_on_feed_stops_at_last() {
        let app = update(&test_app(), Action::FocusToggle).0;
        let app = apply(&app, &[Action::MoveDown; 10]);
        assert_eq!(app.feed_cursor, 7);
    }

    #[test]
    fn test_empty_feed_moves_are_noops() {
        let feed = Feed {
            entries: Vec::new(),
            ..Feed::demo()
        };
        let app = update(&App::new(feed), Action::FocusToggle).0;
        assert_eq!(update(&app, Action::MoveDown).0, app);
        assert_eq!(update(&app, Action::MoveUp).0, app);
        assert_eq!(app.feed_cursor, 0);
    }

    #[test]
    fn test_quit_signals_effect_without_changing_state() {
        let app = test_app();
        let (next, effect) = update(&app, Action::Quit);
        assert_eq!(effect, Effect::Quit);
        assert_eq!(next, app);
    }

    #[test]
    fn test_ignore_is_noop() {
        let app = test_app();
        assert_eq!(update(&app, Action::Ignore), (app, Effect::None));
    }

    #[test]
    fn test_out_of_range_start_is_clamped() {
        let mut app = test_app();
        app.nav_cursor = 50;
        app.feed_cursor = 50;
        let next = update(&app, Action::Ignore).0;
        assert_eq!(next.nav_cursor, 4);
        assert_eq!(next.feed_cursor, 7);

        // MoveUp from a corrupted cursor lands one below the last row
        let next = update(&app, Action::MoveUp).0;
        assert_eq!(next.nav_cursor, 3);
    }

    #[test]
    fn test_update_leaves_previous_snapshot_untouched() {
        let app = test_app();
        let before = app.clone();
        let _ = update(&app, Action::MoveDown);
        assert_eq!(app, before);
    }

    #[test]
    fn test_cursor_invariant_over_mixed_sequence() {
        let pattern = [
            Action::MoveDown,
            Action::MoveDown,
            Action::FocusToggle,
            Action::MoveDown,
            Action::MoveUp,
            Action::Resize { width: 10, height: 3 },
            Action::MoveDown,
            Action::FocusToggle,
            Action::MoveUp,
            Action::Ignore,
        ];
        let mut app = test_app();
        for round in 0..20 {
            for (i, &action) in pattern.iter().enumerate() {
                // Vary the stream so both ends of each list get visited
                let action = if (round + i) % 3 == 0 {
                    Action::MoveDown
                } else {
                    action
                };
                app = update(&app, action).0;
                assert_cursors_in_bounds(&app);
            }
        }
    }
}

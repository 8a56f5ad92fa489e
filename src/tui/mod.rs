//! # TUI Adapter
//!
//! The ratatui-specific layer. Turns terminal events into `core::Action`
//! values, feeds them through `update()`, and draws the resulting snapshot.
//!
//! Rendering is split into small pure steps so each can be tested without
//! a terminal:
//!
//! - [`layout`]: pane widths/heights from the terminal size
//! - [`cells`]: clip/pad text to an exact cell grid
//! - [`frame`]: borders and horizontal/vertical composition
//! - [`panes`]: the lines inside each pane, including the preview
//! - [`theme`]: focused/neutral colors per role
//!
//! ## Redraw Strategy
//!
//! The loop blocks on the next event, then drains anything already queued
//! before drawing once. Nothing animates, so an idle dashboard costs nothing.

mod component;
pub mod cells;
mod event;
pub mod frame;
pub mod layout;
pub mod panes;
pub mod theme;
mod ui;

use log::{debug, info};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::feed::Feed;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, next_event, poll_event_immediate};
use crate::tui::theme::Theme;

pub fn run(config: &ResolvedConfig, feed: Feed) -> std::io::Result<()> {
    let theme = Theme::from_config(&config.theme);
    let mut terminal = ratatui::init();

    // The first frame needs a size before any resize event shows up
    let result = crossterm::terminal::size().and_then(|(width, height)| {
        let app = update(&App::new(feed), Action::Resize { width, height }).0;
        event_loop(&mut terminal, app, &theme)
    });

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    mut app: App,
    theme: &Theme,
) -> std::io::Result<()> {
    info!(
        "Dashboard started ({} nav items, {} entries)",
        app.nav_items.len(),
        app.feed_entries.len()
    );

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app, theme))?;

        let first_event = next_event()?;
        let mut pending = vec![first_event];
        while let Some(event) = poll_event_immediate()? {
            pending.push(event);
        }

        for event in pending {
            let (next, effect) = update(&app, Action::from(event));
            app = next;
            if effect == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            if let TuiEvent::Resize(width, height) = event {
                debug!("Terminal resized to {}x{}", width, height);
            }
        }
    }
}

//! # Core Application Logic
//!
//! This module contains Paneboard's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (snapshot)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` snapshot: cursors, focus, viewport
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`feed`]: Navigation labels and feed entries (the data source)
//! - [`config`]: Config file loading and override resolution

pub mod action;
pub mod config;
pub mod feed;
pub mod state;

pub use action::{Action, Effect, update};
pub use state::{App, Pane};

//! Terminal UI for ninedays
//!
//! Owns the application state (fetch phase, navigation cursor, theme) and
//! renders it with ratatui. All network work runs off the UI thread; the
//! fetch result arrives once via mpsc.

pub mod app;
pub mod fetch;
pub mod theme;
pub mod tui;
pub mod ui;

pub use app::{AppState, Phase};
pub use fetch::{request_fetch, FeedMessage};
pub use theme::Theme;

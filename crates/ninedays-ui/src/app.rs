//! Owned application state.
//!
//! Everything the renderer needs lives in one struct: the fetch phase, the
//! general-situation summary, the navigation cursor, and the theme. Every
//! mutation is a single synchronous update triggered by a key press or by
//! the fetch result message.

use ninedays_feed::ForecastNavigator;

use crate::fetch::FeedMessage;
use crate::theme::Theme;

/// Where the single fetch-on-load currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug)]
pub struct AppState {
    pub phase: Phase,
    pub general_situation: Option<String>,
    pub navigator: ForecastNavigator,
    pub theme: Theme,
    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            general_situation: None,
            navigator: ForecastNavigator::new(),
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Apply a message from the fetch bridge.
    pub fn apply(&mut self, message: FeedMessage) {
        match message {
            FeedMessage::FetchDone(Ok(bulletin)) => {
                self.general_situation = bulletin.general_situation;
                self.navigator.set_list(bulletin.weather_forecast);
                self.phase = Phase::Ready;
            }
            FeedMessage::FetchDone(Err(e)) => {
                self.phase = Phase::Failed(e.user_message());
            }
        }
    }

    /// Move the cursor to the next day. Ignored unless data is ready.
    pub fn next_day(&mut self) {
        if self.phase == Phase::Ready {
            self.navigator.move_next();
        }
    }

    /// Move the cursor to the previous day. Ignored unless data is ready.
    pub fn previous_day(&mut self) {
        if self.phase == Phase::Ready {
            self.navigator.move_previous();
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

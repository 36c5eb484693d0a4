//! Terminal event loop.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::AppState;
use crate::fetch::FeedMessage;
use crate::ui;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the UI until the user quits. The receiver carries the single fetch
/// result; everything else is key handling.
pub fn run(mut state: AppState, rx: Receiver<FeedMessage>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state, &rx);

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    rx: &Receiver<FeedMessage>,
) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|f| ui::draw(f, state))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => state.quit(),
                    KeyCode::Right | KeyCode::Char('l') => state.next_day(),
                    KeyCode::Left | KeyCode::Char('h') => state.previous_day(),
                    KeyCode::Char('t') => state.toggle_theme(),
                    _ => {}
                }
            }
        }

        while let Ok(message) = rx.try_recv() {
            state.apply(message);
        }
    }
    Ok(())
}

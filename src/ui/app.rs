//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::deck_consts::timing;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The deck itself.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Deck state. Time does not advance while the splash is up.
    state: Box<DashboardState>,

    /// How long the splash stays up unless a key is pressed.
    splash_duration: Duration,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(state: DashboardState) -> Self {
        let splash_duration = state.config().splash_duration();
        Self {
            current_screen: Screen::Splash,
            state: Box::new(state),
            splash_duration,
        }
    }

    pub fn into_state(self) -> DashboardState {
        *self.state
    }

    /// Apply a key press. Returns true when the user asked to quit; the deck
    /// is left running for the caller to shut down.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_quit(key.code, key.modifiers) {
            return true;
        }
        match self.current_screen {
            // Any key press will skip the splash screen
            Screen::Splash => self.current_screen = Screen::Dashboard,
            Screen::Dashboard => self.state.handle_key(key.code),
        }
        false
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q'))
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let mut last_frame = Instant::now();

    // UI event loop
    loop {
        let frame_start = Instant::now();
        let elapsed = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        if app.current_screen == Screen::Dashboard {
            app.state.update(elapsed);
        }
        terminal.draw(|f| render(f, app))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= app.splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(timing::input_poll())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, &app.state),
    }
}

//! Session setup and initialization

use crate::config::Config;
use crate::jitter::RngDeltaSource;
use crate::print_cmd_warn;
use crate::ui::dashboard::DashboardState;
use std::error::Error;
use tokio::sync::broadcast;

/// Command-line choices that shape a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Section to open on; falls back to the config's `initial_section`
    pub section: Option<String>,
    /// Seed for the jitter source; entropy when absent
    pub seed: Option<u64>,
    /// Force the dashboard background color on
    pub with_background: bool,
}

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// The deck, already on its initial section
    pub state: DashboardState,
    /// Shutdown sender, fired on Ctrl+C
    pub shutdown_sender: broadcast::Sender<()>,
}

/// Open the requested section, the flag taking priority over the config.
/// Unknown ids are reported and leave the deck where it is.
fn open_initial_section(state: &mut DashboardState, options: &SessionOptions) {
    let requested = options
        .section
        .clone()
        .or_else(|| state.config().initial_section.clone());
    let Some(raw) = requested else {
        return;
    };
    if !state.select_section_str(&raw) && state.current_section().as_ref() != raw {
        print_cmd_warn!(
            "Unknown section",
            "'{}' is not a section id, staying on {}. Run `tumortarget sections` to list them.",
            raw,
            state.current_section()
        );
    }
}

/// Build the deck state for a new session.
pub fn setup_session(
    mut config: Config,
    options: SessionOptions,
) -> Result<SessionData, Box<dyn Error>> {
    config.with_background_color |= options.with_background;

    let source = RngDeltaSource::from_seed_option(options.seed);
    let mut state = DashboardState::new(config, Box::new(source))?;
    open_initial_section(&mut state, &options);

    let (shutdown_sender, _) = broadcast::channel(1);
    Ok(SessionData {
        state,
        shutdown_sender,
    })
}

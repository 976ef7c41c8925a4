//! Main TUI runner - entry point and event loop

use profile_app::config::Settings;
use profile_app::handler::{self, restore_from_location};
use profile_app::signals::{self, ShutdownListener};
use profile_app::{AppState, Location, Message};
use profile_core::prelude::*;
use profile_core::AccountRecord;

use super::{event, render, terminal};

/// Run the profile editor until the user quits.
///
/// Returns the account record as it stands at exit.
pub async fn run(settings: Settings, location: Location) -> Result<AccountRecord> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings, location);
    restore_from_location(&mut state);
    info!("Starting at {}", state.location);

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let shutdown = signals::spawn_signal_handler();

    let result = run_loop(&mut term, &mut state, shutdown);

    // Restore terminal
    ratatui::restore();

    result.map(|()| state.controller.record().clone())
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut shutdown: ShutdownListener,
) -> Result<()> {
    while !state.should_quit() {
        // Quit requests from OS signals
        while let Some(msg) = shutdown.try_next() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    Ok(())
}

/// Process a message and every follow-up it produces
pub fn process_message(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = handler::update(state, m).message;
    }
}

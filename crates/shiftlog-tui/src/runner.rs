//! Main TUI runner - entry point and event loop

use ratatui::DefaultTerminal;
use shiftlog_app::config::Settings;
use shiftlog_app::{signals, Engine};
use shiftlog_client::{HttpBackend, ShiftBackend};
use shiftlog_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against the backend at `backend_url` until the user quits
pub async fn run(settings: Settings, backend_url: String) -> Result<()> {
    let backend = HttpBackend::new(backend_url.clone());
    let mut engine = Engine::new(settings, backend_url, backend);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = terminal::init().context("Starting terminal")?;
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::restore();

    if let Err(ref e) = result {
        error!("TUI loop failed: {}", e);
    }
    result
}

/// Drain background messages, draw, then wait briefly for input
fn run_loop<B>(terminal: &mut DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: ShiftBackend + Send + Sync + 'static,
{
    while !engine.should_quit() {
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving main loop");
    Ok(())
}

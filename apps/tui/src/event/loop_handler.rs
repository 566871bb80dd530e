use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::time::Duration;

use crate::app::{handle_input, handle_mouse, App};
use crate::terminal::Tui;
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the main application event loop
pub fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.update();

        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);
        app.refresh_fills();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_input(app, key),
            Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(Event::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
                app.hover.pointer_left(&mut app.tooltip);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
        }
    }
    Ok(())
}

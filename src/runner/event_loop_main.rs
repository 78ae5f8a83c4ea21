use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, install_panic_hook, restore_terminal};
use crate::ui;

use anyhow::Context;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::Duration;
use tracing::info;

pub fn run_app(mut app: App) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal(app.mouse_enabled).context("failed to set up terminal")?;
    info!(theme = %app.theme.mode(), mouse = app.mouse_enabled, "ui started");

    // Restore the terminal even when the loop fails, then report the error.
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal).context("failed to restore terminal")?;

    info!(wishes = app.wishes.len(), "ui stopped");
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if !poll(Duration::from_millis(100))? {
            continue;
        }
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(app, key)? {
                    break;
                }
            }
            InputEvent::Mouse(me) => {
                // Hit-test against the same layout the last frame was drawn with.
                let ts = terminal.size()?;
                let term_rect = Rect::new(0, 0, ts.width, ts.height);
                handlers::handle_mouse(app, me, term_rect)?;
            }
            InputEvent::Paste(text) => handlers::handle_paste(app, &text),
            InputEvent::Resize(_, _) => { /* redraw on next loop */ }
            InputEvent::Other => {}
        }
    }
    Ok(())
}

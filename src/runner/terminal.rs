use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use thiserror::Error;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize terminal (enter alternate screen + enable raw mode) and return a TUI Terminal.
/// Mouse capture is only requested when `mouse` is set.
pub fn init_terminal(mouse: bool) -> Result<Tui, TerminalError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

// Undo everything `init_terminal` turned on. Disabling mouse capture that was
// never enabled is harmless.
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
}

/// Restore terminal state (leave alternate screen + disable raw mode) and show cursor.
pub fn restore_terminal(mut terminal: Tui) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

/// Put the terminal back before the default panic message is printed, so a
/// panic inside the loop does not leave the shell in raw mode.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_screen_turns_off_everything_init_enables() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "alternate screen: {written:?}");
        assert!(written.contains("\x1b[?1000l"), "mouse capture: {written:?}");
        assert!(written.contains("\x1b[?2004l"), "bracketed paste: {written:?}");
    }
}

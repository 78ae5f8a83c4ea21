use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::settings::KeyAction;
use crate::app::{App, Focus};
use crate::ui::{Colors, ScreenLayout};

/// Key hints for the focused surface, followed by the toggle's label.
pub fn help_text(app: &App) -> String {
    let km = &app.keymap;
    let focus_hint = match app.focus {
        Focus::Input => format!("{}:add", km.hint(KeyAction::Submit)),
        Focus::List => format!(
            "{}/{}:select  {}:remove",
            km.hint(KeyAction::Up),
            km.hint(KeyAction::Down),
            km.hint(KeyAction::Remove)
        ),
    };
    format!(
        " {}  {}:switch focus  {}:{}  {}:quit",
        focus_hint,
        km.hint(KeyAction::FocusNext),
        km.hint(KeyAction::ToggleTheme),
        app.theme.mode().toggle_label(),
        km.hint(KeyAction::Quit),
    )
}

pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App, colors: &Colors) {
    f.render_widget(Paragraph::new(help_text(app)).style(colors.help_style), layout.help);
}

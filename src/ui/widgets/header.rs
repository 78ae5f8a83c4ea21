use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::ui::{Colors, ScreenLayout, TITLE};

/// Title on the left, theme toggle on the right.
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App, colors: &Colors) {
    f.render_widget(
        Paragraph::new(TITLE).style(colors.title_style),
        layout.title,
    );

    let glyph = app.theme.mode().toggle_glyph();
    let toggle = Paragraph::new(Line::from(glyph).centered()).style(colors.toggle_style);
    f.render_widget(toggle, layout.toggle);
}

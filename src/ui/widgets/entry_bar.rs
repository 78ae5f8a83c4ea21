use ratatui::layout::Position;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::ui::layout::ADD_LABEL;
use crate::ui::{Colors, ScreenLayout, INPUT_PLACEHOLDER};

/// The draft field and the Add button. Places the terminal cursor in the
/// field while it has focus.
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App, colors: &Colors) {
    let focused = app.focus == Focus::Input;
    let border = if focused {
        colors.input_focused_border_style
    } else {
        colors.input_border_style
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(colors.input_style);
    let inner = block.inner(layout.input);

    let (shown, cursor_col) = app.draft.visible_window(usize::from(inner.width));
    let content = if app.draft.is_empty() {
        Line::from(Span::styled(INPUT_PLACEHOLDER, colors.placeholder_style))
    } else {
        Line::from(shown)
    };
    f.render_widget(Paragraph::new(content).block(block), layout.input);

    if focused && inner.width > 0 && inner.height > 0 {
        let col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(col).min(inner.right().saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y));
    }

    // Vertically centered label on the accent background.
    let button = Paragraph::new(vec![Line::raw(""), Line::from(ADD_LABEL).centered()])
        .style(colors.add_button_style);
    f.render_widget(button, layout.add_button);
}

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus};
use crate::ui::layout::REMOVE_LABEL;
use crate::ui::{Colors, ScreenLayout, EMPTY_MESSAGE};

/// Either the empty-state message or one row per visible wish.
pub fn render(f: &mut Frame, layout: &ScreenLayout, app: &App, colors: &Colors) {
    if app.wishes.is_empty() {
        draw_empty(f, layout.list, colors);
        return;
    }

    let list_focused = app.focus == Focus::List;
    for row in &layout.rows {
        let selected = list_focused && row.index == app.selected;
        let style = if selected {
            colors.row_selected_style
        } else {
            colors.row_style
        };
        f.render_widget(Block::default().style(style), row.area);
        if selected {
            f.render_widget(Paragraph::new("›").style(style), row.marker);
        }
        let lines: Vec<Line> = row.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        f.render_widget(Paragraph::new(lines).style(style), row.text);
        f.render_widget(
            Paragraph::new(REMOVE_LABEL).style(colors.remove_button_style),
            row.remove,
        );
    }
}

fn draw_empty(f: &mut Frame, area: Rect, colors: &Colors) {
    let p = Paragraph::new(vec![Line::raw(""), Line::from(EMPTY_MESSAGE).centered()])
        .style(colors.empty_message_style);
    f.render_widget(p, area);
}

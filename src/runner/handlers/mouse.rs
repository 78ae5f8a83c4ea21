use ratatui::layout::{Position, Rect};
use tracing::trace;

use crate::app::{App, Focus};
use crate::input::{MouseButton, MouseEvent, MouseEventKind};
use crate::ui::{Hit, ScreenLayout};

/// Dispatch a mouse event. `term_rect` is the full terminal area; the layout
/// is recomputed from it and the current state so clicks land on exactly
/// what was drawn.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term_rect: Rect) -> anyhow::Result<()> {
    if !app.mouse_enabled {
        return Ok(());
    }
    let layout = ScreenLayout::compute(term_rect, app);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let hit = layout.hit(me.column, me.row);
            trace!(?hit, column = me.column, row = me.row, "click");
            match hit {
                Some(Hit::ToggleTheme) => {
                    app.toggle_theme();
                }
                Some(Hit::Add) => {
                    app.submit_wish();
                }
                Some(Hit::Input) => app.focus = Focus::Input,
                Some(Hit::Remove(index)) => {
                    app.remove_wish(index);
                }
                Some(Hit::Row(index)) => {
                    app.focus = Focus::List;
                    app.selected = index;
                }
                None => {}
            }
        }
        MouseEventKind::ScrollDown if layout.list.contains(Position::new(me.column, me.row)) => {
            app.select_next();
        }
        MouseEventKind::ScrollUp if layout.list.contains(Position::new(me.column, me.row)) => {
            app.select_prev();
        }
        _ => {}
    }
    Ok(())
}

use ratatui::widgets::{Block, BorderType};
use ratatui::Frame;

use crate::ui::{Colors, ScreenLayout};

/// Rounded card holding the header, entry bar and list.
pub fn render(f: &mut Frame, layout: &ScreenLayout, colors: &Colors) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(colors.container_style);
    f.render_widget(block, layout.container);
}

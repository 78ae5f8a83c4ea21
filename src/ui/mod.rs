use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::App;

pub mod colors;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use colors::Colors;
pub use layout::{Hit, ScreenLayout};
pub use theme::{Palette, Theme};

pub const TITLE: &str = "My Wish List";
pub const INPUT_PLACEHOLDER: &str = "Enter your wish...";
pub const EMPTY_MESSAGE: &str = "No wishes yet... Add the first one!";

/// Draw one frame of the whole screen.
pub fn ui(f: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(f.area(), app);
    // Styles are derived from the theme on every frame.
    let colors = Colors::from_theme(&app.theme);

    // Page background first so everything outside the container picks up
    // the page tokens.
    f.render_widget(Block::default().style(colors.page_style), layout.page);

    widgets::container::render(f, &layout, &colors);
    widgets::header::render(f, &layout, app, &colors);
    widgets::entry_bar::render(f, &layout, app, &colors);
    widgets::wish_list::render(f, &layout, app, &colors);
    widgets::help_bar::render(f, &layout, app, &colors);
}

use ratatui::style::{Modifier, Style};

use crate::ui::theme::Theme;

/// Concrete styles for one frame, derived from the theme's current palette.
/// Built fresh on every draw; nothing here is cached between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colors {
    pub page_style: Style,
    pub container_style: Style,
    pub title_style: Style,
    pub toggle_style: Style,
    pub input_style: Style,
    pub input_border_style: Style,
    pub input_focused_border_style: Style,
    pub placeholder_style: Style,
    pub add_button_style: Style,
    pub row_style: Style,
    pub row_selected_style: Style,
    pub remove_button_style: Style,
    pub empty_message_style: Style,
    pub help_style: Style,
}

impl Colors {
    pub fn from_theme(theme: &Theme) -> Self {
        let p = theme.palette();
        Colors {
            page_style: Style::default().bg(p.bg).fg(p.text),
            container_style: Style::default().bg(p.container_bg).fg(p.text),
            title_style: Style::default()
                .bg(p.container_bg)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            toggle_style: Style::default()
                .bg(p.surface)
                .fg(p.surface_text)
                .add_modifier(Modifier::BOLD),
            input_style: Style::default().bg(p.input_bg).fg(p.input_text),
            input_border_style: Style::default().bg(p.input_bg).fg(p.input_border),
            input_focused_border_style: Style::default().bg(p.input_bg).fg(p.accent),
            placeholder_style: Style::default().bg(p.input_bg).fg(p.muted),
            add_button_style: Style::default()
                .bg(p.accent)
                .fg(p.on_accent)
                .add_modifier(Modifier::BOLD),
            row_style: Style::default().bg(p.surface).fg(p.text),
            row_selected_style: Style::default()
                .bg(p.surface)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            remove_button_style: Style::default().bg(p.danger).fg(p.on_accent),
            empty_message_style: Style::default().bg(p.container_bg).fg(p.muted),
            help_style: Style::default().bg(p.bg).fg(p.muted),
        }
    }
}

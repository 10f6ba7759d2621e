//! Single-line bar of key hints at the bottom of the screen

use super::keybindings::NavBarItem;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette) {
        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", palette.text_muted()));
            }
            spans.push(Span::styled(item.key_display.clone(), palette.nav_hint()));
            spans.push(Span::styled(format!(" {}", item.action_label), palette.text_muted()));
        }
        let bar = Paragraph::new(Line::from(spans)).style(palette.panel_bg_alt());
        f.render_widget(bar, area);
    }
}

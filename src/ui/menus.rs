//! Menu rendering module
//!
//! A vertical menu is a bordered list in a side panel; a horizontal menu is a
//! tab row above the page.

use crate::menu::{Menu, icon_glyph};
use crate::session::{Focus, Session};
use crate::theme::Palette;
use crate::types::Orientation;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Tabs},
};

/// Render the page menu in the given area
pub fn render_menu(f: &mut Frame, session: &Session, area: Rect) {
    let palette = session.palette();
    let focused = session.focus == Focus::Menu;
    match session.menu().orientation() {
        Orientation::Vertical => render_sidebar(f, session.menu(), palette, focused, area),
        Orientation::Horizontal => render_tabs(f, session.menu(), palette, focused, area),
    }
}

fn menu_block(palette: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(" Main Menu ")
        .title_style(palette.title())
        .border_style(if focused {
            palette.border_active()
        } else {
            palette.border_inactive()
        })
}

fn render_sidebar(f: &mut Frame, menu: &Menu, palette: &Palette, focused: bool, area: Rect) {
    let items: Vec<ListItem> = menu
        .entries()
        .iter()
        .map(|entry| ListItem::new(format!(" {} {}", icon_glyph(&entry.icon), entry.label)))
        .collect();

    let list = List::new(items)
        .block(menu_block(palette, focused))
        .style(palette.panel_bg_alt())
        .highlight_style(palette.selected())
        .highlight_symbol("▸");

    let mut state = ListState::default().with_selected(menu.selected_index());
    f.render_stateful_widget(list, area, &mut state);
}

fn render_tabs(f: &mut Frame, menu: &Menu, palette: &Palette, focused: bool, area: Rect) {
    let titles: Vec<Line> = menu
        .entries()
        .iter()
        .map(|entry| Line::from(format!(" {} {} ", icon_glyph(&entry.icon), entry.label)))
        .collect();

    let tabs = Tabs::new(titles)
        .block(menu_block(palette, focused))
        .style(palette.panel_bg_alt())
        .highlight_style(palette.selected())
        .select(menu.selected_index().unwrap_or(0))
        .divider("│");
    f.render_widget(tabs, area);
}

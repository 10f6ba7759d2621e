//! Page titles and the status/nav rows
//!
//! Shared by every page and by the top-level renderer.

use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::session::{Focus, Session};
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render a bordered page title
pub fn render_page_title(f: &mut Frame, area: Rect, title: &str, palette: &Palette) {
    let title_widget = Paragraph::new(title)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.border_inactive()),
        )
        .alignment(Alignment::Left)
        .style(palette.title());
    f.render_widget(title_widget, area);
}

/// Render the status line: focus, theme and the last message
pub fn render_status_line(f: &mut Frame, session: &Session, area: Rect) {
    let palette = session.palette();
    let focus = match session.focus {
        Focus::Menu => "MENU",
        Focus::Page => "PAGE",
    };
    let mut spans = vec![
        Span::styled(format!(" {} ", focus), palette.selected()),
        Span::styled(
            format!(" theme: {} ", session.snapshot().status),
            palette.text_muted(),
        ),
    ];
    if !session.status_message.is_empty() {
        let style = if session.status_message.starts_with("Save failed") {
            palette.error()
        } else {
            palette.success()
        };
        spans.push(Span::styled(session.status_message.clone(), style));
    }
    let status = Paragraph::new(Line::from(spans)).style(palette.panel_bg_alt());
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    session: &Session,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(session.focus);
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area, session.palette());
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, session: &Session, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(session.focus, keybinding_ctx, session.palette());
    help_overlay.render(f, f.area(), session.palette());
}

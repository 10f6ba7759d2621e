//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Page titles, status line, nav bar and help overlay
//! - `menus` - Page menu as a sidebar list or a tab row
//! - `debug` - Session state side panel

mod debug;
mod header;
mod menus;

pub use header::render_page_title;

use crate::components::keybindings::KeybindingContext;
use crate::session::Session;
use crate::theme::UiConstants;
use crate::types::Orientation;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// UI renderer for the dashboard
///
/// Screen layout, top to bottom: menu and page content, status line, nav bar.
/// A vertical menu sits to the left of the content, a horizontal one above it.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI for the current session state
    pub fn render(&self, f: &mut Frame, session: &mut Session, keybinding_ctx: &KeybindingContext) {
        let palette = *session.palette();
        f.render_widget(Block::default().style(palette.panel_bg()), f.area());

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        let (menu_area, body_area) = split_menu(main_chunks[0], session.menu().orientation());
        menus::render_menu(f, session, menu_area);

        let body_area = if session.debug_visible {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(UiConstants::DEBUG_PANEL_WIDTH),
                ])
                .split(body_area);
            debug::render_debug_panel(f, session, chunks[1]);
            chunks[0]
        } else {
            body_area
        };

        let content_area = if session.snapshot().layout.wide_mode {
            body_area
        } else {
            centered_width(body_area, UiConstants::CENTERED_MAX_WIDTH)
        };

        if let Some(error) = session.last_error() {
            render_cycle_error(f, content_area, error, &palette);
        } else if session.menu().is_empty() {
            let empty = Paragraph::new("No pages registered.").style(palette.text_muted());
            f.render_widget(empty, content_area);
        } else {
            session.render_page(f, content_area);
        }

        header::render_status_line(f, session, main_chunks[1]);
        header::render_nav_bar(f, session, keybinding_ctx, main_chunks[2]);

        if session.help_visible {
            header::render_help_overlay(f, session, keybinding_ctx);
        }
    }
}

/// Split `area` into the menu region and the remaining body
pub fn split_menu(area: Rect, orientation: Orientation) -> (Rect, Rect) {
    let chunks = match orientation {
        Orientation::Vertical => Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(UiConstants::SIDEBAR_WIDTH),
                Constraint::Min(1),
            ])
            .split(area),
        Orientation::Horizontal => Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::TAB_BAR_HEIGHT),
                Constraint::Min(1),
            ])
            .split(area),
    };
    (chunks[0], chunks[1])
}

/// Horizontally centred slice of `area` no wider than `max_width`
pub fn centered_width(area: Rect, max_width: u16) -> Rect {
    if area.width <= max_width {
        return area;
    }
    Rect {
        x: area.x + (area.width - max_width) / 2,
        width: max_width,
        ..area
    }
}

fn render_cycle_error(f: &mut Frame, area: Rect, error: &str, palette: &crate::theme::Palette) {
    let lines = vec![
        Line::styled(error.to_string(), palette.error()),
        Line::from(""),
        Line::styled(
            "Fix or delete the file, then press R to reload.",
            palette.text_muted(),
        ),
    ];
    let message = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Configuration error ")
                .border_style(palette.error()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(message, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_width_caps_and_centres() {
        let area = Rect::new(10, 2, 130, 20);
        let centred = centered_width(area, 90);
        assert_eq!(centred, Rect::new(30, 2, 90, 20));
    }

    #[test]
    fn test_centered_width_keeps_narrow_area() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(centered_width(area, 90), area);
    }

    #[test]
    fn test_split_menu_by_orientation() {
        let area = Rect::new(0, 0, 100, 30);
        let (menu, body) = split_menu(area, Orientation::Vertical);
        assert_eq!(menu.width, UiConstants::SIDEBAR_WIDTH);
        assert_eq!(body.height, 30);

        let (menu, body) = split_menu(area, Orientation::Horizontal);
        assert_eq!(menu.height, UiConstants::TAB_BAR_HEIGHT);
        assert_eq!(body.width, 100);
    }
}

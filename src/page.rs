//! Page abstraction and context

use crate::config_file::{ConfigSnapshot, ConfigStore, LayoutConfig, SectionEdit};
use crate::theme::{Palette, ThemeConfig};
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

/// What a page asks the lifecycle to do after handling a key
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// Nothing to do beyond redrawing
    None,
    /// Hand keyboard focus back to the menu
    Leave,
    /// Persist a new theme and layout, then refresh the session
    Apply {
        theme: ThemeConfig,
        layout: LayoutConfig,
    },
    /// Persist edited application settings, then refresh the session
    SaveSections(Vec<SectionEdit>),
    /// Show a message in the status line
    Notice(String),
}

/// Read-only view of the session handed to pages
pub struct PageContext<'a> {
    pub snapshot: &'a ConfigSnapshot,
    pub palette: &'a Palette,
    pub store: &'a ConfigStore,
}

/// Trait that all dashboard pages implement
pub trait Page {
    /// Menu label; must be unique across the registry
    fn label(&self) -> &str;

    /// Icon identifier shown next to the label
    fn icon(&self) -> &str;

    /// Sort key for the menu, ascending
    fn order(&self) -> i32;

    /// Draw the page into `area`
    fn render(&mut self, f: &mut Frame, area: Rect, context: &PageContext);

    /// Handle a key while the page has focus
    fn handle_key(&mut self, key: KeyEvent, context: &PageContext) -> PageAction {
        let _ = (key, context);
        PageAction::None
    }

    /// Called when the page becomes the selected page or the session reloads
    fn on_enter(&mut self, context: &PageContext) {
        let _ = context;
    }

    /// Whether the page has anything to do with keyboard focus
    fn is_interactive(&self) -> bool {
        false
    }
}

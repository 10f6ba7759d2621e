//! Per-session state and the interaction cycle
//!
//! Every interaction runs one cycle: load the persisted configuration (which
//! creates missing documents), fetch page descriptors from the cache, rebuild
//! the menu with the loaded orientation and notify the selected page when it
//! changed. Rendering the selected page is a separate step driven by the UI.

use crate::config_file::{ConfigSnapshot, ConfigStore};
use crate::error::Result;
use crate::menu::{Menu, build_menu};
use crate::page::{PageAction, PageContext};
use crate::pages::{DEFAULT_PAGE, MANIFEST};
use crate::registry::{PageCache, PageModule};
use crate::theme::Palette;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use serde::Serialize;
use strum::{Display, EnumString};
use tracing::{debug, info, warn};

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Menu,
    Page,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// No page descriptors cached yet
    #[default]
    Idle,
    /// At least one cycle completed
    Rendered,
}

/// Serializable view of the session, used by the debug panel and state dumps
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub theme: String,
    pub primary_color: String,
    pub font: String,
    pub orientation: String,
    pub wide_mode: bool,
    pub previous_page: String,
    pub selected_page: Option<String>,
    pub focus: Focus,
    pub lifecycle: Lifecycle,
    pub page_scans: usize,
}

pub struct Session {
    store: ConfigStore,
    cache: PageCache,
    menu: Menu,
    snapshot: ConfigSnapshot,
    palette: Palette,
    previous_page: String,
    lifecycle: Lifecycle,
    needs_enter: bool,
    last_error: Option<String>,
    pub focus: Focus,
    pub debug_visible: bool,
    pub help_visible: bool,
    pub status_message: String,
}

impl Session {
    /// Session over the built-in page manifest
    pub fn new(store: ConfigStore) -> Self {
        Self::with_manifest(store, MANIFEST)
    }

    pub fn with_manifest(store: ConfigStore, manifest: &[PageModule]) -> Self {
        let snapshot = ConfigSnapshot::default();
        let palette = Palette::from_theme(&snapshot.theme);
        Self {
            store,
            cache: PageCache::new(manifest),
            menu: build_menu(&mut [], snapshot.layout.orientation, None),
            snapshot,
            palette,
            previous_page: DEFAULT_PAGE.to_string(),
            lifecycle: Lifecycle::Idle,
            needs_enter: true,
            last_error: None,
            focus: Focus::Menu,
            debug_visible: false,
            help_visible: false,
            status_message: String::new(),
        }
    }

    /// Run one interaction cycle.
    ///
    /// A malformed document aborts the cycle; the previous snapshot and menu
    /// stay in place and the error is kept for display until a cycle succeeds.
    pub fn cycle(&mut self) -> Result<()> {
        let snapshot = match self.store.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Interaction cycle aborted: {}", e);
                self.last_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.last_error = None;
        if snapshot != self.snapshot {
            self.palette = Palette::from_theme(&snapshot.theme);
            self.snapshot = snapshot;
            // Forms were filled from the old snapshot
            self.needs_enter = true;
        }

        // The first cycle selects the previous page, later ones keep the menu selection
        let current = match self.lifecycle {
            Lifecycle::Idle => self.previous_page.clone(),
            Lifecycle::Rendered => self
                .menu
                .selected_label()
                .map(str::to_string)
                .unwrap_or_else(|| self.previous_page.clone()),
        };
        let pages = self.cache.pages();
        self.menu = build_menu(pages, self.snapshot.layout.orientation, Some(&current));
        self.lifecycle = Lifecycle::Rendered;

        let Some(selected) = self.menu.selected_label().map(str::to_string) else {
            debug!("No pages registered");
            return Ok(());
        };
        if selected != self.previous_page {
            debug!("Page changed: {} -> {}", self.previous_page, selected);
            self.previous_page = selected;
            self.needs_enter = true;
        }
        if self.needs_enter {
            self.enter_selected();
        }
        Ok(())
    }

    /// Forget cached pages and reload everything on the next cycle
    pub fn reload(&mut self) {
        info!("Reloading pages and configuration");
        self.cache.invalidate();
        self.lifecycle = Lifecycle::Idle;
        self.needs_enter = true;
        self.focus = Focus::Menu;
    }

    fn enter_selected(&mut self) {
        self.needs_enter = false;
        let Some(index) = self.menu.selected_index() else {
            return;
        };
        let context = PageContext {
            snapshot: &self.snapshot,
            palette: &self.palette,
            store: &self.store,
        };
        if let Some(descriptor) = self.cache.pages().get_mut(index) {
            descriptor.page.on_enter(&context);
        }
    }

    /// Draw the selected page into `area`
    pub fn render_page(&mut self, f: &mut Frame, area: Rect) {
        let Some(index) = self.menu.selected_index() else {
            return;
        };
        let context = PageContext {
            snapshot: &self.snapshot,
            palette: &self.palette,
            store: &self.store,
        };
        if let Some(descriptor) = self.cache.pages().get_mut(index) {
            descriptor.page.render(f, area, &context);
        }
    }

    /// Forward a key to the selected page and carry out what it asks for
    pub fn page_key(&mut self, key: KeyEvent) {
        let Some(index) = self.menu.selected_index() else {
            return;
        };
        let context = PageContext {
            snapshot: &self.snapshot,
            palette: &self.palette,
            store: &self.store,
        };
        let action = match self.cache.pages().get_mut(index) {
            Some(descriptor) => descriptor.page.handle_key(key, &context),
            None => PageAction::None,
        };
        self.apply(action);
    }

    /// Carry out a page action
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::None => {}
            PageAction::Leave => self.focus = Focus::Menu,
            PageAction::Notice(message) => self.status_message = message,
            PageAction::Apply { theme, layout } => match self.store.save(&theme, layout) {
                Ok(snapshot) => {
                    self.palette = Palette::from_theme(&snapshot.theme);
                    self.snapshot = snapshot;
                    self.needs_enter = true;
                    self.status_message = "Settings applied".to_string();
                }
                Err(e) => {
                    warn!("Failed to save settings: {}", e);
                    self.status_message = format!("Save failed: {}", e);
                }
            },
            PageAction::SaveSections(edits) => match self.store.save_sections(&edits) {
                Ok(changed) => {
                    self.needs_enter = true;
                    self.status_message = format!("Saved {} changed setting(s)", changed);
                }
                Err(e) => {
                    warn!("Failed to save application settings: {}", e);
                    self.status_message = format!("Save failed: {}", e);
                }
            },
        }
    }

    /// Give keyboard focus to the selected page if it takes input
    pub fn focus_page(&mut self) -> bool {
        let interactive = self
            .menu
            .selected_index()
            .and_then(|index| self.cache.pages().get(index).map(|d| d.page.is_interactive()))
            .unwrap_or(false);
        if interactive {
            self.focus = Focus::Page;
        } else if let Some(label) = self.menu.selected_label() {
            self.status_message = format!("{} has no controls", label);
        }
        interactive
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn previous_page(&self) -> &str {
        &self.previous_page
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn page_scans(&self) -> usize {
        self.cache.scan_count()
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            theme: self.snapshot.status.to_string(),
            primary_color: self.snapshot.theme.primary_color.clone(),
            font: self.snapshot.theme.font.to_string(),
            orientation: self.snapshot.layout.orientation.to_string(),
            wide_mode: self.snapshot.layout.wide_mode,
            previous_page: self.previous_page.clone(),
            selected_page: self.menu.selected_label().map(str::to_string),
            focus: self.focus,
            lifecycle: self.lifecycle,
            page_scans: self.cache.scan_count(),
        }
    }

    /// Session state as sorted key/value pairs
    pub fn state_entries(&self) -> Vec<(String, String)> {
        let value = match serde_json::to_value(self.state()) {
            Ok(value) => value,
            Err(e) => return vec![("error".to_string(), e.to_string())],
        };
        let mut entries: Vec<(String, String)> = value
            .as_object()
            .map(|object| {
                object
                    .iter()
                    .map(|(key, value)| {
                        let text = match value {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        (key.clone(), text)
                    })
                    .collect()
            })
            .unwrap_or_default();
        entries.sort();
        entries
    }
}

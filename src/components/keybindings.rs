//! Keybinding system for context-aware keyboard shortcuts
//!
//! Bindings depend on where keyboard focus is: on the page menu or inside the
//! selected page. Global bindings work in both places and avoid plain
//! characters so text fields keep receiving them.

use crate::session::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    FocusPage,
    Back,
    NextField,
    PreviousField,
    Activate,
    Reload,
    ToggleDebug,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        // Shift is implied by the character itself for '?' and friends
        let relevant = event.modifiers & !KeyModifiers::SHIFT;
        relevant == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Focus-specific keybindings
    focus_bindings: HashMap<Focus, Vec<Keybinding>>,
    /// Global keybindings (available with either focus)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            focus_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::new(KeyCode::F(12), KeyAction::ToggleDebug, "F12", "Session state"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.focus_bindings.insert(
            Focus::Menu,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous page"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next page"),
                Keybinding::new(KeyCode::Left, KeyAction::NavigateUp, "Left", "Previous page"),
                Keybinding::new(KeyCode::Right, KeyAction::NavigateDown, "Right", "Next page"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous page"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next page"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First page"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last page"),
                Keybinding::new(KeyCode::Enter, KeyAction::FocusPage, "Enter", "Open page controls"),
                Keybinding::new(KeyCode::Tab, KeyAction::FocusPage, "Tab", "Open page controls"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Reload, "R", "Reload pages and config"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::ToggleDebug, "D", "Session state"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );

        // Handled by the page form; listed for the nav bar and help
        self.focus_bindings.insert(
            Focus::Page,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::PreviousField, "Up", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "Down", "Next field"),
                Keybinding::new(KeyCode::Left, KeyAction::Activate, "Left/Right", "Change value"),
                Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Change or press"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to menu"),
            ],
        );
    }

    /// Get keybindings for a focus (includes global bindings)
    pub fn get_bindings(&self, focus: Focus) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(focus_bindings) = self.focus_bindings.get(&focus) {
            bindings.extend(focus_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Action bound to `key` while the menu has focus
    pub fn resolve_menu(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(Focus::Menu)
            .into_iter()
            .find(|b| b.matches(key))
            .map(|b| b.action)
    }

    /// Global action bound to `key`; everything else goes to the page
    pub fn resolve_global(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.global_bindings
            .iter()
            .find(|b| b.matches(key))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, focus: Focus) -> Vec<NavBarItem> {
        let priority_actions = match focus {
            Focus::Menu => vec![
                KeyAction::NavigateUp,
                KeyAction::FocusPage,
                KeyAction::Reload,
                KeyAction::ToggleDebug,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::Page => vec![
                KeyAction::NextField,
                KeyAction::Activate,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let bindings = self.get_bindings(focus);
        let mut items = Vec::new();
        for action in priority_actions {
            match action {
                KeyAction::NavigateUp => items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Pages".to_string(),
                }),
                KeyAction::NextField => items.push(NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Fields".to_string(),
                }),
                _ => {
                    if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                        items.push(NavBarItem {
                            key_display: binding.display.clone(),
                            action_label: binding.description.clone(),
                        });
                    }
                }
            }
        }
        items
    }

    /// Get full help content for a focus (for help overlay)
    pub fn get_help_content(&self, focus: Focus) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            (
                "Navigation",
                &[
                    KeyAction::NavigateUp,
                    KeyAction::NavigateDown,
                    KeyAction::Home,
                    KeyAction::End,
                    KeyAction::PreviousField,
                    KeyAction::NextField,
                ],
            ),
            (
                "Actions",
                &[KeyAction::FocusPage, KeyAction::Activate, KeyAction::Reload],
            ),
            (
                "General",
                &[
                    KeyAction::Back,
                    KeyAction::ToggleDebug,
                    KeyAction::Help,
                    KeyAction::Quit,
                ],
            ),
        ];

        let bindings = self.get_bindings(focus);
        groups
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

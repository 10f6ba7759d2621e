//! Menu builder
//!
//! Orders registry descriptors and tracks which one is selected. Drawing the
//! menu lives in `ui::menus`; this module only decides what is shown and in
//! which order.

use crate::registry::PageDescriptor;
use crate::types::Orientation;
use std::collections::HashMap;

/// One rendered option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub icon: String,
}

/// Ordered options plus the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    lookup: HashMap<String, usize>,
    selected: usize,
    orientation: Orientation,
}

/// Sort `descriptors` by order and build the menu over them.
///
/// The sort is stable, so equal orders keep registry order. `current` keeps
/// the previous selection when its label is still offered; otherwise the
/// first option is selected. After the call, index `i` of the menu refers to
/// `descriptors[i]`.
pub fn build_menu(
    descriptors: &mut [PageDescriptor],
    orientation: Orientation,
    current: Option<&str>,
) -> Menu {
    descriptors.sort_by_key(|d| d.order);

    let entries: Vec<MenuEntry> = descriptors
        .iter()
        .map(|d| MenuEntry {
            label: d.label.clone(),
            icon: d.icon.clone(),
        })
        .collect();
    let lookup = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.label.clone(), index))
        .collect::<HashMap<_, _>>();
    let selected = current
        .and_then(|label| lookup.get(label).copied())
        .unwrap_or(0);

    Menu {
        entries,
        lookup,
        selected,
        orientation,
    }
}

impl Menu {
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Labels in display order
    pub fn options(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Icon identifiers in display order
    pub fn icons(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.icon.as_str()).collect()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.entries.is_empty()).then_some(self.selected)
    }

    /// Label of the selected option, `None` only when there are no pages
    pub fn selected_label(&self) -> Option<&str> {
        self.entries.get(self.selected).map(|e| e.label.as_str())
    }

    /// Descriptor index for a label
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.lookup.get(label).copied()
    }

    /// Select by label; unknown labels leave the selection unchanged
    pub fn select(&mut self, label: &str) -> bool {
        match self.index_of(label) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }
}

/// Terminal glyph for an icon identifier
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "house" | "home" => "⌂",
        "envelope" | "mail" => "✉",
        "gear" | "settings" => "⚙",
        "sliders" => "☰",
        "cast" => "◉",
        "info" | "info-circle" => "ℹ",
        "star" => "★",
        "person" => "☺",
        "calendar" => "▦",
        "graph-up" | "bar-chart" => "▁▃▅",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_glyphs() {
        assert_eq!(icon_glyph("house"), "⌂");
        assert_eq!(icon_glyph("gear"), "⚙");
        assert_eq!(icon_glyph("no-such-icon"), "•");
    }

    #[test]
    fn test_empty_menu_has_no_selection() {
        let menu = build_menu(&mut [], Orientation::Vertical, Some("Home"));
        assert!(menu.is_empty());
        assert_eq!(menu.selected_label(), None);
        assert_eq!(menu.selected_index(), None);
    }
}

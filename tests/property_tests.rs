//! Property-Based Tests for pagedash
//!
//! Uses proptest for testing invariants:
//! - Enum string round-trips (to_string -> parse)
//! - Theme merge completeness for any subset of present keys
//! - Stable menu ordering for arbitrary page orders

use pagedash::menu::build_menu;
use pagedash::page::{Page, PageContext};
use pagedash::registry::PageDescriptor;
use pagedash::theme::{PartialTheme, ThemeConfig};
use pagedash::types::{Font, Orientation, ThemeBase, ThemeStatus};
use proptest::prelude::*;
use ratatui::{Frame, layout::Rect};

// =============================================================================
// Enum Property Tests
// =============================================================================

fn font_strategy() -> impl Strategy<Value = Font> {
    prop_oneof![Just(Font::SansSerif), Just(Font::Serif), Just(Font::Monospace)]
}

fn base_strategy() -> impl Strategy<Value = ThemeBase> {
    prop_oneof![Just(ThemeBase::Light), Just(ThemeBase::Dark)]
}

proptest! {
    /// Font: to_string -> parse round-trip is identity
    #[test]
    fn font_roundtrip(font in font_strategy()) {
        let parsed: Font = font.to_string().parse().expect("Should parse");
        prop_assert_eq!(font, parsed);
    }

    /// ThemeBase: Display output is non-empty lowercase
    #[test]
    fn theme_base_display_is_valid(base in base_strategy()) {
        let s = base.to_string();
        prop_assert!(!s.is_empty());
        prop_assert_eq!(s.clone(), s.to_lowercase());
    }
}

// =============================================================================
// Theme Merge Property Tests
// =============================================================================

fn color_strategy() -> impl Strategy<Value = String> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| format!("#{:02X}{:02X}{:02X}", r, g, b))
}

prop_compose! {
    fn partial_theme_strategy()(
        base in proptest::option::of(base_strategy()),
        primary_color in proptest::option::of(color_strategy()),
        background_color in proptest::option::of(color_strategy()),
        secondary_background_color in proptest::option::of(color_strategy()),
        text_color in proptest::option::of(color_strategy()),
        font in proptest::option::of(font_strategy()),
    ) -> PartialTheme {
        PartialTheme {
            base,
            primary_color,
            background_color,
            secondary_background_color,
            text_color,
            font,
        }
    }
}

proptest! {
    /// Present keys survive the merge, absent keys come from the base preset
    #[test]
    fn merge_is_complete(partial in partial_theme_strategy()) {
        let merged = partial.clone().merge_with_defaults();
        let preset = ThemeConfig::preset(partial.base.unwrap_or_default());

        prop_assert_eq!(merged.base, partial.base.unwrap_or_default());
        prop_assert_eq!(
            &merged.primary_color,
            partial.primary_color.as_ref().unwrap_or(&preset.primary_color)
        );
        prop_assert_eq!(
            &merged.background_color,
            partial.background_color.as_ref().unwrap_or(&preset.background_color)
        );
        prop_assert_eq!(
            &merged.secondary_background_color,
            partial
                .secondary_background_color
                .as_ref()
                .unwrap_or(&preset.secondary_background_color)
        );
        prop_assert_eq!(
            &merged.text_color,
            partial.text_color.as_ref().unwrap_or(&preset.text_color)
        );
        prop_assert_eq!(merged.font, partial.font.unwrap_or(preset.font));
    }

    /// A fully specified theme is its own merge
    #[test]
    fn merge_of_full_theme_is_identity(partial in partial_theme_strategy()) {
        let theme = partial.merge_with_defaults();
        prop_assert_eq!(PartialTheme::from(theme.clone()).merge_with_defaults(), theme);
    }

    /// Status is a preset name only when the theme equals that preset
    #[test]
    fn status_matches_structural_equality(partial in partial_theme_strategy()) {
        let theme = partial.merge_with_defaults();
        let expected = if theme == ThemeConfig::dark() {
            ThemeStatus::Dark
        } else if theme == ThemeConfig::light() {
            ThemeStatus::Light
        } else {
            ThemeStatus::Custom
        };
        prop_assert_eq!(theme.status(), expected);
    }
}

// =============================================================================
// Menu Ordering Property Tests
// =============================================================================

struct Numbered {
    label: String,
    order: i32,
}

impl Page for Numbered {
    fn label(&self) -> &str {
        &self.label
    }
    fn icon(&self) -> &str {
        "dot"
    }
    fn order(&self) -> i32 {
        self.order
    }
    fn render(&mut self, _f: &mut Frame, _area: Rect, _context: &PageContext) {}
}

fn descriptors(orders: &[i32]) -> Vec<PageDescriptor> {
    orders
        .iter()
        .enumerate()
        .map(|(index, order)| {
            let label = format!("page {}", index);
            PageDescriptor {
                identifier: format!("p{}", index),
                label: label.clone(),
                icon: "dot".to_string(),
                order: *order,
                page: Box::new(Numbered {
                    label,
                    order: *order,
                }),
            }
        })
        .collect()
}

proptest! {
    /// Menu is sorted by order and equal orders keep registration order
    #[test]
    fn menu_sort_is_stable(orders in proptest::collection::vec(-3i32..4, 0..12)) {
        let mut pages = descriptors(&orders);
        prop_assert_eq!(pages.len(), orders.len());
        let menu = build_menu(&mut pages, Orientation::Vertical, None);

        let mut expected: Vec<(i32, usize)> =
            orders.iter().copied().zip(0..).collect();
        expected.sort_by_key(|(order, _)| *order);
        let expected_labels: Vec<String> = expected
            .iter()
            .map(|(_, index)| format!("page {}", index))
            .collect();

        prop_assert_eq!(menu.options(), expected_labels.iter().map(String::as_str).collect::<Vec<_>>());
        if orders.is_empty() {
            prop_assert_eq!(menu.selected_label(), None);
        } else {
            prop_assert_eq!(menu.selected_index(), Some(0));
        }
    }
}

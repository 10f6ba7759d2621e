//! Theme data and terminal styling
//!
//! This module holds the theme as it is persisted (`ThemeConfig`), the two
//! built-in presets, the status derivation against those presets, and the
//! `Palette` that turns a theme into ratatui styles. Every widget takes its
//! colors from a `Palette` so that applying a new theme restyles the whole UI.
//!
//! # Usage
//! ```rust
//! use pagedash::theme::{Palette, ThemeConfig};
//!
//! let theme = ThemeConfig::dark();
//! let palette = Palette::from_theme(&theme);
//! let title_style = palette.title();
//! # let _ = title_style;
//! ```

use crate::types::{Font, ThemeBase, ThemeStatus};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// =============================================================================
// PERSISTED THEME
// =============================================================================

/// Fully populated theme, exactly as written to the `[theme]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub base: ThemeBase,
    pub primary_color: String,
    pub background_color: String,
    pub secondary_background_color: String,
    pub text_color: String,
    pub font: Font,
}

impl ThemeConfig {
    /// Built-in light preset
    pub fn light() -> Self {
        Self {
            base: ThemeBase::Light,
            primary_color: "#F63366".to_string(),
            background_color: "#FFFFFF".to_string(),
            secondary_background_color: "#F0F2F6".to_string(),
            text_color: "#262730".to_string(),
            font: Font::SansSerif,
        }
    }

    /// Built-in dark preset
    pub fn dark() -> Self {
        Self {
            base: ThemeBase::Dark,
            primary_color: "#F63366".to_string(),
            background_color: "#262730".to_string(),
            secondary_background_color: "#1A1A1A".to_string(),
            text_color: "#FFFFFF".to_string(),
            font: Font::SansSerif,
        }
    }

    /// Built-in preset for a base
    pub fn preset(base: ThemeBase) -> Self {
        match base {
            ThemeBase::Light => Self::light(),
            ThemeBase::Dark => Self::dark(),
        }
    }

    /// Classify this theme against the built-in presets.
    ///
    /// Full structural equality: a single differing field makes it custom.
    pub fn status(&self) -> ThemeStatus {
        if *self == Self::dark() {
            ThemeStatus::Dark
        } else if *self == Self::light() {
            ThemeStatus::Light
        } else {
            ThemeStatus::Custom
        }
    }
}

/// Theme section as found on disk, any key may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialTheme {
    pub base: Option<ThemeBase>,
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
    pub secondary_background_color: Option<String>,
    pub text_color: Option<String>,
    pub font: Option<Font>,
}

impl PartialTheme {
    /// Fill every absent key from the preset matching `base` (light if unset).
    ///
    /// Keys that are present are kept untouched.
    pub fn merge_with_defaults(self) -> ThemeConfig {
        let base = self.base.unwrap_or_default();
        let preset = ThemeConfig::preset(base);
        ThemeConfig {
            base,
            primary_color: self.primary_color.unwrap_or(preset.primary_color),
            background_color: self.background_color.unwrap_or(preset.background_color),
            secondary_background_color: self
                .secondary_background_color
                .unwrap_or(preset.secondary_background_color),
            text_color: self.text_color.unwrap_or(preset.text_color),
            font: self.font.unwrap_or(preset.font),
        }
    }
}

impl From<ThemeConfig> for PartialTheme {
    fn from(theme: ThemeConfig) -> Self {
        Self {
            base: Some(theme.base),
            primary_color: Some(theme.primary_color),
            background_color: Some(theme.background_color),
            secondary_background_color: Some(theme.secondary_background_color),
            text_color: Some(theme.text_color),
            font: Some(theme.font),
        }
    }
}

/// Parse a `#RRGGBB` color string
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Whether a string is an acceptable color value for the settings form
pub fn is_hex_color(value: &str) -> bool {
    parse_hex_color(value).is_some()
}

// =============================================================================
// FIXED SEMANTIC COLORS
// =============================================================================

/// Colors that do not follow the user theme (status feedback)
pub struct Colors;

impl Colors {
    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;
}

// =============================================================================
// PALETTE
// =============================================================================

/// Ratatui styles derived from a `ThemeConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub background: Color,
    pub secondary_background: Color,
    pub text: Color,
    heading: Modifier,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(&ThemeConfig::dark())
    }
}

impl Palette {
    /// Build a palette, falling back to the base preset for colors that are
    /// not `#RRGGBB` (hand-edited documents may contain anything).
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let preset = ThemeConfig::preset(theme.base);
        let pick = |value: &str, fallback: &str| {
            parse_hex_color(value)
                .or_else(|| parse_hex_color(fallback))
                .unwrap_or(Color::Reset)
        };

        Self {
            primary: pick(&theme.primary_color, &preset.primary_color),
            background: pick(&theme.background_color, &preset.background_color),
            secondary_background: pick(
                &theme.secondary_background_color,
                &preset.secondary_background_color,
            ),
            text: pick(&theme.text_color, &preset.text_color),
            heading: match theme.font {
                Font::SansSerif => Modifier::BOLD,
                Font::Serif => Modifier::ITALIC,
                Font::Monospace => Modifier::empty(),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Text Styles
    // -------------------------------------------------------------------------

    /// Default text on the page background
    pub fn text(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Muted/secondary text
    pub fn text_muted(&self) -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Page title, emphasis follows the theme font
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(self.heading)
    }

    /// Section header inside a page
    pub fn header(&self) -> Style {
        Style::default().fg(self.text).add_modifier(self.heading)
    }

    // -------------------------------------------------------------------------
    // Panels and Borders
    // -------------------------------------------------------------------------

    /// Main content panel
    pub fn panel_bg(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Sidebar / tab row panel
    pub fn panel_bg_alt(&self) -> Style {
        Style::default().bg(self.secondary_background).fg(self.text)
    }

    /// Border of the focused region
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Border of an unfocused region
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    // -------------------------------------------------------------------------
    // Selection and Widgets
    // -------------------------------------------------------------------------

    /// Selected menu entry / focused field
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected menu entry
    pub fn unselected(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Form field that cannot be edited right now
    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::DIM)
    }

    /// Focused button
    pub fn button_active(&self) -> Style {
        self.selected()
    }

    /// Unfocused button
    pub fn button_inactive(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Keybinding hints in the nav bar
    pub fn nav_hint(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    // -------------------------------------------------------------------------
    // Status/Feedback Styles
    // -------------------------------------------------------------------------

    pub fn success(&self) -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Colors::ERROR)
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Width of the vertical menu panel
    pub const SIDEBAR_WIDTH: u16 = 26;

    /// Height of the horizontal menu row (tabs plus borders)
    pub const TAB_BAR_HEIGHT: u16 = 3;

    /// Maximum page width when wide mode is off
    pub const CENTERED_MAX_WIDTH: u16 = 90;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Width of the debug side panel
    pub const DEBUG_PANEL_WIDTH: u16 = 44;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_of_presets() {
        assert_eq!(ThemeConfig::dark().status(), ThemeStatus::Dark);
        assert_eq!(ThemeConfig::light().status(), ThemeStatus::Light);
    }

    #[test]
    fn test_any_deviation_is_custom() {
        let mut theme = ThemeConfig::light();
        theme.primary_color = "#000000".to_string();
        assert_eq!(theme.status(), ThemeStatus::Custom);

        let mut theme = ThemeConfig::dark();
        theme.font = Font::Monospace;
        assert_eq!(theme.status(), ThemeStatus::Custom);

        // Dark colors on a light base are neither preset
        let mut theme = ThemeConfig::dark();
        theme.base = ThemeBase::Light;
        assert_eq!(theme.status(), ThemeStatus::Custom);
    }

    #[test]
    fn test_merge_uses_base_preset() {
        let partial = PartialTheme {
            base: Some(ThemeBase::Dark),
            primary_color: Some("#00FF00".to_string()),
            ..Default::default()
        };
        let theme = partial.merge_with_defaults();
        assert_eq!(theme.primary_color, "#00FF00");
        assert_eq!(theme.background_color, ThemeConfig::dark().background_color);
        assert_eq!(theme.font, Font::SansSerif);
    }

    #[test]
    fn test_merge_empty_is_light() {
        assert_eq!(
            PartialTheme::default().merge_with_defaults(),
            ThemeConfig::light()
        );
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#F63366"), Some(Color::Rgb(0xF6, 0x33, 0x66)));
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("F63366"), None);
        assert_eq!(parse_hex_color("#F633"), None);
        assert_eq!(parse_hex_color("#GG3366"), None);
        assert!(!is_hex_color("red"));
    }

    #[test]
    fn test_palette_falls_back_on_bad_colors() {
        let mut theme = ThemeConfig::dark();
        theme.text_color = "white".to_string();
        let palette = Palette::from_theme(&theme);
        assert_eq!(palette.text, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_palette_heading_follows_font() {
        let mut theme = ThemeConfig::light();
        theme.font = Font::Serif;
        let palette = Palette::from_theme(&theme);
        assert!(palette.title().add_modifier.contains(Modifier::ITALIC));
    }
}

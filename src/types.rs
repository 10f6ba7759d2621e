//! Type-safe configuration values for pagedash
//!
//! The theme and layout documents are plain TOML strings on disk. These enums
//! give them compile-time checked shapes; an unknown value in a document is a
//! parse failure rather than a silently accepted typo.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Base palette a theme derives its defaults from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeBase {
    #[default]
    Light,
    Dark,
}

/// Font family for headings and body text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Font {
    #[default]
    #[serde(rename = "sans serif")]
    #[strum(serialize = "sans serif")]
    SansSerif,
    #[serde(rename = "serif")]
    #[strum(serialize = "serif")]
    Serif,
    #[serde(rename = "monospace")]
    #[strum(serialize = "monospace")]
    Monospace,
}

/// Where the navigation menu is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Side panel on the left
    #[default]
    Vertical,
    /// Tab row above the page
    Horizontal,
}

/// Derived classification of a theme against the built-in presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeStatus {
    Light,
    Dark,
    Custom,
}

impl ThemeStatus {
    /// Preset base this status selects, `None` for custom themes
    pub fn preset_base(&self) -> Option<ThemeBase> {
        match self {
            Self::Light => Some(ThemeBase::Light),
            Self::Dark => Some(ThemeBase::Dark),
            Self::Custom => None,
        }
    }
}

/// Display strings of every variant, in declaration order
///
/// Used to fill select widgets so the on-screen options always match what the
/// documents accept.
pub fn variant_names<E>() -> Vec<String>
where
    E: IntoEnumIterator + std::fmt::Display,
{
    E::iter().map(|v| v.to_string()).collect()
}

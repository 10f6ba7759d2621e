//! Theme and layout documents: load, merge with defaults, persist.
//!
//! Two TOML documents live on disk:
//!
//! ```toml
//! # .pagedash/config.toml (theme document)
//! [theme]
//! base = "dark"
//! primaryColor = "#F63366"
//! backgroundColor = "#262730"
//! secondaryBackgroundColor = "#1A1A1A"
//! textColor = "#FFFFFF"
//! font = "sans serif"
//! ```
//!
//! ```toml
//! # app_config.toml (layout document)
//! [example-section]
//! example-key = "example-value"
//!
//! [option-menu]
//! orientation = "vertical"
//! wide_mode = false
//! ```
//!
//! A missing document is recreated from built-in defaults. A document that
//! exists but does not parse is reported as `DashError::ConfigMalformed` and
//! left alone. There is no locking: two writers race and the last one wins.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{DashError, Result};
use crate::theme::{PartialTheme, ThemeConfig};
use crate::types::{Orientation, ThemeStatus};

/// Theme document location relative to the dashboard root
pub const THEME_DOCUMENT: &str = ".pagedash/config.toml";

/// Layout document location relative to the dashboard root
pub const APP_DOCUMENT: &str = "app_config.toml";

/// Reserved section of the layout document holding `LayoutConfig`
pub const OPTION_MENU_SECTION: &str = "option-menu";

/// Menu placement and page width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    pub orientation: Orientation,
    pub wide_mode: bool,
}

/// On-disk option-menu section; `wide_mode` wins when both spellings are present
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayoutSectionIn {
    orientation: Orientation,
    wide_mode: Option<bool>,
    #[serde(rename = "wideMode")]
    wide_mode_camel: Option<bool>,
}

impl From<LayoutSectionIn> for LayoutConfig {
    fn from(section: LayoutSectionIn) -> Self {
        Self {
            orientation: section.orientation,
            wide_mode: section
                .wide_mode
                .or(section.wide_mode_camel)
                .unwrap_or_default(),
        }
    }
}

/// Immutable result of a load or save
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    pub theme: ThemeConfig,
    pub layout: LayoutConfig,
    pub status: ThemeStatus,
}

impl ConfigSnapshot {
    pub fn new(theme: ThemeConfig, layout: LayoutConfig) -> Self {
        let status = theme.status();
        Self {
            theme,
            layout,
            status,
        }
    }
}

impl Default for ConfigSnapshot {
    /// The state a fresh install starts in
    fn default() -> Self {
        Self::new(ThemeConfig::dark(), LayoutConfig::default())
    }
}

/// Which documents `ensure_defaults` had to create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnsureReport {
    pub theme_created: bool,
    pub app_created: bool,
}

/// One user section of the layout document, values rendered as text
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

/// A single edited value coming back from the App Settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEdit {
    pub section: String,
    pub key: String,
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
struct ThemeDocumentIn {
    #[serde(default)]
    theme: PartialTheme,
}

#[derive(Serialize)]
struct ThemeDocumentOut<'a> {
    theme: &'a ThemeConfig,
}

/// Reads and writes the two persisted documents
#[derive(Debug, Clone)]
pub struct ConfigStore {
    theme_path: PathBuf,
    app_path: PathBuf,
}

impl ConfigStore {
    /// Store with explicit document paths
    pub fn new(theme_path: impl Into<PathBuf>, app_path: impl Into<PathBuf>) -> Self {
        Self {
            theme_path: theme_path.into(),
            app_path: app_path.into(),
        }
    }

    /// Store with both documents at their default locations under `root`
    pub fn in_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self::new(root.join(THEME_DOCUMENT), root.join(APP_DOCUMENT))
    }

    pub fn theme_path(&self) -> &Path {
        &self.theme_path
    }

    pub fn app_path(&self) -> &Path {
        &self.app_path
    }

    /// Write the built-in default for every document that does not exist.
    ///
    /// Existing documents are never touched, so repeated calls leave the
    /// files byte-identical.
    pub fn ensure_defaults(&self) -> Result<EnsureReport> {
        let mut report = EnsureReport::default();

        if !self.theme_path.exists() {
            write_document(&self.theme_path, &default_theme_document()?)?;
            info!("Created default theme document at {:?}", self.theme_path);
            report.theme_created = true;
        }

        if !self.app_path.exists() {
            write_document(&self.app_path, &toml::to_string(&default_app_document()?)?)?;
            info!("Created default layout document at {:?}", self.app_path);
            report.app_created = true;
        }

        Ok(report)
    }

    /// Overwrite both documents with the built-in defaults
    pub fn reset(&self) -> Result<ConfigSnapshot> {
        write_document(&self.theme_path, &default_theme_document()?)?;
        write_document(&self.app_path, &toml::to_string(&default_app_document()?)?)?;
        info!("Reset theme and layout documents to defaults");
        Ok(ConfigSnapshot::default())
    }

    /// Ensure both documents exist, read them and merge with defaults
    pub fn load(&self) -> Result<ConfigSnapshot> {
        self.ensure_defaults()?;

        let theme = self.load_theme()?;
        let layout = layout_from_table(&self.app_path, &read_table(&self.app_path)?)?;
        let snapshot = ConfigSnapshot::new(theme, layout);

        debug!(
            "Loaded config: status={}, orientation={}, wide_mode={}",
            snapshot.status, snapshot.layout.orientation, snapshot.layout.wide_mode
        );
        Ok(snapshot)
    }

    /// Persist a theme and layout and return the resulting snapshot.
    ///
    /// The theme document is replaced by exactly `theme`. In the layout
    /// document only the option-menu section is replaced; user sections are
    /// kept. The theme document is written first, a failure on the second
    /// write leaves the two documents out of step until the next save.
    pub fn save(&self, theme: &ThemeConfig, layout: LayoutConfig) -> Result<ConfigSnapshot> {
        let mut app = if self.app_path.exists() {
            read_table(&self.app_path)?
        } else {
            default_app_document()?
        };
        app.insert(
            OPTION_MENU_SECTION.to_string(),
            toml::Value::try_from(layout)?,
        );

        let theme_doc = toml::to_string(&ThemeDocumentOut { theme })?;
        write_document(&self.theme_path, &theme_doc)?;
        write_document(&self.app_path, &toml::to_string(&app)?)?;

        let snapshot = ConfigSnapshot::new(theme.clone(), layout);
        info!(
            "Saved config: status={}, orientation={}, wide_mode={}",
            snapshot.status, layout.orientation, layout.wide_mode
        );
        Ok(snapshot)
    }

    /// User sections of the layout document (reserved section excluded).
    ///
    /// Only scalar and array values are listed; nested tables stay on disk
    /// untouched.
    pub fn load_sections(&self) -> Result<Vec<SectionView>> {
        self.ensure_defaults()?;
        let app = read_table(&self.app_path)?;

        Ok(app
            .iter()
            .filter(|(name, _)| name.as_str() != OPTION_MENU_SECTION)
            .filter_map(|(name, value)| value.as_table().map(|table| (name, table)))
            .map(|(name, table)| SectionView {
                name: name.clone(),
                entries: table
                    .iter()
                    .filter(|(_, value)| !value.is_table())
                    .map(|(key, value)| (key.clone(), display_value(value)))
                    .collect(),
            })
            .collect())
    }

    /// Apply text edits to user sections and rewrite the layout document.
    ///
    /// Edits that target the reserved section or an unknown key are ignored.
    /// Returns how many values actually changed.
    pub fn save_sections(&self, edits: &[SectionEdit]) -> Result<usize> {
        self.ensure_defaults()?;
        let mut app = read_table(&self.app_path)?;
        let mut changed = 0;

        for edit in edits {
            if edit.section == OPTION_MENU_SECTION {
                debug!("Ignoring edit of reserved section key {}", edit.key);
                continue;
            }
            let Some(value) = app
                .get_mut(&edit.section)
                .and_then(|section| section.as_table_mut())
                .and_then(|table| table.get_mut(&edit.key))
            else {
                debug!("Ignoring edit of unknown key {}.{}", edit.section, edit.key);
                continue;
            };
            if display_value(value) != edit.text {
                *value = coerce_like(value, &edit.text);
                changed += 1;
            }
        }

        write_document(&self.app_path, &toml::to_string(&app)?)?;
        info!("Saved {} application setting(s)", changed);
        Ok(changed)
    }

    fn load_theme(&self) -> Result<ThemeConfig> {
        let content = fs::read_to_string(&self.theme_path)
            .map_err(|e| DashError::io(&self.theme_path, e))?;
        let doc: ThemeDocumentIn =
            toml::from_str(&content).map_err(|e| DashError::malformed(&self.theme_path, e))?;
        Ok(doc.theme.merge_with_defaults())
    }
}

/// Render a TOML value the way the settings editor shows it
pub fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert edited text back to a value of the same kind as `original`.
///
/// Text that no longer parses as the original kind is stored as a string.
pub fn coerce_like(original: &toml::Value, text: &str) -> toml::Value {
    let trimmed = text.trim();
    let parsed = match original {
        toml::Value::String(_) => None,
        toml::Value::Boolean(_) => trimmed.parse::<bool>().ok().map(toml::Value::Boolean),
        toml::Value::Integer(_) => trimmed.parse::<i64>().ok().map(toml::Value::Integer),
        toml::Value::Float(_) => trimmed.parse::<f64>().ok().map(toml::Value::Float),
        toml::Value::Datetime(_) | toml::Value::Array(_) | toml::Value::Table(_) => {
            parse_bare_value(trimmed).filter(|v| v.same_type(original))
        }
    };
    parsed.unwrap_or_else(|| toml::Value::String(text.to_string()))
}

fn parse_bare_value(text: &str) -> Option<toml::Value> {
    let mut table: toml::Table = toml::from_str(&format!("v = {text}")).ok()?;
    table.remove("v")
}

fn layout_from_table(path: &Path, app: &toml::Table) -> Result<LayoutConfig> {
    match app.get(OPTION_MENU_SECTION) {
        Some(section) => section
            .clone()
            .try_into::<LayoutSectionIn>()
            .map(LayoutConfig::from)
            .map_err(|e| DashError::malformed(path, e)),
        None => Ok(LayoutConfig::default()),
    }
}

fn read_table(path: &Path) -> Result<toml::Table> {
    let content = fs::read_to_string(path).map_err(|e| DashError::io(path, e))?;
    toml::from_str(&content).map_err(|e| DashError::malformed(path, e))
}

fn write_document(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| DashError::io(dir, e))?;
        }
    }
    fs::write(path, content).map_err(|e| DashError::io(path, e))
}

fn default_theme_document() -> Result<String> {
    Ok(toml::to_string(&ThemeDocumentOut {
        theme: &ThemeConfig::dark(),
    })?)
}

fn default_app_document() -> Result<toml::Table> {
    let mut example = toml::Table::new();
    example.insert(
        "example-key".to_string(),
        toml::Value::String("example-value".to_string()),
    );

    let mut app = toml::Table::new();
    app.insert("example-section".to_string(), toml::Value::Table(example));
    app.insert(
        OPTION_MENU_SECTION.to_string(),
        toml::Value::try_from(LayoutConfig::default())?,
    );
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ThemeBase;
    use tempfile::TempDir;

    fn store() -> (TempDir, ConfigStore) {
        let dir = TempDir::new().expect("tempdir");
        let store = ConfigStore::in_dir(dir.path());
        (dir, store)
    }

    #[test]
    fn test_ensure_defaults_creates_parent_directory() {
        let (_dir, store) = store();
        let report = store.ensure_defaults().expect("ensure");
        assert!(report.theme_created);
        assert!(report.app_created);
        assert!(store.theme_path().exists());
    }

    #[test]
    fn test_ensure_defaults_only_fills_missing_document() {
        let (_dir, store) = store();
        write_document(store.app_path(), "[mine]\nkey = 1\n").unwrap();

        let report = store.ensure_defaults().expect("ensure");
        assert!(report.theme_created);
        assert!(!report.app_created);
        assert_eq!(
            fs::read_to_string(store.app_path()).unwrap(),
            "[mine]\nkey = 1\n"
        );
    }

    #[test]
    fn test_layout_accepts_camel_case_wide_mode() {
        let (_dir, store) = store();
        write_document(
            store.app_path(),
            "[option-menu]\norientation = \"horizontal\"\nwideMode = true\n",
        )
        .unwrap();
        let snapshot = store.load().expect("load");
        assert_eq!(snapshot.layout.orientation, Orientation::Horizontal);
        assert!(snapshot.layout.wide_mode);
    }

    #[test]
    fn test_missing_option_menu_defaults() {
        let (_dir, store) = store();
        write_document(store.app_path(), "[other]\nx = \"y\"\n").unwrap();
        let snapshot = store.load().expect("load");
        assert_eq!(snapshot.layout, LayoutConfig::default());
    }

    #[test]
    fn test_bad_orientation_is_malformed() {
        let (_dir, store) = store();
        write_document(store.app_path(), "[option-menu]\norientation = \"diagonal\"\n").unwrap();
        let err = store.load().unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_theme_without_base_merges_light() {
        let (_dir, store) = store();
        write_document(store.theme_path(), "[theme]\ntextColor = \"#123456\"\n").unwrap();
        let snapshot = store.load().expect("load");
        assert_eq!(snapshot.theme.base, ThemeBase::Light);
        assert_eq!(snapshot.theme.text_color, "#123456");
        assert_eq!(snapshot.theme.background_color, "#FFFFFF");
        assert_eq!(snapshot.status, ThemeStatus::Custom);
    }

    #[test]
    fn test_save_keeps_user_sections() {
        let (_dir, store) = store();
        store.ensure_defaults().unwrap();
        store
            .save(
                &ThemeConfig::light(),
                LayoutConfig {
                    orientation: Orientation::Horizontal,
                    wide_mode: true,
                },
            )
            .expect("save");

        let sections = store.load_sections().expect("sections");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "example-section");
    }

    #[test]
    fn test_coerce_like_preserves_kind() {
        assert_eq!(
            coerce_like(&toml::Value::Integer(3), "42"),
            toml::Value::Integer(42)
        );
        assert_eq!(
            coerce_like(&toml::Value::Boolean(false), "true"),
            toml::Value::Boolean(true)
        );
        assert_eq!(
            coerce_like(&toml::Value::Integer(3), "many"),
            toml::Value::String("many".to_string())
        );
        assert_eq!(
            coerce_like(&toml::Value::String("a".into()), "17"),
            toml::Value::String("17".to_string())
        );
    }

    #[test]
    fn test_coerce_like_array() {
        let original = toml::Value::Array(vec![toml::Value::Integer(1)]);
        let value = coerce_like(&original, "[1, 2, 3]");
        assert_eq!(value.as_array().map(|a| a.len()), Some(3));
    }
}

//! Theme and layout settings
//!
//! Choosing `light` or `dark` applies the matching preset as-is. Choosing
//! `custom` unlocks the color and font fields and builds the theme from them,
//! keeping the current base.

use crate::components::form::{Field, Form, FormEvent};
use crate::config_file::LayoutConfig;
use crate::error::{DashError, Result};
use crate::page::{Page, PageAction, PageContext};
use crate::theme::{ThemeConfig, is_hex_color};
use crate::types::{Font, Orientation, ThemeBase, ThemeStatus, variant_names};
use crate::ui::render_page_title;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

const THEME: usize = 0;
const ORIENTATION: usize = 1;
const WIDE_MODE: usize = 2;
const PRIMARY: usize = 3;
const BACKGROUND: usize = 4;
const SECONDARY_BACKGROUND: usize = 5;
const TEXT: usize = 6;
const FONT: usize = 7;
const APPLY: usize = 8;

const CUSTOM_ONLY: [usize; 5] = [PRIMARY, BACKGROUND, SECONDARY_BACKGROUND, TEXT, FONT];

#[derive(Default)]
pub struct SettingsPage {
    form: Form,
    base: ThemeBase,
    error: Option<String>,
}

impl SettingsPage {
    /// Reset the form to the values of `theme` and `layout`
    pub fn load(&mut self, theme: &ThemeConfig, layout: LayoutConfig) {
        self.base = theme.base;
        self.error = None;
        self.form = Form::new(vec![
            Field::select(
                "Select Theme",
                variant_names::<ThemeStatus>(),
                &theme.status().to_string(),
            ),
            Field::select(
                "Select Menu Orientation",
                variant_names::<Orientation>(),
                &layout.orientation.to_string(),
            ),
            Field::toggle("Wide Mode", layout.wide_mode),
            Field::text("Primary Color", theme.primary_color.clone()),
            Field::text("Background Color", theme.background_color.clone()),
            Field::text(
                "Secondary Background Color",
                theme.secondary_background_color.clone(),
            ),
            Field::text("Text Color", theme.text_color.clone()),
            Field::select("Select Font", variant_names::<Font>(), &theme.font.to_string()),
            Field::button("Apply Settings"),
        ]);
        self.sync_enabled();
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Theme described by the current form values
    pub fn build_theme(&self) -> Result<ThemeConfig> {
        let status: ThemeStatus = self
            .form
            .selected(THEME)
            .parse()
            .map_err(|_| DashError::validation("unknown theme choice"))?;

        if let Some(base) = status.preset_base() {
            return Ok(ThemeConfig::preset(base));
        }

        let color = |index: usize, name: &str| -> Result<String> {
            let value = self.form.text(index).trim();
            if is_hex_color(value) {
                Ok(value.to_string())
            } else {
                Err(DashError::validation(format!(
                    "{} must look like #RRGGBB, got {:?}",
                    name, value
                )))
            }
        };

        Ok(ThemeConfig {
            base: self.base,
            primary_color: color(PRIMARY, "Primary Color")?,
            background_color: color(BACKGROUND, "Background Color")?,
            secondary_background_color: color(
                SECONDARY_BACKGROUND,
                "Secondary Background Color",
            )?,
            text_color: color(TEXT, "Text Color")?,
            font: self
                .form
                .selected(FONT)
                .parse()
                .map_err(|_| DashError::validation("unknown font"))?,
        })
    }

    /// Layout described by the current form values
    pub fn build_layout(&self) -> LayoutConfig {
        LayoutConfig {
            orientation: self
                .form
                .selected(ORIENTATION)
                .parse()
                .unwrap_or_default(),
            wide_mode: self.form.toggled(WIDE_MODE),
        }
    }

    fn is_custom(&self) -> bool {
        self.form.selected(THEME) == ThemeStatus::Custom.to_string()
    }

    fn sync_enabled(&mut self) {
        let custom = self.is_custom();
        for index in CUSTOM_ONLY {
            self.form.set_enabled(index, custom);
        }
    }

    fn show_preset(&mut self, theme: &ThemeConfig) {
        self.form.set_text(PRIMARY, theme.primary_color.clone());
        self.form.set_text(BACKGROUND, theme.background_color.clone());
        self.form
            .set_text(SECONDARY_BACKGROUND, theme.secondary_background_color.clone());
        self.form.set_text(TEXT, theme.text_color.clone());
    }
}

impl Page for SettingsPage {
    fn label(&self) -> &str {
        "Settings"
    }

    fn icon(&self) -> &str {
        "gear"
    }

    fn order(&self) -> i32 {
        3
    }

    fn on_enter(&mut self, context: &PageContext) {
        self.load(&context.snapshot.theme, context.snapshot.layout);
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: KeyEvent, _context: &PageContext) -> PageAction {
        match self.form.handle_key(key) {
            FormEvent::Leave => PageAction::Leave,
            FormEvent::Changed(THEME) => {
                self.error = None;
                let preset = self
                    .form
                    .selected(THEME)
                    .parse::<ThemeStatus>()
                    .ok()
                    .and_then(|status| status.preset_base());
                if let Some(base) = preset {
                    self.show_preset(&ThemeConfig::preset(base));
                }
                self.sync_enabled();
                PageAction::None
            }
            FormEvent::Pressed(APPLY) => match self.build_theme() {
                Ok(theme) => {
                    self.error = None;
                    PageAction::Apply {
                        theme,
                        layout: self.build_layout(),
                    }
                }
                Err(e) => {
                    self.error = Some(e.to_string());
                    PageAction::None
                }
            },
            FormEvent::Changed(_) => {
                self.error = None;
                PageAction::None
            }
            _ => PageAction::None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, context: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(self.form.len() as u16 + 1),
                Constraint::Min(1),
            ])
            .split(area);

        render_page_title(f, chunks[0], "Settings Page", context.palette);
        self.form.render(f, chunks[1], context.palette, true);

        if let Some(ref error) = self.error {
            let message = Paragraph::new(error.as_str()).style(context.palette.error());
            f.render_widget(message, chunks[2]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(page: &mut SettingsPage, code: KeyCode) -> FormEvent {
        page.form_mut().handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_preset_theme_disables_color_fields() {
        let mut page = SettingsPage::default();
        page.load(&ThemeConfig::dark(), LayoutConfig::default());
        assert_eq!(page.form().selected(THEME), "dark");
        assert!(!page.form().fields()[PRIMARY].enabled);
        assert_eq!(page.build_theme().unwrap(), ThemeConfig::dark());
    }

    #[test]
    fn test_custom_theme_keeps_base() {
        let mut theme = ThemeConfig::dark();
        theme.primary_color = "#00FF00".to_string();
        let mut page = SettingsPage::default();
        page.load(&theme, LayoutConfig::default());

        assert_eq!(page.form().selected(THEME), "custom");
        assert!(page.form().fields()[PRIMARY].enabled);
        let built = page.build_theme().unwrap();
        assert_eq!(built, theme);
        assert_eq!(built.base, ThemeBase::Dark);
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let mut theme = ThemeConfig::light();
        theme.text_color = "#000000".to_string();
        let mut page = SettingsPage::default();
        page.load(&theme, LayoutConfig::default());
        page.form_mut().set_text(PRIMARY, "pink");

        let err = page.build_theme().unwrap_err();
        assert!(err.to_string().contains("Primary Color"));
    }

    #[test]
    fn test_layout_from_form() {
        let mut page = SettingsPage::default();
        page.load(&ThemeConfig::light(), LayoutConfig::default());
        // Orientation is the second field
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Right);
        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Enter);

        let layout = page.build_layout();
        assert_eq!(layout.orientation, Orientation::Horizontal);
        assert!(layout.wide_mode);
    }
}

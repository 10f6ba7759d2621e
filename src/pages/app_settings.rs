//! Editor for the user sections of the layout document

use crate::components::form::{Field, Form, FormEvent};
use crate::config_file::{SectionEdit, SectionView};
use crate::page::{Page, PageAction, PageContext};
use crate::ui::render_page_title;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Paragraph, Wrap},
};
use tracing::warn;

#[derive(Default)]
pub struct AppSettingsPage {
    form: Form,
    keys: Vec<(String, String)>,
    error: Option<String>,
}

impl AppSettingsPage {
    /// One text field per section entry plus the save button
    pub fn load(&mut self, sections: &[SectionView]) {
        self.error = None;
        self.keys.clear();
        let mut fields = Vec::new();
        for section in sections {
            for (key, value) in &section.entries {
                fields.push(Field::text(format!("{} - {}", section.name, key), value));
                self.keys.push((section.name.clone(), key.clone()));
            }
        }
        fields.push(Field::button("Save Settings"));
        self.form = Form::new(fields);
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Current field values as edits, one per entry
    pub fn edits(&self) -> Vec<SectionEdit> {
        self.keys
            .iter()
            .enumerate()
            .map(|(index, (section, key))| SectionEdit {
                section: section.clone(),
                key: key.clone(),
                text: self.form.text(index).to_string(),
            })
            .collect()
    }
}

impl Page for AppSettingsPage {
    fn label(&self) -> &str {
        "App Settings"
    }

    fn icon(&self) -> &str {
        "sliders"
    }

    fn order(&self) -> i32 {
        4
    }

    fn on_enter(&mut self, context: &PageContext) {
        match context.store.load_sections() {
            Ok(sections) => self.load(&sections),
            Err(e) => {
                warn!("Failed to read application settings: {}", e);
                self.load(&[]);
                self.error = Some(e.to_string());
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: KeyEvent, _context: &PageContext) -> PageAction {
        match self.form.handle_key(key) {
            FormEvent::Leave => PageAction::Leave,
            FormEvent::Pressed(index) if index == self.keys.len() => {
                PageAction::SaveSections(self.edits())
            }
            _ => PageAction::None,
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, context: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(2),
            ])
            .split(area);

        render_page_title(f, chunks[0], "App Settings", context.palette);

        if self.keys.is_empty() && self.error.is_none() {
            let empty = Paragraph::new("No application sections to edit.")
                .style(context.palette.text_muted());
            f.render_widget(empty, chunks[1]);
        } else {
            self.form.render(f, chunks[1], context.palette, true);
        }

        if let Some(ref error) = self.error {
            let message = Paragraph::new(error.as_str())
                .style(context.palette.error())
                .wrap(Wrap { trim: true });
            f.render_widget(message, chunks[2]);
        }
    }
}

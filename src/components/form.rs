//! Form widgets used by the settings pages
//!
//! A `Form` is a vertical list of fields: text inputs, selects, toggles and
//! buttons. Focus moves over enabled fields only. Pages own a form, feed it
//! key events and react to the returned `FormEvent`.

use crate::theme::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Kind and value of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, edited in place
    Text { value: String },
    /// One of a fixed set of options
    Select { options: Vec<String>, index: usize },
    /// On/off switch
    Toggle(bool),
    /// Action trigger
    Button,
}

/// A labelled form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub kind: FieldKind,
    pub enabled: bool,
}

impl Field {
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Text {
                value: value.into(),
            },
            enabled: true,
        }
    }

    /// Select field, `current` is matched against the options (first if absent)
    pub fn select(label: impl Into<String>, options: Vec<String>, current: &str) -> Self {
        let index = options.iter().position(|o| o == current).unwrap_or(0);
        Self {
            label: label.into(),
            kind: FieldKind::Select { options, index },
            enabled: true,
        }
    }

    pub fn toggle(label: impl Into<String>, value: bool) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Toggle(value),
            enabled: true,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: FieldKind::Button,
            enabled: true,
        }
    }

    fn value_text(&self) -> String {
        match &self.kind {
            FieldKind::Text { value } => value.clone(),
            FieldKind::Select { options, index } => options
                .get(*index)
                .map(|o| format!("◂ {} ▸", o))
                .unwrap_or_default(),
            FieldKind::Toggle(on) => (if *on { "[x]" } else { "[ ]" }).to_string(),
            FieldKind::Button => String::new(),
        }
    }
}

/// Outcome of a key press on a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Key consumed or ignored, nothing changed
    None,
    /// The value of field `n` changed
    Changed(usize),
    /// Button `n` was pressed
    Pressed(usize),
    /// The user asked to leave the form
    Leave,
}

/// Vertical list of fields with a single focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<Field>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        let mut form = Self { fields, focus: 0 };
        form.focus_first_enabled();
        form
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Text of a text field (empty for other kinds)
    pub fn text(&self, index: usize) -> &str {
        match self.fields.get(index).map(|f| &f.kind) {
            Some(FieldKind::Text { value }) => value,
            _ => "",
        }
    }

    /// Selected option of a select field (empty for other kinds)
    pub fn selected(&self, field: usize) -> &str {
        match self.fields.get(field).map(|f| &f.kind) {
            Some(FieldKind::Select { options, index }) => {
                options.get(*index).map(String::as_str).unwrap_or("")
            }
            _ => "",
        }
    }

    /// Value of a toggle field (false for other kinds)
    pub fn toggled(&self, index: usize) -> bool {
        matches!(
            self.fields.get(index).map(|f| &f.kind),
            Some(FieldKind::Toggle(true))
        )
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(Field {
            kind: FieldKind::Text { value },
            ..
        }) = self.fields.get_mut(index)
        {
            *value = text.into();
        }
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(field) = self.fields.get_mut(index) {
            field.enabled = enabled;
        }
        if !self.fields.get(self.focus).is_some_and(|f| f.enabled) {
            self.focus_first_enabled();
        }
    }

    /// Feed a key event to the focused field
    pub fn handle_key(&mut self, key: KeyEvent) -> FormEvent {
        match key.code {
            KeyCode::Esc => return FormEvent::Leave,
            KeyCode::Up | KeyCode::BackTab => {
                self.move_focus(false);
                return FormEvent::None;
            }
            KeyCode::Down | KeyCode::Tab => {
                self.move_focus(true);
                return FormEvent::None;
            }
            _ => {}
        }

        let focus = self.focus;
        let Some(field) = self.fields.get_mut(focus).filter(|f| f.enabled) else {
            return FormEvent::None;
        };

        match (&mut field.kind, key.code) {
            (FieldKind::Text { value }, KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                value.push(c);
                FormEvent::Changed(focus)
            }
            (FieldKind::Text { value }, KeyCode::Backspace) => {
                if value.pop().is_some() {
                    FormEvent::Changed(focus)
                } else {
                    FormEvent::None
                }
            }
            (FieldKind::Select { options, index }, KeyCode::Right | KeyCode::Enter)
                if !options.is_empty() =>
            {
                *index = (*index + 1) % options.len();
                FormEvent::Changed(focus)
            }
            (FieldKind::Select { options, index }, KeyCode::Left) if !options.is_empty() => {
                *index = (*index + options.len() - 1) % options.len();
                FormEvent::Changed(focus)
            }
            (
                FieldKind::Toggle(on),
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right,
            ) => {
                *on = !*on;
                FormEvent::Changed(focus)
            }
            (FieldKind::Button, KeyCode::Enter) => FormEvent::Pressed(focus),
            _ => FormEvent::None,
        }
    }

    /// Draw the form; the focused field is highlighted only when `focused`
    pub fn render(&self, f: &mut Frame, area: Rect, palette: &Palette, focused: bool) {
        let label_width = self
            .fields
            .iter()
            .filter(|field| field.kind != FieldKind::Button)
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let is_focus = focused && index == self.focus;
                if field.kind == FieldKind::Button {
                    let style = if !field.enabled {
                        palette.disabled()
                    } else if is_focus {
                        palette.button_active()
                    } else {
                        palette.button_inactive()
                    };
                    return Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("[ {} ]", field.label), style),
                    ]);
                }

                let label_style = if field.enabled {
                    palette.header()
                } else {
                    palette.disabled()
                };
                let mut value_style = if !field.enabled {
                    palette.disabled()
                } else if is_focus {
                    palette.selected()
                } else {
                    palette.unselected()
                };
                if matches!(field.kind, FieldKind::Text { .. }) && field.enabled {
                    value_style = value_style.add_modifier(Modifier::UNDERLINED);
                }
                let mut value = field.value_text();
                if is_focus && matches!(field.kind, FieldKind::Text { .. }) {
                    value.push('▏');
                }

                Line::from(vec![
                    Span::styled(
                        format!("{:<width$}  ", field.label, width = label_width),
                        label_style,
                    ),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        let form = Paragraph::new(lines)
            .block(Block::default().borders(Borders::NONE))
            .style(palette.panel_bg());
        f.render_widget(form, area);
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        for step in 1..=len {
            let candidate = if forward {
                (self.focus + step) % len
            } else {
                (self.focus + len - step % len) % len
            };
            if self.fields[candidate].enabled {
                self.focus = candidate;
                return;
            }
        }
    }

    fn focus_first_enabled(&mut self) {
        self.focus = self.fields.iter().position(|f| f.enabled).unwrap_or(0);
    }
}

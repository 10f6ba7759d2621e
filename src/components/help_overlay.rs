//! Help overlay component
//!
//! Displays context-sensitive help in a centred window over the dashboard.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::session::Focus;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given focus
    pub fn new(focus: Focus, keybinding_ctx: &KeybindingContext, palette: &Palette) -> Self {
        let sections = keybinding_ctx.get_help_content(focus);
        Self {
            content: Self::build_content(&sections, focus, palette),
        }
    }

    fn build_content(
        sections: &[HelpSection],
        focus: Focus,
        palette: &Palette,
    ) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(Span::styled("  Dashboard Help  ", palette.title())));
        lines.push(Line::from(""));

        let focus_name = match focus {
            Focus::Menu => "Page menu",
            Focus::Page => "Page controls",
        };
        lines.push(Line::from(vec![
            Span::styled("Current: ", palette.text_muted()),
            Span::styled(focus_name, palette.header()),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}  ", section.title),
                palette.success(),
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<12}", key), palette.header()),
                    Span::styled(description.clone(), palette.text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centred in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect, palette: &Palette) {
        let area = centered_rect(parent, 60, 70, 50, 15);
        f.render_widget(Clear, area);

        let help = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_bottom(Line::from(" Press ? or Esc to close ").alignment(Alignment::Right))
                    .border_style(palette.border_active()),
            )
            .style(palette.panel_bg_alt())
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }
}

/// Rectangle of `percent_x` by `percent_y` of `parent`, centred, with a
/// minimum size clamped to the parent
pub fn centered_rect(parent: Rect, percent_x: u16, percent_y: u16, min_w: u16, min_h: u16) -> Rect {
    let scale = |length: u16, percent: u16| (u32::from(length) * u32::from(percent) / 100) as u16;
    let width = scale(parent.width, percent_x).max(min_w).min(parent.width);
    let height = scale(parent.height, percent_y).max(min_h).min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps_to_parent() {
        let parent = Rect::new(0, 0, 40, 10);
        let area = centered_rect(parent, 60, 70, 50, 15);
        assert_eq!(area, parent);
    }

    #[test]
    fn test_centered_rect_is_centred() {
        let area = centered_rect(Rect::new(0, 0, 100, 40), 60, 50, 10, 5);
        assert_eq!(area, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_content_lists_bindings() {
        let overlay = HelpOverlay::new(Focus::Page, &KeybindingContext::new(), &Palette::default());
        let text: String = overlay
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Back to menu"));
        assert!(text.contains("Page controls"));
    }
}

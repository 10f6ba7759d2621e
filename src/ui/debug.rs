use crate::session::Session;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Side panel listing every session state field
pub fn render_debug_panel(f: &mut Frame, session: &Session, area: Rect) {
    let palette = session.palette();
    let lines: Vec<Line> = session
        .state_entries()
        .into_iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", key), palette.text_muted()),
                Span::styled(value, palette.text()),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Session State ")
                .title_style(palette.title())
                .border_style(palette.border_inactive()),
        )
        .style(palette.panel_bg_alt())
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

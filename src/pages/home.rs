use crate::page::{Page, PageContext};
use crate::ui::render_page_title;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Landing page
pub struct HomePage;

impl Page for HomePage {
    fn label(&self) -> &str {
        "Home"
    }

    fn icon(&self) -> &str {
        "house"
    }

    fn order(&self) -> i32 {
        1
    }

    fn render(&mut self, f: &mut Frame, area: Rect, context: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        render_page_title(f, chunks[0], "Home Page", context.palette);

        let palette = context.palette;
        let snapshot = context.snapshot;
        let body = vec![
            Line::from(Span::styled(
                "Welcome to the Home Page. This is the main dashboard of the application.",
                palette.text(),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Theme: ", palette.text_muted()),
                Span::styled(snapshot.status.to_string(), palette.header()),
                Span::styled("   Menu: ", palette.text_muted()),
                Span::styled(snapshot.layout.orientation.to_string(), palette.header()),
                Span::styled("   Wide mode: ", palette.text_muted()),
                Span::styled(
                    if snapshot.layout.wide_mode { "on" } else { "off" },
                    palette.header(),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(body)
            .style(palette.panel_bg())
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, chunks[1]);
    }
}

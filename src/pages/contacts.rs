use crate::page::{Page, PageContext};
use crate::ui::render_page_title;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

pub struct ContactsPage;

impl Page for ContactsPage {
    fn label(&self) -> &str {
        "Contacts"
    }

    fn icon(&self) -> &str {
        "envelope"
    }

    fn order(&self) -> i32 {
        2
    }

    fn render(&mut self, f: &mut Frame, area: Rect, context: &PageContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        render_page_title(f, chunks[0], "Contact Page", context.palette);
        let body = Paragraph::new("This is the Contacts Page.").style(context.palette.text());
        f.render_widget(body, chunks[1]);
    }
}

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub struct TopBar<'a> {
    title: &'a str,
    user_name: &'a str,
    query: &'a str,
    searching: bool,
}

impl<'a> TopBar<'a> {
    pub fn new(title: &'a str, user_name: &'a str) -> Self {
        Self {
            title,
            user_name,
            query: "",
            searching: false,
        }
    }

    pub fn search(mut self, query: &'a str, searching: bool) -> Self {
        self.query = query;
        self.searching = searching;
        self
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut left = vec![Span::styled(
            self.title,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if self.searching {
            left.push(Span::styled(
                format!("  / {}_", self.query),
                Style::default().fg(colors::ACCENT),
            ));
        } else if !self.query.trim().is_empty() {
            left.push(Span::styled(
                format!("  filter: {}", self.query.trim()),
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        Paragraph::new(Line::from(left)).render(inner, buf);

        let keys = if self.searching {
            "[enter] keep  [esc] clear"
        } else {
            "[/] search  [s] settings  [q] quit"
        };
        let hints = Line::from(vec![
            Span::styled(self.user_name, Style::default().fg(colors::ACCENT)),
            Span::raw("  "),
            Span::styled(keys, Style::default().fg(colors::NEUTRAL)),
        ]);
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::render_text;

    #[test]
    fn shows_the_query_while_searching_and_after() {
        let text = render_text(100, 2, |f| {
            f.render_widget(TopBar::new("Listens", "rob").search("port", true), f.area())
        });
        assert!(text.contains("Listens  / port_"));
        assert!(text.contains("[esc] clear"));

        let text = render_text(100, 2, |f| {
            f.render_widget(TopBar::new("Listens", "rob").search("port", false), f.area())
        });
        assert!(text.contains("filter: port"));
        assert!(text.contains("[/] search"));

        let text = render_text(100, 2, |f| f.render_widget(TopBar::new("Listens", "rob"), f.area()));
        assert!(!text.contains("filter:"));
    }
}

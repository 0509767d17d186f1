use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// Stateless toggle-style button for a single tab.
pub struct TabButton<'a> {
    title: &'a str,
    is_selected: bool,
}

impl<'a> TabButton<'a> {
    pub fn new(title: &'a str, is_selected: bool) -> Self {
        Self { title, is_selected }
    }

    pub fn width(&self) -> u16 {
        self.title.width() as u16 + 4
    }
}

impl Widget for TabButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.is_selected {
            Style::default()
                .bg(colors::SECONDARY)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(colors::SURFACE).fg(colors::NEUTRAL)
        };

        buf.set_style(area, style);
        Paragraph::new(self.title)
            .alignment(Alignment::Center)
            .style(style)
            .render(area, buf);
    }
}

pub struct TabStrip<'a> {
    titles: &'a [&'a str],
    selected: usize,
}

impl<'a> TabStrip<'a> {
    pub fn new(titles: &'a [&'a str], selected: usize) -> Self {
        Self { titles, selected }
    }
}

impl Widget for TabStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let buttons: Vec<TabButton> = self
            .titles
            .iter()
            .enumerate()
            .map(|(i, title)| TabButton::new(title, i == self.selected))
            .collect();

        let mut constraints: Vec<Constraint> = Vec::with_capacity(buttons.len() * 2);
        for button in &buttons {
            constraints.push(Constraint::Length(button.width()));
            constraints.push(Constraint::Length(1));
        }

        let row = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: area.height.min(1),
            ..area
        };
        let cells = Layout::horizontal(constraints).split(row);

        for (button, cell) in buttons.into_iter().zip(cells.iter().step_by(2)) {
            button.render(*cell, buf);
        }
    }
}

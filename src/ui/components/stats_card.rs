use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    data::{model::Loadable, view_model::DashboardViewModel},
    ui::util::format_count,
    util::colors,
};

/// Listen count, followers and following side by side.
pub struct StatsCard<'a> {
    model: &'a DashboardViewModel,
}

impl<'a> StatsCard<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self { model }
    }
}

fn value_of<T>(value: &Loadable<T>, count: impl Fn(&T) -> u64) -> Span<'static> {
    match value {
        Loadable::Loaded(v) => Span::styled(
            format_count(count(v)),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Loadable::Failed(_) => Span::styled("-", Style::default().fg(colors::ERROR)),
        Loadable::Idle | Loadable::Loading => {
            Span::styled("…", Style::default().fg(colors::NEUTRAL))
        }
    }
}

impl Widget for StatsCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        block.render(area, buf);

        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
        let stats = [
            ("Listens", value_of(&self.model.listen_count, |c| *c)),
            ("Followers", value_of(&self.model.followers, |f| f.len() as u64)),
            ("Following", value_of(&self.model.following, |f| f.len() as u64)),
        ];

        for ((label, value), cell) in stats.into_iter().zip(cells.iter()) {
            Paragraph::new(Line::from(vec![
                value,
                Span::raw(" "),
                Span::styled(label, Style::default().fg(colors::ACCENT)),
            ]))
            .alignment(Alignment::Center)
            .render(*cell, buf);
        }
    }
}

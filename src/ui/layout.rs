use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    ui::{app::App, state::Status},
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        self.app.screen.render(f, main_area, &self.app.state);

        let status = match &self.app.state.ui.status {
            Some(Status::Info(message)) => {
                Span::styled(message.as_str(), Style::default().fg(colors::ACCENT))
            }
            Some(Status::Error(message)) => {
                Span::styled(message.as_str(), Style::default().fg(colors::ERROR))
            }
            None => Span::styled(
                "[tab] switch view  [1-5] jump",
                Style::default().fg(colors::NEUTRAL),
            ),
        };
        f.render_widget(Paragraph::new(Line::from(status)), status_area);
    }
}

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    ui::{
        components::modal::render_modal_frame,
        context::AppContext,
        traits::{Action, View, ViewData},
    },
    util::{colors, log::log_path},
};

/// Read-only account and environment details.
pub struct Settings {
    user_name: String,
    masked_token: String,
    can_write: bool,
    api_url: String,
}

impl Settings {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            user_name: ctx.credentials.user_name.clone(),
            masked_token: ctx.credentials.masked_token(),
            can_write: ctx.credentials.has_token(),
            api_url: ctx.api_url.clone(),
        }
    }
}

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(colors::ACCENT)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

#[async_trait]
impl View for Settings {
    fn render(&mut self, f: &mut Frame, area: Rect, _data: ViewData<'_>) {
        let inner = render_modal_frame(f, area, 70, 10, " Settings ");

        let lines = vec![
            row("User", self.user_name.clone()),
            row("Token", self.masked_token.clone()),
            row(
                "Writes",
                if self.can_write {
                    "enabled".to_string()
                } else {
                    "disabled until a token is set".to_string()
                },
            ),
            row("API", self.api_url.clone()),
            row("Log file", log_path().display().to_string()),
            Line::default(),
            Line::from(Span::styled(
                "Credentials are read from LISTENBRAINZ_USER_NAME / LISTENBRAINZ_USER_TOKEN or the keyring",
                Style::default().fg(colors::NEUTRAL),
            )),
            Line::from(Span::styled("[esc] close", Style::default().fg(colors::NEUTRAL))),
        ];
        f.render_widget(Paragraph::new(lines), inner);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _data: ViewData<'_>,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('q') => Some(Action::CloseSettings),
            _ => None,
        }
    }
}

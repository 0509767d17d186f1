use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    data::model::Listen,
    event::events::{ActionId, Event},
    http::error::ApiError,
    ui::{
        components::{modal::render_modal_frame, text_input::TextInput},
        context::AppContext,
        traits::{Action, View, ViewData},
        util::spawn_action,
    },
    util::colors,
};

use super::pin_track::{listen_header, status_line};

const MAX_RATING: u8 = 5;

pub struct WriteReview {
    pub listen: Listen,
    user_name: String,
    user_token: String,
    text: TextInput,
    // 0 means unrated
    rating: u8,
    error: Option<String>,
    pending: Option<ActionId>,
}

impl WriteReview {
    pub fn new(listen: Listen, user_name: &str, user_token: &str) -> Self {
        Self {
            listen,
            user_name: user_name.to_string(),
            user_token: user_token.to_string(),
            text: TextInput::default(),
            rating: 0,
            error: None,
            pending: None,
        }
    }

    fn rating(&self) -> Option<u8> {
        (self.rating > 0).then_some(self.rating)
    }

    fn stars(&self) -> Line<'static> {
        let filled = "★".repeat(self.rating as usize);
        let empty = "☆".repeat((MAX_RATING - self.rating) as usize);
        Line::from(vec![
            Span::styled("Rating  ", Style::default().fg(colors::ACCENT)),
            Span::styled(filled, Style::default().fg(colors::PRIMARY)),
            Span::styled(empty, Style::default().fg(colors::NEUTRAL)),
            Span::styled("  [up/down]", Style::default().fg(colors::NEUTRAL)),
        ])
    }

    fn submit(&mut self, ctx: &AppContext) {
        if self.listen.recording_mbid().is_none() {
            self.error = Some(ApiError::MissingRecordingMbid.to_string());
            return;
        }
        if self.text.is_blank() {
            self.error = Some("Write something before sending".to_string());
            return;
        }
        if self.user_token.is_empty() {
            self.error = Some(ApiError::MissingToken.to_string());
            return;
        }

        self.error = None;

        let actions = ctx.actions.clone();
        let user_name = self.user_name.clone();
        let token = self.user_token.clone();
        let listen = self.listen.clone();
        let text = self.text.value().trim().to_string();
        let rating = self.rating();
        let track = listen.track_name().to_string();
        let id = spawn_action(
            ctx,
            async move {
                actions
                    .write_review(&user_name, &token, &listen, &text, rating)
                    .await
            },
            format!("Reviewed {}", track),
            format!("Could not review {}", track),
        );
        self.pending = Some(id);
    }
}

#[async_trait]
impl View for WriteReview {
    fn render(&mut self, f: &mut Frame, area: Rect, _data: ViewData<'_>) {
        let inner = render_modal_frame(f, area, 64, 11, " Write a review ");
        let [header, text, rating, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(Paragraph::new(listen_header(&self.listen)), header);
        self.text.render(f, text, " Review ", self.pending.is_none());
        f.render_widget(Paragraph::new(self.stars()), rating);
        f.render_widget(
            Paragraph::new(status_line(
                self.error.as_deref(),
                self.pending.is_some(),
                "[enter] publish  [esc] cancel",
            )),
            status,
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _data: ViewData<'_>,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::DismissModal),
            _ if self.pending.is_some() => None,
            KeyCode::Up => {
                self.rating = (self.rating + 1).min(MAX_RATING);
                None
            }
            KeyCode::Down => {
                self.rating = self.rating.saturating_sub(1);
                None
            }
            KeyCode::Enter => {
                self.submit(ctx);
                None
            }
            _ => {
                self.text.handle_key(key);
                None
            }
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) -> Option<Action> {
        let pending = self.pending?;
        match event {
            Event::ActionCompleted(id, _) if *id == pending => Some(Action::DismissModal),
            Event::ActionFailed(id, message) if *id == pending => {
                self.pending = None;
                self.error = Some(message.clone());
                None
            }
            _ => None,
        }
    }
}

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
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

pub(super) fn listen_header(listen: &Listen) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            listen.track_name().to_string(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - "),
        Span::styled(
            listen.artist_name().to_string(),
            Style::default().fg(colors::ACCENT),
        ),
    ])
}

pub(super) fn status_line(error: Option<&str>, submitting: bool, hint: &'static str) -> Line<'static> {
    match (error, submitting) {
        (Some(e), _) => Line::from(Span::styled(e.to_string(), Style::default().fg(colors::ERROR))),
        (None, true) => Line::from(Span::styled("Sending...", Style::default().fg(colors::NEUTRAL))),
        (None, false) => Line::from(Span::styled(hint, Style::default().fg(colors::NEUTRAL))),
    }
}

/// Pins a listen to the user's profile with an optional blurb.
pub struct PinTrack {
    pub listen: Listen,
    user_token: String,
    blurb: TextInput,
    error: Option<String>,
    pending: Option<ActionId>,
}

impl PinTrack {
    pub fn new(listen: Listen, user_token: &str) -> Self {
        Self {
            listen,
            user_token: user_token.to_string(),
            blurb: TextInput::default(),
            error: None,
            pending: None,
        }
    }

    fn submit(&mut self, ctx: &AppContext) {
        if self.user_token.is_empty() {
            self.error = Some(ApiError::MissingToken.to_string());
            return;
        }

        self.error = None;

        let actions = ctx.actions.clone();
        let token = self.user_token.clone();
        let listen = self.listen.clone();
        let blurb = self.blurb.value().to_string();
        let track = listen.track_name().to_string();
        let id = spawn_action(
            ctx,
            async move { actions.pin_track(&token, &listen, &blurb).await },
            format!("Pinned {}", track),
            format!("Could not pin {}", track),
        );
        self.pending = Some(id);
    }
}

#[async_trait]
impl View for PinTrack {
    fn render(&mut self, f: &mut Frame, area: Rect, _data: ViewData<'_>) {
        let inner = render_modal_frame(f, area, 60, 9, " Pin this track ");
        let [header, input, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(Paragraph::new(listen_header(&self.listen)), header);
        self.blurb.render(f, input, " Why this track? (optional) ", self.pending.is_none());
        f.render_widget(
            Paragraph::new(status_line(
                self.error.as_deref(),
                self.pending.is_some(),
                "[enter] pin  [esc] cancel",
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
            KeyCode::Enter => {
                self.submit(ctx);
                None
            }
            _ => {
                self.blurb.handle_key(key);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{
            model::sample_listen,
            view_model::{DashboardViewModel, HomeViewModel},
        },
        ui::test_support::{MockBuilder, char_key, key, test_context},
    };
    use mockall::predicate::{always, eq};

    #[tokio::test]
    async fn enter_pins_with_blurb_and_dismisses_on_success() {
        let mut mocks = MockBuilder::default();
        mocks
            .actions
            .expect_pin_track()
            .with(eq("secret-token"), always(), eq("so good"))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let (ctx, rx) = test_context(mocks);
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel::default();
        let data = ViewData {
            home: &home,
            dashboard: &dashboard,
        };

        let mut modal = PinTrack::new(sample_listen("Song A", "Artist"), "secret-token");
        for c in "so good".chars() {
            assert_eq!(modal.handle_input(char_key(c), data, &ctx).await, None);
        }
        assert_eq!(modal.handle_input(key(KeyCode::Enter), data, &ctx).await, None);

        let event = rx.recv_async().await.unwrap();
        assert_eq!(event, Event::ActionCompleted(modal.pending.unwrap(), "Pinned Song A".into()));
        assert_eq!(modal.on_event(&event, &ctx).await, Some(Action::DismissModal));
    }

    #[tokio::test]
    async fn failure_keeps_modal_open_with_error() {
        let mut mocks = MockBuilder::default();
        mocks
            .actions
            .expect_pin_track()
            .returning(|_, _, _| Err(ApiError::Transport("offline".into())));
        let (ctx, rx) = test_context(mocks);
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel::default();
        let data = ViewData {
            home: &home,
            dashboard: &dashboard,
        };

        let mut modal = PinTrack::new(sample_listen("Song A", "Artist"), "secret-token");
        modal.handle_input(key(KeyCode::Enter), data, &ctx).await;

        let event = rx.recv_async().await.unwrap();
        assert_eq!(modal.on_event(&event, &ctx).await, None);
        assert_eq!(
            modal.error.as_deref(),
            Some("Could not pin Song A: Request failed: offline")
        );
        assert!(modal.pending.is_none());
    }

    #[tokio::test]
    async fn missing_token_is_reported_inline() {
        let (ctx, _rx) = test_context(MockBuilder::default());
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel::default();
        let data = ViewData {
            home: &home,
            dashboard: &dashboard,
        };

        let mut modal = PinTrack::new(sample_listen("Song A", "Artist"), "");
        modal.handle_input(key(KeyCode::Enter), data, &ctx).await;
        assert_eq!(modal.error.as_deref(), Some("No user token configured"));
        assert_eq!(
            modal.handle_input(key(KeyCode::Esc), data, &ctx).await,
            Some(Action::DismissModal)
        );
    }

    #[tokio::test]
    async fn unrelated_events_are_ignored_while_idle() {
        let (ctx, _rx) = test_context(MockBuilder::default());
        let mut modal = PinTrack::new(sample_listen("Song A", "Artist"), "secret-token");
        assert_eq!(
            modal
                .on_event(&Event::ActionCompleted(0, "Pinned Song B".into()), &ctx)
                .await,
            None
        );
    }
}

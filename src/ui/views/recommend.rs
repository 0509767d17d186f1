use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Users,
    Blurb,
}

/// Sends a listen to specific followers as a personal recommendation.
pub struct RecommendPersonally {
    pub listen: Listen,
    user_name: String,
    user_token: String,
    users: TextInput,
    blurb: TextInput,
    focus: Field,
    error: Option<String>,
    pending: Option<ActionId>,
}

fn parse_users(raw: &str) -> Vec<String> {
    let mut users: Vec<String> = Vec::new();
    for user in raw.split([',', ' ']).map(str::trim).filter(|u| !u.is_empty()) {
        if !users.iter().any(|u| u == user) {
            users.push(user.to_string());
        }
    }
    users
}

impl RecommendPersonally {
    pub fn new(listen: Listen, user_name: &str, user_token: &str) -> Self {
        Self {
            listen,
            user_name: user_name.to_string(),
            user_token: user_token.to_string(),
            users: TextInput::default(),
            blurb: TextInput::default(),
            focus: Field::Users,
            error: None,
            pending: None,
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Users => &mut self.users,
            Field::Blurb => &mut self.blurb,
        }
    }

    fn submit(&mut self, ctx: &AppContext) {
        let users = parse_users(self.users.value());
        if users.is_empty() {
            self.error = Some("Add at least one user to recommend to".to_string());
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
        let blurb = self.blurb.value().to_string();
        let track = listen.track_name().to_string();
        let done = format!("Recommended {} to {}", track, users.join(", "));
        let id = spawn_action(
            ctx,
            async move {
                actions
                    .recommend_personally(&user_name, &token, &listen, &users, &blurb)
                    .await
            },
            done,
            format!("Could not recommend {}", track),
        );
        self.pending = Some(id);
    }
}

#[async_trait]
impl View for RecommendPersonally {
    fn render(&mut self, f: &mut Frame, area: Rect, data: ViewData<'_>) {
        let inner = render_modal_frame(f, area, 64, 15, " Recommend to followers ");
        let [header, users, hint, blurb, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

        f.render_widget(Paragraph::new(listen_header(&self.listen)), header);
        self.users.render(
            f,
            users,
            " Users (comma separated) ",
            self.pending.is_none() && self.focus == Field::Users,
        );

        let followers = match data.dashboard.followers.loaded() {
            Some(followers) if !followers.is_empty() => followers.join(", "),
            Some(_) => "nobody yet".to_string(),
            None => "…".to_string(),
        };
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Followers: ", Style::default().fg(colors::ACCENT)),
                Span::styled(followers, Style::default().fg(colors::NEUTRAL)),
            ]))
            .wrap(Wrap { trim: true }),
            hint,
        );

        self.blurb.render(
            f,
            blurb,
            " Message (optional) ",
            self.pending.is_none() && self.focus == Field::Blurb,
        );
        f.render_widget(
            Paragraph::new(status_line(
                self.error.as_deref(),
                self.pending.is_some(),
                "[tab] next field  [enter] send  [esc] cancel",
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
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Field::Users => Field::Blurb,
                    Field::Blurb => Field::Users,
                };
                None
            }
            KeyCode::Enter => {
                self.submit(ctx);
                None
            }
            _ => {
                self.focused_input().handle_key(key);
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
            model::{Loadable, sample_listen},
            view_model::{DashboardViewModel, HomeViewModel},
        },
        ui::test_support::{MockBuilder, char_key, key, render_text, test_context},
    };
    use mockall::predicate::{always, eq};

    #[test]
    fn users_are_split_and_deduplicated() {
        assert_eq!(parse_users("alice, bob,alice  carol"), vec!["alice", "bob", "carol"]);
        assert!(parse_users(" , ").is_empty());
    }

    #[tokio::test]
    async fn sends_to_listed_users_with_message() {
        let mut mocks = MockBuilder::default();
        mocks
            .actions
            .expect_recommend_personally()
            .with(
                eq("rob"),
                eq("secret-token"),
                always(),
                eq(vec!["alice".to_string(), "bob".to_string()]),
                eq("hi"),
            )
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        let (ctx, rx) = test_context(mocks);
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel::default();
        let data = ViewData {
            home: &home,
            dashboard: &dashboard,
        };

        let mut modal =
            RecommendPersonally::new(sample_listen("Song A", "Artist"), "rob", "secret-token");
        for c in "alice,bob".chars() {
            modal.handle_input(char_key(c), data, &ctx).await;
        }
        modal.handle_input(key(KeyCode::Tab), data, &ctx).await;
        for c in "hi".chars() {
            modal.handle_input(char_key(c), data, &ctx).await;
        }
        modal.handle_input(key(KeyCode::Enter), data, &ctx).await;

        let event = rx.recv_async().await.unwrap();
        assert_eq!(
            event,
            Event::ActionCompleted(modal.pending.unwrap(), "Recommended Song A to alice, bob".into())
        );
        assert_eq!(modal.on_event(&event, &ctx).await, Some(Action::DismissModal));
    }

    #[tokio::test]
    async fn requires_at_least_one_user() {
        let (ctx, _rx) = test_context(MockBuilder::default());
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel::default();
        let data = ViewData {
            home: &home,
            dashboard: &dashboard,
        };

        let mut modal =
            RecommendPersonally::new(sample_listen("Song A", "Artist"), "rob", "secret-token");
        assert_eq!(modal.handle_input(key(KeyCode::Enter), data, &ctx).await, None);
        assert!(modal.pending.is_none());
        assert_eq!(
            modal.error.as_deref(),
            Some("Add at least one user to recommend to")
        );
    }

    #[test]
    fn lists_followers_as_hints() {
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel {
            followers: Loadable::Loaded(vec!["alice".into(), "bob".into()]),
            ..Default::default()
        };
        let mut modal =
            RecommendPersonally::new(sample_listen("Song A", "Artist"), "rob", "secret-token");
        let text = render_text(80, 24, |f| {
            modal.render(
                f,
                f.area(),
                ViewData {
                    home: &home,
                    dashboard: &dashboard,
                },
            )
        });
        assert!(text.contains("Song A - Artist"));
        assert!(text.contains("Followers: alice, bob"));
    }
}

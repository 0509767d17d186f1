use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};
use tokio::task::JoinHandle;

use crate::{
    data::{model::Loadable, model::Playlist, view_model::DashboardViewModel},
    event::events::{Event, Request},
    ui::{
        context::AppContext,
        traits::{Action, View, ViewData},
        util::{spawn_request, step_selection},
    },
    util::colors,
};

use super::render_list_frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistSource {
    /// Playlists the user made.
    Own,
    /// Playlists generated for the user.
    CreatedFor,
}

impl PlaylistSource {
    fn title(&self) -> &'static str {
        match self {
            PlaylistSource::Own => " Your playlists ",
            PlaylistSource::CreatedFor => " Playlists made for you ",
        }
    }

    fn request(&self) -> Request {
        match self {
            PlaylistSource::Own => Request::Playlists,
            PlaylistSource::CreatedFor => Request::CreatedFor,
        }
    }

    fn playlists<'a>(&self, model: &'a DashboardViewModel) -> &'a Loadable<Vec<Playlist>> {
        match self {
            PlaylistSource::Own => &model.playlists,
            PlaylistSource::CreatedFor => &model.created_for,
        }
    }
}

pub struct Playlists {
    source: PlaylistSource,
    list_state: ListState,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Playlists {
    pub fn new(source: PlaylistSource) -> Self {
        Self {
            source,
            list_state: ListState::default(),
            fetch_handle: None,
        }
    }
}

impl Drop for Playlists {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for Playlists {
    fn on_mount(&mut self, ctx: &AppContext) {
        let dashboard = ctx.dashboard.clone();
        let user_name = ctx.credentials.user_name.clone();
        let handle = match self.source {
            PlaylistSource::Own => spawn_request(ctx, self.source.request(), async move {
                dashboard
                    .get_playlists(&user_name)
                    .await
                    .map(Event::PlaylistsFetched)
            }),
            PlaylistSource::CreatedFor => spawn_request(ctx, self.source.request(), async move {
                dashboard
                    .get_created_for_playlists(&user_name)
                    .await
                    .map(Event::CreatedForFetched)
            }),
        };
        self.fetch_handle = Some(handle);
    }

    fn render(&mut self, f: &mut Frame, area: Rect, data: ViewData<'_>) {
        let Some((inner, playlists)) = render_list_frame(
            f,
            area,
            self.source.title(),
            self.source.playlists(data.dashboard),
            "playlists",
        ) else {
            return;
        };

        let items: Vec<ListItem> = playlists
            .iter()
            .map(|playlist| {
                let mut spans = vec![Span::raw(playlist.title.clone())];
                if !playlist.creator.is_empty() {
                    spans.push(Span::styled(
                        format!("  by {}", playlist.creator),
                        Style::default().fg(colors::NEUTRAL),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, inner, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        data: ViewData<'_>,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = self
            .source
            .playlists(data.dashboard)
            .loaded()
            .map_or(0, Vec::len);
        step_selection(&mut self.list_state, len, key.code);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::view_model::HomeViewModel,
        ui::test_support::{MockBuilder, next_result, render_text, test_context},
    };
    use mockall::predicate::eq;

    fn weekly_jams() -> Playlist {
        Playlist {
            identifier: "https://listenbrainz.org/playlist/3a7b0d0e".into(),
            title: "Weekly Jams for rob".into(),
            creator: "listenbrainz".into(),
            date: None,
            annotation: None,
        }
    }

    #[tokio::test]
    async fn created_for_source_uses_its_own_endpoint() {
        let mut mocks = MockBuilder::default();
        mocks.dashboard.expect_get_playlists().times(0);
        mocks
            .dashboard
            .expect_get_created_for_playlists()
            .with(eq("rob"))
            .times(1)
            .returning(|_| Ok(vec![weekly_jams()]));
        let (ctx, rx) = test_context(mocks);

        let mut view = Playlists::new(PlaylistSource::CreatedFor);
        view.on_mount(&ctx);

        assert_eq!(
            next_result(&rx).await,
            Some(Event::CreatedForFetched(vec![weekly_jams()]))
        );
    }

    #[test]
    fn each_source_renders_its_own_list() {
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel {
            playlists: Loadable::Loaded(vec![]),
            created_for: Loadable::Loaded(vec![weekly_jams()]),
            ..Default::default()
        };
        let data = ViewData {
            home: &home,
            dashboard: &dashboard,
        };

        let mut own = Playlists::new(PlaylistSource::Own);
        let text = render_text(70, 6, |f| own.render(f, f.area(), data));
        assert!(text.contains("Your playlists"));
        assert!(text.contains("No playlists yet"));

        let mut created = Playlists::new(PlaylistSource::CreatedFor);
        let text = render_text(70, 6, |f| created.render(f, f.area(), data));
        assert!(text.contains("made for you"));
        assert!(text.contains("Weekly Jams for rob  by listenbrainz"));
    }
}

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
    event::events::{Event, Request},
    ui::{
        context::AppContext,
        traits::{Action, View, ViewData},
        util::{format_count, spawn_request, step_selection},
    },
    util::colors,
};

use super::render_list_frame;

const BAR_WIDTH: usize = 20;

#[derive(Default)]
pub struct Statistics {
    list_state: ListState,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Drop for Statistics {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for Statistics {
    fn on_mount(&mut self, ctx: &AppContext) {
        let dashboard = ctx.dashboard.clone();
        let user_name = ctx.credentials.user_name.clone();
        self.fetch_handle = Some(spawn_request(ctx, Request::TopArtists, async move {
            dashboard
                .get_top_artists(&user_name)
                .await
                .map(Event::TopArtistsFetched)
        }));
    }

    fn render(&mut self, f: &mut Frame, area: Rect, data: ViewData<'_>) {
        let Some((inner, artists)) = render_list_frame(
            f,
            area,
            " Top artists · this week ",
            &data.dashboard.top_artists,
            "artist stats",
        ) else {
            return;
        };

        let max = artists.iter().map(|a| a.listen_count).max().unwrap_or(1).max(1);
        let items: Vec<ListItem> = artists
            .iter()
            .enumerate()
            .map(|(rank, artist)| {
                let filled = (artist.listen_count * BAR_WIDTH as u64 / max) as usize;
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", rank + 1),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                    Span::styled(
                        format!("{:<width$} ", "█".repeat(filled.max(1)), width = BAR_WIDTH),
                        Style::default().fg(colors::SECONDARY),
                    ),
                    Span::styled(
                        artist.artist_name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} listens", format_count(artist.listen_count)),
                        Style::default().fg(colors::ACCENT),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(Style::default().fg(colors::PRIMARY));
        f.render_stateful_widget(list, inner, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        data: ViewData<'_>,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = data.dashboard.top_artists.loaded().map_or(0, Vec::len);
        step_selection(&mut self.list_state, len, key.code);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{
            model::{Loadable, TopArtist},
            view_model::{DashboardViewModel, HomeViewModel},
        },
        ui::test_support::{MockBuilder, next_result, render_text, test_context},
    };
    use mockall::predicate::eq;

    #[tokio::test]
    async fn mount_fetches_top_artists_for_the_user() {
        let mut mocks = MockBuilder::default();
        mocks
            .dashboard
            .expect_get_top_artists()
            .with(eq("rob"))
            .times(1)
            .returning(|_| {
                Ok(vec![TopArtist {
                    artist_name: "Burial".into(),
                    listen_count: 12,
                    artist_mbid: None,
                }])
            });
        let (ctx, rx) = test_context(mocks);

        let mut view = Statistics::default();
        view.on_mount(&ctx);

        match next_result(&rx).await {
            Some(Event::TopArtistsFetched(artists)) => assert_eq!(artists[0].artist_name, "Burial"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn renders_ranked_artists() {
        let home = HomeViewModel::default();
        let dashboard = DashboardViewModel {
            top_artists: Loadable::Loaded(vec![
                TopArtist {
                    artist_name: "Björk".into(),
                    listen_count: 1200,
                    artist_mbid: None,
                },
                TopArtist {
                    artist_name: "Burial".into(),
                    listen_count: 300,
                    artist_mbid: None,
                },
            ]),
            ..Default::default()
        };

        let mut view = Statistics::default();
        let text = render_text(90, 10, |f| {
            view.render(
                f,
                f.area(),
                ViewData {
                    home: &home,
                    dashboard: &dashboard,
                },
            )
        });

        assert!(text.contains("Top artists"));
        assert!(text.contains(" 1. "));
        assert!(text.contains("1,200 listens"));
        assert!(text.contains(" 2. "));
    }
}

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
        util::{spawn_request, step_selection},
    },
    util::colors,
};

use super::render_list_frame;

/// Recordings the user has loved.
#[derive(Default)]
pub struct Taste {
    list_state: ListState,
    fetch_handle: Option<JoinHandle<()>>,
}

impl Drop for Taste {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch_handle.take() {
            handle.abort();
        }
    }
}

#[async_trait]
impl View for Taste {
    fn on_mount(&mut self, ctx: &AppContext) {
        let dashboard = ctx.dashboard.clone();
        let user_name = ctx.credentials.user_name.clone();
        self.fetch_handle = Some(spawn_request(ctx, Request::LovedTracks, async move {
            dashboard
                .get_loved_tracks(&user_name)
                .await
                .map(Event::LovedTracksFetched)
        }));
    }

    fn render(&mut self, f: &mut Frame, area: Rect, data: ViewData<'_>) {
        let Some((inner, loved)) = render_list_frame(
            f,
            area,
            " Loved tracks ",
            &data.dashboard.loved_tracks,
            "loved tracks",
        ) else {
            return;
        };

        let items: Vec<ListItem> = loved
            .iter()
            .map(|feedback| {
                ListItem::new(Line::from(vec![
                    Span::styled("♥ ", Style::default().fg(colors::PRIMARY)),
                    Span::raw(feedback.label()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, inner, &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        data: ViewData<'_>,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let len = data.dashboard.loved_tracks.loaded().map_or(0, Vec::len);
        step_selection(&mut self.list_state, len, key.code);
        None
    }
}

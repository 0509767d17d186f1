use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use tracing::{debug, info};

use crate::{
    data::view_model::DashboardViewModel,
    event::events::{Event, Request},
    ui::{
        components::{tab_strip::TabStrip, text_input::TextInput, top_bar::TopBar},
        context::AppContext,
        state::AppState,
        traits::{Action, View, ViewData},
        util::spawn_request,
        views::{
            Listens, PinTrack, PlaylistSource, Playlists, RecommendPersonally, Settings,
            Statistics, Taste, WriteReview,
        },
    },
    util::task::TaskManager,
};

use super::modal::ModalState;

pub const TAB_LABELS: [&str; 5] = ["Listens", "Stats", "Taste", "Playlists", "Created for you"];

pub fn title_for_index(index: usize) -> &'static str {
    match index {
        0 => "Listens",
        1 => "Statistics",
        2 => "Taste",
        3 => "Playlists",
        4 => "Created for You",
        _ => "Listens",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubView {
    Listens,
    Statistics,
    Taste,
    Playlists,
    CreatedForYou,
}

impl SubView {
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => SubView::Listens,
            1 => SubView::Statistics,
            2 => SubView::Taste,
            3 => SubView::Playlists,
            _ => SubView::CreatedForYou,
        }
    }

    fn build(self) -> Box<dyn View> {
        match self {
            SubView::Listens => Box::new(Listens::default()),
            SubView::Statistics => Box::new(Statistics::default()),
            SubView::Taste => Box::new(Taste::default()),
            SubView::Playlists => Box::new(Playlists::new(PlaylistSource::Own)),
            SubView::CreatedForYou => Box::new(Playlists::new(PlaylistSource::CreatedFor)),
        }
    }
}

/// Tabbed profile dashboard: top bar, tab strip, one sub-view and the
/// listen modals triggered from it.
pub struct DashboardScreen {
    selected_tab: usize,
    active: SubView,
    content: Box<dyn View>,
    modal: ModalState,
    settings: Option<Settings>,
    search: Option<TextInput>,
    pub view_model: DashboardViewModel,
    tasks: TaskManager,
    mounted: bool,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            selected_tab: 0,
            active: SubView::Listens,
            content: SubView::Listens.build(),
            modal: ModalState::Hidden,
            settings: None,
            search: None,
            view_model: DashboardViewModel::default(),
            tasks: TaskManager::new(),
            mounted: false,
        }
    }

    /// Issues the initial profile requests. Only the first call does anything.
    pub fn on_mount(&mut self, ctx: &AppContext) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let user_name = ctx.credentials.user_name.clone();
        self.view_model.user_name = user_name.clone();
        info!("Loading dashboard for {}", user_name);

        let home = ctx.home.clone();
        let name = user_name.clone();
        self.tasks.spawn(
            Request::MusicData.key(),
            spawn_request(ctx, Request::MusicData, async move {
                home.request_music_data(&name)
                    .await
                    .map(Event::MusicDataFetched)
            }),
        );

        let dashboard = ctx.dashboard.clone();
        let name = user_name.clone();
        self.tasks.spawn(
            Request::ListenCount.key(),
            spawn_request(ctx, Request::ListenCount, async move {
                dashboard
                    .get_listen_count(&name)
                    .await
                    .map(Event::ListenCountFetched)
            }),
        );

        let dashboard = ctx.dashboard.clone();
        let name = user_name.clone();
        self.tasks.spawn(
            Request::Followers.key(),
            spawn_request(ctx, Request::Followers, async move {
                dashboard
                    .get_followers(&name)
                    .await
                    .map(Event::FollowersFetched)
            }),
        );

        let dashboard = ctx.dashboard.clone();
        self.tasks.spawn(
            Request::Following.key(),
            spawn_request(ctx, Request::Following, async move {
                dashboard
                    .get_following(&user_name)
                    .await
                    .map(Event::FollowingFetched)
            }),
        );

        self.content.on_mount(ctx);
    }

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn title(&self) -> &'static str {
        title_for_index(self.selected_tab)
    }

    pub fn active_view(&self) -> SubView {
        self.active
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn settings_visible(&self) -> bool {
        self.settings.is_some()
    }

    pub fn searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn has_overlay(&self) -> bool {
        self.modal.is_visible() || self.settings.is_some() || self.search.is_some()
    }

    /// Enter keeps the query as a filter, Esc clears it.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search = None;
                self.view_model.search_query.clear();
            }
            KeyCode::Enter => self.search = None,
            _ => {
                if let Some(input) = &mut self.search {
                    input.handle_key(key);
                    self.view_model.search_query = input.value().to_string();
                }
            }
        }
    }

    pub fn select_tab(&mut self, index: usize, ctx: &AppContext) {
        self.selected_tab = index;

        let next = SubView::for_index(index);
        if next == self.active {
            return;
        }
        debug!("Switching dashboard to {:?}", next);
        self.active = next;
        // Dropping the old view aborts its fetch.
        self.content = next.build();
        if self.mounted {
            self.content.on_mount(ctx);
        }
    }

    pub fn next_tab(&mut self, ctx: &AppContext) {
        let next = (self.selected_tab + 1) % TAB_LABELS.len();
        self.select_tab(next, ctx);
    }

    pub fn previous_tab(&mut self, ctx: &AppContext) {
        let previous = (self.selected_tab + TAB_LABELS.len() - 1) % TAB_LABELS.len();
        self.select_tab(previous, ctx);
    }

    pub fn toggle_settings(&mut self, ctx: &AppContext) {
        self.settings = match self.settings {
            Some(_) => None,
            None => Some(Settings::new(ctx)),
        };
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = ModalState::Hidden;
    }

    pub fn dispatch(&mut self, action: Action, ctx: &AppContext) {
        let credentials = &ctx.credentials;
        match action {
            Action::PinTrack(listen) => {
                self.modal = ModalState::PinTrack(PinTrack::new(listen, &credentials.user_token));
            }
            Action::RecommendPersonally(listen) => {
                self.modal = ModalState::Recommend(RecommendPersonally::new(
                    listen,
                    &credentials.user_name,
                    &credentials.user_token,
                ));
            }
            Action::WriteReview(listen) => {
                self.modal = ModalState::WriteReview(WriteReview::new(
                    listen,
                    &credentials.user_name,
                    &credentials.user_token,
                ));
            }
            Action::DismissModal => self.dismiss_modal(),
            Action::CloseSettings => self.settings = None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let [top, tabs, content] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(area);

        f.render_widget(
            TopBar::new(self.title(), &self.view_model.user_name)
                .search(&self.view_model.search_query, self.search.is_some()),
            top,
        );
        f.render_widget(TabStrip::new(&TAB_LABELS, self.selected_tab), tabs);

        let data = ViewData {
            home: &state.home,
            dashboard: &self.view_model,
        };
        self.content.render(f, content, data);

        if let Some(modal) = self.modal.view_mut() {
            modal.render(f, area, data);
        }
        if let Some(settings) = &mut self.settings {
            settings.render(f, area, data);
        }
    }

    /// Overlays capture every key; otherwise the active sub-view gets it.
    pub async fn handle_input(&mut self, key: KeyEvent, state: &AppState, ctx: &AppContext) {
        if self.settings.is_none() && !self.modal.is_visible() {
            if self.search.is_some() {
                self.handle_search_key(key);
                return;
            }
            if key.code == KeyCode::Char('/') && self.active == SubView::Listens {
                self.search = Some(TextInput::default());
                self.view_model.search_query.clear();
                return;
            }
        }

        let data = ViewData {
            home: &state.home,
            dashboard: &self.view_model,
        };

        let action = if let Some(settings) = &mut self.settings {
            settings.handle_input(key, data, ctx).await
        } else if let Some(modal) = self.modal.view_mut() {
            modal.handle_input(key, data, ctx).await
        } else {
            self.content.handle_input(key, data, ctx).await
        };

        if let Some(action) = action {
            self.dispatch(action, ctx);
        }
    }

    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        self.view_model.apply(event);

        if let Some(action) = self.content.on_event(event, ctx).await {
            self.dispatch(action, ctx);
        }

        let action = match self.modal.view_mut() {
            Some(modal) => modal.on_event(event, ctx).await,
            None => None,
        };
        if let Some(action) = action {
            self.dispatch(action, ctx);
        }
    }
}

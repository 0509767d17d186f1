use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::info;

use crate::{
    config::{Config, LayeredStore},
    event::events::Event,
    http::ApiService,
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    screens::DashboardScreen,
    state::AppState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub state: AppState,
    pub ctx: AppContext,
    pub screen: DashboardScreen,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub async fn new() -> color_eyre::Result<Self> {
        let config = Config::load(&LayeredStore::system())?;
        info!(
            "Starting for {} against {}",
            config.credentials.user_name, config.api_url
        );

        let api = Arc::new(ApiService::new(&config.api_url)?);
        let (event_tx, event_rx) = flume::unbounded();
        let ctx = AppContext {
            home: api.clone(),
            dashboard: api.clone(),
            actions: api,
            credentials: config.credentials,
            api_url: config.api_url,
            event_tx,
        };

        Ok(Self::with_context(ctx, event_rx))
    }

    pub fn with_context(ctx: AppContext, event_rx: Receiver<Event>) -> Self {
        Self {
            event_rx,
            state: AppState::default(),
            ctx,
            screen: DashboardScreen::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::SelectTab(index) => self.screen.select_tab(index, &self.ctx),
            AppMessage::NextTab => self.screen.next_tab(&self.ctx),
            AppMessage::PreviousTab => self.screen.previous_tab(&self.ctx),
            AppMessage::ToggleSettings => self.screen.toggle_settings(&self.ctx),
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}

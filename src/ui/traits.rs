use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    data::{
        model::Listen,
        view_model::{DashboardViewModel, HomeViewModel},
    },
    event::events::Event,
    ui::context::AppContext,
};

/// Results a view hands back to the screen that hosts it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PinTrack(Listen),
    RecommendPersonally(Listen),
    WriteReview(Listen),
    DismissModal,
    CloseSettings,
}

/// Shared data context every dashboard view renders from.
#[derive(Clone, Copy)]
pub struct ViewData<'a> {
    pub home: &'a HomeViewModel,
    pub dashboard: &'a DashboardViewModel,
}

#[async_trait]
pub trait View: Send {
    fn on_mount(&mut self, _ctx: &AppContext) {}

    fn render(&mut self, f: &mut Frame, area: Rect, data: ViewData<'_>);

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        data: ViewData<'_>,
        ctx: &AppContext,
    ) -> Option<Action>;

    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) -> Option<Action> {
        None
    }
}

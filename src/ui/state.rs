use crate::{
    data::view_model::HomeViewModel,
    event::events::{Event, Request},
};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub home: HomeViewModel,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub status: Option<Status>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

impl AppState {
    pub fn apply(&mut self, event: &Event) {
        self.home.apply(event);

        match event {
            Event::ActionCompleted(_, message) => {
                self.ui.status = Some(Status::Info(message.clone()))
            }
            Event::ActionFailed(_, message) => self.ui.status = Some(Status::Error(message.clone())),
            Event::FetchError(request, message) => {
                self.ui.status = Some(Status::Error(format!(
                    "Could not load {}: {}",
                    request.label(),
                    message
                )))
            }
            Event::FetchStarted(Request::MusicData) => self.ui.status = None,
            _ => {}
        }
    }
}

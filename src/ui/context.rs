use std::sync::Arc;

use flume::Sender;

use crate::{
    config::Credentials,
    data::traits::{DashboardDataProvider, HomeDataProvider, TimelineActions},
    event::events::Event,
};

pub struct AppContext {
    pub home: Arc<dyn HomeDataProvider>,
    pub dashboard: Arc<dyn DashboardDataProvider>,
    pub actions: Arc<dyn TimelineActions>,
    pub credentials: Credentials,
    pub api_url: String,
    pub event_tx: Sender<Event>,
}

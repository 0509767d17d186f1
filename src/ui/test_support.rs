use std::sync::Arc;

use flume::Receiver;
use ratatui::{
    Frame, Terminal,
    backend::TestBackend,
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};

use crate::{
    config::Credentials,
    data::traits::{MockDashboardDataProvider, MockHomeDataProvider, MockTimelineActions},
    event::events::Event,
    http::DEFAULT_API_URL,
    ui::context::AppContext,
};

#[derive(Default)]
pub struct MockBuilder {
    pub home: MockHomeDataProvider,
    pub dashboard: MockDashboardDataProvider,
    pub actions: MockTimelineActions,
}

impl MockBuilder {
    /// Lets every tab's own fetch succeed with empty data.
    pub fn with_empty_tabs(mut self) -> Self {
        self.dashboard
            .expect_get_top_artists()
            .returning(|_| Ok(vec![]));
        self.dashboard
            .expect_get_loved_tracks()
            .returning(|_| Ok(vec![]));
        self.dashboard
            .expect_get_playlists()
            .returning(|_| Ok(vec![]));
        self.dashboard
            .expect_get_created_for_playlists()
            .returning(|_| Ok(vec![]));
        self
    }
}

pub fn test_credentials() -> Credentials {
    Credentials {
        user_name: "rob".to_string(),
        user_token: "secret-token".to_string(),
    }
}

pub fn test_context(mocks: MockBuilder) -> (AppContext, Receiver<Event>) {
    let (event_tx, event_rx) = flume::unbounded();
    let ctx = AppContext {
        home: Arc::new(mocks.home),
        dashboard: Arc::new(mocks.dashboard),
        actions: Arc::new(mocks.actions),
        credentials: test_credentials(),
        api_url: DEFAULT_API_URL.to_string(),
        event_tx,
    };
    (ctx, event_rx)
}

pub fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf.cell((x, y)).map_or(" ", |c| c.symbol()));
        }
        text.push('\n');
    }
    text
}

pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(draw).unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Waits briefly for the next event that is not a `FetchStarted` marker.
pub async fn next_result(rx: &Receiver<Event>) -> Option<Event> {
    loop {
        let event = tokio::time::timeout(std::time::Duration::from_millis(500), rx.recv_async())
            .await
            .ok()?
            .ok()?;
        if !matches!(event, Event::FetchStarted(_)) {
            return Some(event);
        }
    }
}

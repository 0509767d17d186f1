pub mod handler;

use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};

use ratatui::{crossterm::event::KeyCode, widgets::ListState};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::{
    event::events::{ActionId, Event, Request},
    http::error::ApiError,
    ui::context::AppContext,
};

/// Formats with thousands separators, e.g. 51234 -> "51,234".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Vim-style list navigation. Returns true when the key moved the selection.
pub fn step_selection(state: &mut ListState, len: usize, code: KeyCode) -> bool {
    if len == 0 {
        return false;
    }

    let next = match code {
        KeyCode::Down | KeyCode::Char('j') => state
            .selected()
            .map_or(0, |i| if i >= len - 1 { i } else { i + 1 }),
        KeyCode::Up | KeyCode::Char('k') => state.selected().map_or(0, |i| i.saturating_sub(1)),
        KeyCode::Char('g') | KeyCode::Home => 0,
        KeyCode::Char('G') | KeyCode::End => len - 1,
        _ => return false,
    };
    state.select(Some(next));
    true
}

/// Marks `request` as loading and runs `fetch` in the background, publishing
/// its result (or failure) as an [`Event`].
pub fn spawn_request<F>(ctx: &AppContext, request: Request, fetch: F) -> JoinHandle<()>
where
    F: Future<Output = Result<Event, ApiError>> + Send + 'static,
{
    let tx = ctx.event_tx.clone();
    let _ = tx.send(Event::FetchStarted(request));

    tokio::spawn(async move {
        let event = match fetch.await {
            Ok(event) => event,
            Err(e) => {
                warn!("Failed to fetch {}: {}", request.key(), e);
                Event::FetchError(request, e.to_string())
            }
        };
        let _ = tx.send(event);
    })
}

static NEXT_ACTION: AtomicU64 = AtomicU64::new(1);

/// Runs a timeline write in the background and reports the outcome under the
/// returned id.
pub fn spawn_action<F>(ctx: &AppContext, action: F, done: String, failed: String) -> ActionId
where
    F: Future<Output = Result<(), ApiError>> + Send + 'static,
{
    let id = NEXT_ACTION.fetch_add(1, Ordering::Relaxed);
    let tx = ctx.event_tx.clone();

    tokio::spawn(async move {
        let event = match action.await {
            Ok(()) => Event::ActionCompleted(id, done),
            Err(e) => {
                warn!("{}: {}", failed, e);
                Event::ActionFailed(id, format!("{}: {}", failed, e))
            }
        };
        let _ = tx.send(event);
    });
    id
}

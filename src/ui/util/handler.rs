use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.screen.on_mount(&app.ctx),
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    /// Publishes a background result to the app-wide state, then to the screen.
    pub async fn handle_action(app: &mut App, evt: Event) {
        if let Event::FetchError(request, e) = &evt {
            debug!("{} failed: {}", request.label(), e);
        }

        app.state.apply(&evt);
        app.screen.on_event(&evt, &app.ctx).await;
    }

    pub async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit).await;
            return;
        }

        if !app.screen.has_overlay() {
            if let Some(msg) = InputHandler::handle_key(evt) {
                app.update(msg).await;
                return;
            }
        }

        app.screen.handle_input(evt, &app.state, &app.ctx).await;
    }
}

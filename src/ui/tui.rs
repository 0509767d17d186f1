use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;

use flume::{Receiver, Sender};
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::{
    cursor,
    event::{
        DisableFocusChange, EnableFocusChange, Event as CrosstermEvent, EventStream, KeyEvent,
        KeyEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend as Backend, crossterm};
use tokio::task::JoinHandle;
use tracing::error;

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Clone, Debug)]
pub enum TerminalEvent {
    Init,
    Quit,
    Tick,
    FocusGained,
    FocusLost,
    Key(KeyEvent),
    Resize(u16, u16),
}

pub struct Tui {
    pub terminal: ratatui::Terminal<Backend<std::io::Stdout>>,
    pub event_rx: Receiver<TerminalEvent>,
    pub event_tx: Sender<TerminalEvent>,
    pub tick_rate: Duration,
    reader: Option<JoinHandle<()>>,
}

/// Key releases and repeats are dropped; only presses reach the app.
fn translate(evt: CrosstermEvent) -> Option<TerminalEvent> {
    match evt {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            Some(TerminalEvent::Key(key))
        }
        CrosstermEvent::Resize(x, y) => Some(TerminalEvent::Resize(x, y)),
        CrosstermEvent::FocusLost => Some(TerminalEvent::FocusLost),
        CrosstermEvent::FocusGained => Some(TerminalEvent::FocusGained),
        _ => None,
    }
}

/// Restores the terminal before the default panic report is printed.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = Tui::restore();
        hook(panic_info);
    }));
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(std::io::stdout()))?;
        let (event_tx, event_rx) = flume::unbounded();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            tick_rate: DEFAULT_TICK_RATE,
            reader: None,
        })
    }

    pub fn start(&mut self) {
        let event_tx = self.event_tx.clone();
        let tick_rate = self.tick_rate;
        let reader = tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);
            loop {
                let tick_delay = tick_interval.tick();
                let crossterm_event = reader.next().fuse();

                tokio::select! {
                    _ = tick_delay => {
                        let _ = event_tx.send_async(TerminalEvent::Tick).await;
                    }
                    Some(evt) = crossterm_event => {
                        match evt {
                            Ok(evt) => {
                                if let Some(evt) = translate(evt) {
                                    let _ = event_tx.send_async(evt).await;
                                }
                            }
                            Err(e) => {
                                error!("Terminal input failed: {}", e);
                                let _ = event_tx.send_async(TerminalEvent::Quit).await;
                                break;
                            }
                        }
                    }
                }
            }
        });
        self.reader = Some(reader);
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableFocusChange,
            cursor::Hide
        )?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            crossterm::execute!(std::io::stdout(), DisableFocusChange)?;
            Self::restore()?;
        }
        Ok(())
    }

    pub fn restore() -> Result<()> {
        crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Option<TerminalEvent> {
        self.event_rx.recv_async().await.ok()
    }
}

impl Deref for Tui {
    type Target = ratatui::Terminal<Backend<std::io::Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!("Failed to restore terminal: {}", e);
        }
    }
}

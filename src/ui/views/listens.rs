use async_trait::async_trait;
use chrono::Local;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    data::model::{Listen, Loadable},
    ui::{
        components::{spinner::Spinner, stats_card::StatsCard},
        context::AppContext,
        traits::{Action, View, ViewData},
        util::step_selection,
    },
    util::colors,
};

/// Listen stats followed by the song detail list of recent listens.
#[derive(Default)]
pub struct Listens {
    list_state: ListState,
}

fn visible<'a>(listens: &'a [Listen], query: &str) -> Vec<&'a Listen> {
    listens.iter().filter(|listen| listen.matches(query)).collect()
}

impl Listens {
    fn selected<'a>(&self, listens: &[&'a Listen]) -> Option<&'a Listen> {
        self.list_state.selected().and_then(|i| listens.get(i).copied())
    }

    fn render_song_details(
        &mut self,
        f: &mut Frame,
        area: Rect,
        listens: &Loadable<Vec<Listen>>,
        query: &str,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Recent listens ")
            .title_bottom(Line::from(" [p] pin  [r] recommend  [w] review ").right_aligned())
            .border_style(Style::default().fg(colors::NEUTRAL));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let listens = match listens {
            Loadable::Idle | Loadable::Loading => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading listens...");
                f.render_widget(spinner, inner);
                return;
            }
            Loadable::Failed(e) => {
                f.render_widget(
                    Paragraph::new(format!("Could not load listens: {}", e))
                        .style(Style::default().fg(colors::ERROR)),
                    inner,
                );
                return;
            }
            Loadable::Loaded(listens) if listens.is_empty() => {
                f.render_widget(
                    Paragraph::new("No listens yet").style(Style::default().fg(colors::NEUTRAL)),
                    inner,
                );
                return;
            }
            Loadable::Loaded(listens) => visible(listens, query),
        };
        if listens.is_empty() {
            f.render_widget(
                Paragraph::new(format!("No listens match \"{}\"", query.trim()))
                    .style(Style::default().fg(colors::NEUTRAL)),
                inner,
            );
            return;
        }

        let now = Local::now();
        let items: Vec<ListItem> = listens
            .iter()
            .map(|listen| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        listen.track_name().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" - "),
                    Span::styled(
                        listen.artist_name().to_string(),
                        Style::default().fg(colors::ACCENT),
                    ),
                    Span::styled(
                        format!("  {}", listen.listened_at_label(now)),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]))
            })
            .collect();

        if self.list_state.selected().is_none_or(|i| i >= listens.len()) {
            self.list_state.select(Some(0));
        }

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, inner, &mut self.list_state);
    }
}

#[async_trait]
impl View for Listens {
    fn render(&mut self, f: &mut Frame, area: Rect, data: ViewData<'_>) {
        let [stats_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

        f.render_widget(StatsCard::new(data.dashboard), stats_area);
        self.render_song_details(
            f,
            list_area,
            &data.home.listens,
            &data.dashboard.search_query,
        );
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        data: ViewData<'_>,
        _ctx: &AppContext,
    ) -> Option<Action> {
        let listens = visible(
            data.home.listens.loaded().map(Vec::as_slice).unwrap_or(&[]),
            &data.dashboard.search_query,
        );
        if step_selection(&mut self.list_state, listens.len(), key.code) {
            return None;
        }

        if self.list_state.selected().is_none() && !listens.is_empty() {
            self.list_state.select(Some(0));
        }
        let listen = self.selected(&listens)?.clone();

        match key.code {
            KeyCode::Char('p') => Some(Action::PinTrack(listen)),
            KeyCode::Char('r') => Some(Action::RecommendPersonally(listen)),
            KeyCode::Char('w') => Some(Action::WriteReview(listen)),
            _ => None,
        }
    }
}

pub mod listens;
pub mod pin_track;
pub mod playlists;
pub mod recommend;
pub mod settings;
pub mod statistics;
pub mod taste;
pub mod write_review;

pub use listens::Listens;
pub use pin_track::PinTrack;
pub use playlists::{PlaylistSource, Playlists};
pub use recommend::RecommendPersonally;
pub use settings::Settings;
pub use statistics::Statistics;
pub use taste::Taste;
pub use write_review::WriteReview;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    data::model::Loadable,
    ui::components::spinner::Spinner,
    util::colors,
};

/// Draws a titled block plus the loading, failure or empty placeholder.
/// Returns the inner area and the items when there is a list to show.
fn render_list_frame<'a, T>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &'a Loadable<Vec<T>>,
    what: &str,
) -> Option<(Rect, &'a [T])> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(colors::NEUTRAL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match value {
        Loadable::Idle | Loadable::Loading => {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label(format!("Loading {}...", what));
            f.render_widget(spinner, inner);
            None
        }
        Loadable::Failed(e) => {
            f.render_widget(
                Paragraph::new(format!("Could not load {}: {}", what, e))
                    .style(Style::default().fg(colors::ERROR)),
                inner,
            );
            None
        }
        Loadable::Loaded(items) if items.is_empty() => {
            f.render_widget(
                Paragraph::new(format!("No {} yet", what))
                    .style(Style::default().fg(colors::NEUTRAL)),
                inner,
            );
            None
        }
        Loadable::Loaded(items) => Some((inner, items.as_slice())),
    }
}

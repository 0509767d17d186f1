use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear},
};

use crate::util::colors;

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Clears a centered area and draws the modal frame. Returns the inner area.
pub fn render_modal_frame(f: &mut Frame, area: Rect, width: u16, height: u16, title: &str) -> Rect {
    let rect = centered_rect(width, height, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(colors::PRIMARY))
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .style(Style::default().bg(colors::SURFACE));
    let inner = block.inner(rect);

    f.render_widget(Clear, rect);
    f.render_widget(block, rect);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(centered_rect(60, 30, area), area);
    }
}

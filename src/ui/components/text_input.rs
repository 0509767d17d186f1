use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// Single-line editable text field.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Applies an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let at = self.byte_index();
                self.value.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index();
                    self.value.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index();
                    self.value.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            _ => return false,
        }
        true
    }

    pub fn render(&self, f: &mut Frame, area: Rect, title: &str, focused: bool) {
        let border_style = if focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);
        let inner = block.inner(area);

        let before_cursor: String = self.value.chars().take(self.cursor).collect();
        let cursor_x = before_cursor.width() as u16;
        let scroll = cursor_x.saturating_sub(inner.width.saturating_sub(1));

        f.render_widget(
            Paragraph::new(self.value.as_str())
                .block(block)
                .scroll((0, scroll)),
            area,
        );

        if focused && inner.width > 0 && inner.height > 0 {
            f.set_cursor_position(Position::new(inner.x + cursor_x - scroll, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in text.chars() {
            input.handle_key(key(KeyCode::Char(c)));
        }
        input
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = typed("helo");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Char('l')));
        assert_eq!(input.value(), "hello");
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_chars() {
        let mut input = typed("björk");
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "bjrk");

        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "brk");
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut input = TextInput::default();
        let handled =
            input.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!handled);
        assert!(input.is_blank());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = typed("ab");
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Right));
        input.handle_key(key(KeyCode::Char('c')));
        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "abc");
    }
}

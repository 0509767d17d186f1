use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char('s'), _) => Some(AppMessage::ToggleSettings),
            (KeyCode::Tab, _) => Some(AppMessage::NextTab),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousTab),
            (KeyCode::Char('1'), _) => Some(AppMessage::SelectTab(0)),
            (KeyCode::Char('2'), _) => Some(AppMessage::SelectTab(1)),
            (KeyCode::Char('3'), _) => Some(AppMessage::SelectTab(2)),
            (KeyCode::Char('4'), _) => Some(AppMessage::SelectTab(3)),
            (KeyCode::Char('5'), _) => Some(AppMessage::SelectTab(4)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_select_tabs() {
        for (c, index) in ['1', '2', '3', '4', '5'].into_iter().zip(0..) {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(InputHandler::handle_key(key), Some(AppMessage::SelectTab(index)));
        }
    }

    #[test]
    fn list_keys_are_left_to_views() {
        for c in ['p', 'r', 'w', 'j', 'k'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            assert_eq!(InputHandler::handle_key(key), None);
        }
    }
}

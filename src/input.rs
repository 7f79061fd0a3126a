//! Keyboard mapping for the terminal front end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use flappy::{FlappyDifficulty, FlappyInput};

/// What a key press means to the terminal loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(FlappyInput),
    Quit,
}

/// Translate a key event. Releases and unbound keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    let action = match key.code {
        KeyCode::Char(' ') | KeyCode::Up => KeyAction::Game(FlappyInput::Flap),
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            KeyAction::Game(FlappyInput::Start)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(FlappyInput::Restart),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            KeyAction::Game(FlappyInput::SelectDifficulty(
                FlappyDifficulty::from_index(index),
            ))
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

//! Keyboard and mouse mapping.

use crate::games::tictactoe::Position;
use crate::view::Intent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::ui::HitMap;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an intent to the game.
    Intent(Intent),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::Intent(Intent::NewGame)),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let digit = c.to_digit(10)? as usize;
            let pos = Position::from_index(digit.checked_sub(1)?)?;
            Some(Action::Intent(Intent::Play(pos)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::Cursor(code))
        }
        _ => None,
    }
}

/// Maps a left click to the intent of whatever lies under it.
pub fn map_mouse(mouse: MouseEvent, hits: &HitMap) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hits.intent_at(mouse.column, mouse.row),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

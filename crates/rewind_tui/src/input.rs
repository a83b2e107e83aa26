//! Keyboard mapping.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Move the history selection by this many rows.
    Select(isize),
    /// Place at the cursor or jump to the selected entry.
    Activate,
    /// Place directly on a cell (0-8).
    Place(usize),
    /// Jump one snapshot back.
    StepBack,
    /// Jump one snapshot forward.
    StepForward,
    /// Switch panes.
    ToggleFocus,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action given the focused pane.
pub fn action_for(key: KeyCode, focus: Focus) -> Option<Action> {
    match (key, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Char('r'), _) => Some(Action::Restart),
        (KeyCode::Tab, _) => Some(Action::ToggleFocus),
        (KeyCode::Char('['), _) => Some(Action::StepBack),
        (KeyCode::Char(']'), _) => Some(Action::StepForward),
        (KeyCode::Enter | KeyCode::Char(' '), _) => Some(Action::Activate),
        (KeyCode::Char(c @ '1'..='9'), _) => {
            c.to_digit(10).map(|d| Action::Place(d as usize - 1))
        }
        (KeyCode::Up, Focus::History) => Some(Action::Select(-1)),
        (KeyCode::Down, Focus::History) => Some(Action::Select(1)),
        (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right, Focus::Board) => {
            Some(Action::Cursor(key))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1'), Focus::Board), Some(Action::Place(0)));
        assert_eq!(action_for(KeyCode::Char('9'), Focus::History), Some(Action::Place(8)));
        assert_eq!(action_for(KeyCode::Char('0'), Focus::Board), None);
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            action_for(KeyCode::Up, Focus::Board),
            Some(Action::Cursor(KeyCode::Up))
        );
        assert_eq!(action_for(KeyCode::Up, Focus::History), Some(Action::Select(-1)));
        assert_eq!(action_for(KeyCode::Left, Focus::History), None);
    }
}

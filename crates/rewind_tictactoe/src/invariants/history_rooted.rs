//! History rooted invariant: snapshot 0 is the empty board.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: History is non-empty and starts from the empty board.
pub struct HistoryRootedInvariant;

impl Invariant<GameSession> for HistoryRootedInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(HistoryRootedInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_after_rewinding_to_start_and_playing() {
        let mut session = GameSession::new();
        session.select_cell(0);
        session.select_history_entry(0);
        session.select_cell(8);
        assert!(HistoryRootedInvariant::holds(&session));
    }

    #[test]
    fn test_marked_root_violates() {
        let root = Board::new().with_mark(Position::Center, Player::X);
        let session = GameSession::from_raw_parts(vec![root], 0);
        assert!(!HistoryRootedInvariant::holds(&session));
    }
}

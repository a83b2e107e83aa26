//! Game session: history of snapshots plus a movable pointer into it.

use super::action::{JumpError, Move, MoveError};
use super::history::History;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::view::MoveEntry;
use super::{Board, GameStatus, Player, Position, rules};
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe with time travel.
///
/// The session exclusively owns the history and the current pointer. Whose
/// turn it is is never stored; it is derived from the pointer's parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: History,
    current: usize,
}

impl GameSession {
    /// Creates a session at the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating new game session");
        Self {
            history: History::new(),
            current: 0,
        }
    }

    /// Builds a session from arbitrary parts without validation.
    #[cfg(test)]
    pub(crate) fn from_raw_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self {
            history: History::from_snapshots(snapshots),
            current,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the turn owner's mark at `position` on the current snapshot.
    ///
    /// Any snapshots after the current pointer are discarded before the new
    /// one is appended, and the pointer moves to the new last snapshot.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the current snapshot already has a winner.
    /// - `MoveError::SquareOccupied` if the target square is taken.
    ///
    /// The session is untouched when an error is returned.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn apply_move(&mut self, position: Position) -> Result<Move, MoveError> {
        let board = *self.current_board();

        if let Some(winner) = rules::check_winner(&board) {
            return Err(MoveError::GameOver(winner));
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.turn_owner();
        let next = board.with_mark(position, player);

        self.history.truncate_after(self.current);
        self.current = self.history.push(next);

        info!(player = %player, position = %position, ply = self.current, "Move applied");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(Move::new(player, position))
    }

    /// Moves the pointer to snapshot `index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns `JumpError::OutOfRange` if no such snapshot exists; the
    /// pointer is left where it was.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.history.len() {
            return Err(JumpError::OutOfRange {
                requested: index,
                len: self.history.len(),
            });
        }

        self.current = index;
        debug!(index, "Jumped to snapshot");
        Ok(())
    }

    /// Handles a click on a board cell.
    ///
    /// Illegal moves, including indices outside 0-8, are ignored.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) {
        let result = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|position| self.apply_move(position));

        if let Err(e) = result {
            debug!(error = %e, "Ignoring illegal move");
        }
    }

    /// Handles a click on a move-list entry.
    ///
    /// A caller asking for a snapshot that was never offered is logged and
    /// otherwise ignored.
    #[instrument(skip(self))]
    pub fn select_history_entry(&mut self, index: usize) {
        if let Err(e) = self.jump_to(index) {
            warn!(error = %e, "Ignoring jump to unknown snapshot");
        }
    }

    /// Jumps one snapshot back. Returns whether the pointer moved.
    pub fn step_back(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.jump_to(index).is_ok(),
            None => false,
        }
    }

    /// Jumps one snapshot forward. Returns whether the pointer moved.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.current + 1).is_ok()
    }

    /// Starts over from the empty board, discarding all history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "Resetting game session");
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Snapshot at the current pointer.
    pub fn current_board(&self) -> &Board {
        self.history.get(self.current).unwrap_or_else(|| self.history.latest())
    }

    /// Index of the current snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// All snapshots, including any reachable "future" ones.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True if the pointer is at the newest snapshot.
    pub fn is_latest(&self) -> bool {
        self.current == self.history.last_index()
    }

    /// The player who moves from the current snapshot.
    pub fn turn_owner(&self) -> Player {
        Player::for_ply(self.current)
    }

    /// Winner on the current snapshot, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Winning line on the current snapshot, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_board())
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.turn_owner(),
            }
        }
    }

    /// The move that produced each snapshot after the first, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .as_slice()
            .windows(2)
            .enumerate()
            .filter_map(|(ply, pair)| {
                Position::ALL
                    .into_iter()
                    .find(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                    .map(|pos| Move::new(Player::for_ply(ply), pos))
            })
            .collect()
    }

    /// One navigable entry per snapshot.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let moves = self.moves();
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                played: index.checked_sub(1).and_then(|i| moves.get(i).copied()),
                is_current: index == self.current,
            })
            .collect()
    }

    /// Checks every session invariant.
    ///
    /// # Errors
    ///
    /// Returns the list of violated invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self)
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        let result = self.check_invariants();
        if let Err(violations) = &result {
            warn!(?violations, "Session invariants violated");
        }
        debug_assert!(result.is_ok(), "Session invariants violated: {:?}", result);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(session: &mut GameSession, cells: &[usize]) {
        for &cell in cells {
            let position = Position::from_index(cell).unwrap();
            session.apply_move(position).unwrap();
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_board(), &Board::new());
        assert_eq!(session.turn_owner(), Player::X);
        assert_eq!(session.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_apply_move_appends_and_advances() {
        let mut session = GameSession::new();
        let mv = session.apply_move(Position::Center).unwrap();

        assert_eq!(mv, Move::new(Player::X, Position::Center));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.turn_owner(), Player::O);
        assert_eq!(session.history().get(0), Some(&Board::new()));
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut session = GameSession::new();
        play(&mut session, &[4]);
        let before = session.clone();

        assert_eq!(
            session.apply_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 1, 3, 2]);
        let before = session.clone();

        assert_eq!(session.winner(), Some(Player::X));
        assert_eq!(
            session.apply_move(Position::MiddleRight),
            Err(MoveError::GameOver(Player::X))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_select_cell_ignores_out_of_bounds() {
        let mut session = GameSession::new();
        session.select_cell(9);
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_jump_keeps_future() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 1]);

        session.jump_to(1).unwrap();
        assert_eq!(session.history().len(), 4);
        assert_eq!(session.turn_owner(), Player::O);
        assert!(!session.is_latest());

        session.jump_to(3).unwrap();
        assert!(session.is_latest());
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut session = GameSession::new();
        play(&mut session, &[0]);

        assert_eq!(
            session.jump_to(2),
            Err(JumpError::OutOfRange {
                requested: 2,
                len: 2
            })
        );
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_move_after_jump_discards_future() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 1, 3]);

        session.jump_to(1).unwrap();
        let mv = session.apply_move(Position::BottomRight).unwrap();

        assert_eq!(mv.player, Player::O);
        assert_eq!(session.history().len(), 3);
        assert_eq!(session.current_index(), 2);
        assert_eq!(
            session.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        assert!(session.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_away_from_won_position_allows_play() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 1, 3, 2]);

        session.jump_to(4).unwrap();
        assert_eq!(session.winner(), None);
        assert!(session.apply_move(Position::MiddleRight).is_ok());
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4]);

        assert!(!session.step_forward());
        assert!(session.step_back());
        assert!(session.step_back());
        assert!(!session.step_back());
        assert_eq!(session.current_index(), 0);
        assert!(session.step_forward());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_reset() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 8]);
        session.reset();
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_draw_status() {
        let mut session = GameSession::new();
        // X O X / X O O / O X X
        play(&mut session, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(session.winner(), None);
        assert_eq!(session.status(), GameStatus::Draw);
        assert!(rules::is_draw(session.current_board()));
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let mut session = GameSession::new();
        // X O X / O X O / O X X, X completes the diagonal with the ninth mark
        play(&mut session, &[0, 1, 2, 3, 7, 5, 4, 6, 8]);
        assert!(rules::is_full(session.current_board()));
        assert!(!rules::is_draw(session.current_board()));
        assert_eq!(session.status(), GameStatus::Won(Player::X));
        assert!(session.status().is_over());
    }

    #[test]
    fn test_moves_are_derived_from_snapshots() {
        let mut session = GameSession::new();
        play(&mut session, &[4, 0]);
        assert_eq!(
            session.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
    }

    #[test]
    fn test_move_list_marks_current() {
        let mut session = GameSession::new();
        play(&mut session, &[4, 0]);
        session.jump_to(1).unwrap();

        let entries = session.move_list();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].played, None);
        assert_eq!(entries[2].played, Some(Move::new(Player::O, Position::TopLeft)));
        let current: Vec<_> = entries.iter().filter(|e| e.is_current).map(|e| e.index).collect();
        assert_eq!(current, vec![1]);
    }
}

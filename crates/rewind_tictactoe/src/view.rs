//! What a front end may see of a session, and what it may ask of one.

use super::session::GameSession;
use super::{Board, GameStatus, Move, Position};
use serde::Serialize;

/// One row of the navigable move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Snapshot index this entry jumps to.
    pub index: usize,
    /// The move that produced the snapshot; `None` for the starting board.
    pub played: Option<Move>,
    /// True if this is the snapshot currently shown.
    pub is_current: bool,
}

impl MoveEntry {
    /// Button text for this entry.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status line text.
impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(winner) => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Everything a front end is allowed to do with a game.
///
/// Reads return fresh values; the only writes are the two user intents.
/// Front ends never compute winners or touch history themselves.
pub trait GameController {
    /// Board to render.
    fn board(&self) -> Board;

    /// Status for the status line.
    fn status(&self) -> GameStatus;

    /// Complete line to highlight, if the shown board has one.
    fn winning_line(&self) -> Option<[Position; 3]>;

    /// Navigable history entries, oldest first.
    fn move_list(&self) -> Vec<MoveEntry>;

    /// User clicked cell `index` (0-8). Illegal clicks are ignored.
    fn select_cell(&mut self, index: usize);

    /// User picked history entry `index`.
    fn select_history_entry(&mut self, index: usize);
}

impl GameController for GameSession {
    fn board(&self) -> Board {
        *self.current_board()
    }

    fn status(&self) -> GameStatus {
        GameSession::status(self)
    }

    fn winning_line(&self) -> Option<[Position; 3]> {
        GameSession::winning_line(self)
    }

    fn move_list(&self) -> Vec<MoveEntry> {
        GameSession::move_list(self)
    }

    fn select_cell(&mut self, index: usize) {
        GameSession::select_cell(self, index);
    }

    fn select_history_entry(&mut self, index: usize) {
        GameSession::select_history_entry(self, index);
    }
}

/// Serializable picture of what a front end currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Current board.
    pub board: Board,
    /// Current status.
    pub status: GameStatus,
    /// Status line text.
    pub status_line: String,
    /// Move list entries.
    pub moves: Vec<MoveEntry>,
}

impl SessionView {
    /// Reads everything visible through a controller.
    pub fn capture(controller: &impl GameController) -> Self {
        let status = controller.status();
        Self {
            board: controller.board(),
            status,
            status_line: status.to_string(),
            moves: controller.move_list(),
        }
    }
}

//! Tic-tac-toe with time travel.
//!
//! A [`GameSession`] keeps every board snapshot of the game and a pointer to
//! the one being shown. Players can jump to any earlier snapshot and resume
//! from there; playing a move from the past discards the snapshots that
//! followed it.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one [`Board`] (win and draw detection)
//! - **Session**: history, pointer and the move/jump operations
//! - **View**: the [`GameController`] boundary front ends are written against
//! - **Invariants**: properties checked after every session mutation
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Player, Position};
//!
//! let mut game = GameSession::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
//!     game.apply_move(pos).unwrap();
//! }
//! game.jump_to(1).unwrap();
//! assert_eq!(game.turn_owner(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use action::{JumpError, Move, MoveError};
pub use history::History;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
pub use position::Position;
pub use session::GameSession;
pub use types::{Board, GameStatus, Player, Square};
pub use view::{GameController, MoveEntry, SessionView};

//! Pointer invariant: the current index names an existing snapshot.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `0 <= current < history.len()`.
pub struct PointerInBoundsInvariant;

impl Invariant<GameSession> for PointerInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.current_index() < session.history().len()
    }

    fn description() -> &'static str {
        "Current pointer indexes an existing snapshot"
    }
}

//! Snapshot progression invariant: each snapshot is its predecessor plus one legal mark.

use super::super::{GameSession, Player, Square, rules};
use super::Invariant;

/// Invariant: Snapshot `k` equals snapshot `k - 1` with exactly one
/// previously empty square now holding the mark of `Player::for_ply(k - 1)`,
/// and no snapshot follows one that already has a winner.
///
/// This is what makes turn ownership derivable from the pointer alone.
pub struct SnapshotProgressionInvariant;

impl Invariant<GameSession> for SnapshotProgressionInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .as_slice()
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                if rules::check_winner(before).is_some() {
                    return false;
                }
                let mut changed = before
                    .squares()
                    .iter()
                    .zip(after.squares())
                    .filter(|(b, a)| b != a);
                match (changed.next(), changed.next()) {
                    (Some((Square::Empty, Square::Occupied(player))), None) => {
                        *player == Player::for_ply(ply)
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}

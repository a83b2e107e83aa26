//! Non-interactive play: run scripted clicks and describe the result.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameSession, SessionView};
use tracing::{info, instrument};

/// Plays `cells` in order, optionally jumps, and returns what a front end would show.
///
/// Illegal cells are ignored exactly as clicks would be.
#[instrument]
pub fn script(cells: &[usize], jump: Option<usize>) -> SessionView {
    let mut game = GameSession::new();
    for &cell in cells {
        game.select_cell(cell);
    }
    if let Some(index) = jump {
        game.select_history_entry(index);
    }
    info!(snapshots = game.history().len(), current = game.current_index(), "Script finished");
    SessionView::capture(&game)
}

/// Renders a view as plain text.
pub fn render_text(view: &SessionView) -> String {
    let mut out = String::new();
    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status_line);
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

/// Renders a view as pretty JSON.
pub fn render_json(view: &SessionView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize session view")
}

//! Application state and logic.

use crate::input::{Action, Focus, action_for, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameController, GameSession, MoveEntry, Position};
use tracing::{debug, instrument};

/// Main application state.
///
/// The app only talks to the game through [`GameController`]: it reads the
/// board, status and move list, and forwards cell and history selections.
pub struct App<C = GameSession> {
    game: C,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App<GameSession> {
    /// Creates a new application around a fresh session.
    pub fn new() -> Self {
        Self::with_controller(GameSession::new())
    }
}

impl Default for App<GameSession> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: GameController + Default> App<C> {
    /// Creates an application around an existing controller.
    pub fn with_controller(game: C) -> Self {
        let selected = current_entry(&game.move_list());
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &C {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(key, self.focus) {
            self.apply(action);
        }
    }

    /// Performs an action.
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Applying action");
        match action {
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Select(delta) => {
                let last = self.game.move_list().len().saturating_sub(1);
                self.selected = self.selected.saturating_add_signed(delta).min(last);
            }
            Action::Activate => match self.focus {
                Focus::Board => self.place(self.cursor.to_index()),
                Focus::History => self.jump(self.selected),
            },
            Action::Place(index) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                self.place(index);
            }
            Action::StepBack => {
                let current = current_entry(&self.game.move_list());
                if let Some(index) = current.checked_sub(1) {
                    self.jump(index);
                }
            }
            Action::StepForward => {
                let entries = self.game.move_list();
                let next = current_entry(&entries) + 1;
                if next < entries.len() {
                    self.jump(next);
                }
            }
            Action::ToggleFocus => self.focus = self.focus.toggle(),
            Action::Restart => {
                debug!("Restarting game");
                self.game = C::default();
                self.sync_selection();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, index: usize) {
        self.game.select_cell(index);
        self.sync_selection();
    }

    fn jump(&mut self, index: usize) {
        self.game.select_history_entry(index);
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selected = current_entry(&self.game.move_list());
    }
}

fn current_entry(entries: &[MoveEntry]) -> usize {
    entries
        .iter()
        .position(|entry| entry.is_current)
        .unwrap_or(0)
}

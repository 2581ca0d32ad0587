//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! board storage so the game state machine and the view can both
//! recompute the outcome on demand.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};

use super::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line completed and empty squares remain.
    InProgress,
    /// A mark completed a line.
    Win(Mark, Line),
    /// Board full with no completed line.
    Draw,
}

impl GameOutcome {
    /// Returns true while moves may still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark, _) => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameOutcome::Win(_, line) => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// Lines are checked rows first, then columns, then diagonals; the
/// first completed line is reported. A full board without a line is a
/// draw.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((mark, line)) = check_winner(board) {
        GameOutcome::Win(mark, line)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

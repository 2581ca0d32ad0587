//! Turn-taking state machine for tic-tac-toe.

use super::action::MoveError;
use super::contracts::BoardConsistent;
use super::rules::{GameOutcome, evaluate};
use super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Applies a move to a board without mutating it.
///
/// Returns the new board and the mark to move next. The move is
/// rejected when the game is already decided or the square is taken.
#[instrument(level = "debug", fields(board = %board))]
pub fn apply_move(board: &Board, turn: Mark, pos: Position) -> Result<(Board, Mark), MoveError> {
    if !evaluate(board).is_in_progress() {
        return Err(MoveError::GameOver);
    }
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }

    let mut next = *board;
    next.set(pos, Square::Occupied(turn));
    Ok((next, turn.opponent()))
}

/// Complete game state: the board and whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Mark,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Recomputes the outcome from the board.
    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// Places the current mark at `pos`.
    ///
    /// Returns the outcome after the move. On rejection nothing changes.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, pos: Position) -> Result<GameOutcome, MoveError> {
        let (board, turn) = apply_move(&self.board, self.turn, pos)?;
        self.board = board;
        self.turn = turn;
        debug_assert!(
            BoardConsistent::holds(&self.board),
            "Board consistency violated"
        );

        let outcome = self.outcome();
        debug!(board = %self.board, ?outcome, "Move applied");
        if let GameOutcome::Win(mark, line) = outcome {
            info!(%mark, line = ?line.indices(), "Game won");
        } else if outcome == GameOutcome::Draw {
            info!("Game drawn");
        }
        Ok(outcome)
    }

    /// Places the current mark at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Discards the current game and starts over with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

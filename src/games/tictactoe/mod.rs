//! Tic-tac-toe rules and state.

mod action;
mod contracts;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use contracts::BoardConsistent;
pub use game::{GameState, apply_move};
pub use position::Position;
pub use rules::{GameOutcome, LINES, Line, evaluate};
pub use types::{Board, Mark, Square};

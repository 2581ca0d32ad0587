//! Presentation model for the game.
//!
//! Turns a [`GameState`] into plain values describing what to show
//! (cells, status, legend) and turns user intents back into moves.
//! Nothing here depends on a particular UI toolkit.

use crate::games::tictactoe::{GameOutcome, GameState, Mark, MoveError, Position};
use tracing::{debug, instrument};

/// Page title.
pub const TITLE: &str = "Tic Tac Toe";
/// Subtitle under the title.
pub const SUBTITLE: &str = "Two players, one device. Take turns and win!";
/// Accessible name of the board grid.
pub const BOARD_LABEL: &str = "Tic Tac Toe board";
/// Hint shown next to the status while the game is running.
pub const STATUS_HINT: &str = "First to align 3 wins.";
/// Label of the reset control.
pub const NEW_GAME_LABEL: &str = "New game";
/// Player legend entries.
pub const LEGEND: [(Mark, &str); 2] = [(Mark::X, "Player X"), (Mark::O, "Player O")];
/// Footer text.
pub const FOOTER: &str = "Local play only";

/// A request coming from the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place the current mark on a cell.
    Play(Position),
    /// Discard the current game and start over.
    NewGame,
}

/// How a single cell should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Where the cell sits.
    pub position: Position,
    /// The mark in the cell, if any.
    pub mark: Option<Mark>,
    /// Cell accepts no input.
    pub disabled: bool,
    /// Cell belongs to the winning line.
    pub winning: bool,
}

impl CellView {
    /// Visible symbol: the mark, or nothing.
    pub fn symbol(&self) -> &'static str {
        match self.mark {
            Some(Mark::X) => "X",
            Some(Mark::O) => "O",
            None => "",
        }
    }

    /// Label for assistive technology.
    pub fn accessible_label(&self) -> String {
        match self.mark {
            Some(mark) => format!("Square {}", mark),
            None => "Empty square".to_string(),
        }
    }
}

/// Status line contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    /// Main status text.
    pub text: String,
    /// Secondary hint, only while the game is running.
    pub hint: Option<&'static str>,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// The nine cells in row-major order.
    pub cells: [CellView; 9],
    /// Status line.
    pub status: StatusView,
    /// Whether the whole board is locked.
    pub board_disabled: bool,
}

impl GameView {
    /// Builds the view for `state`.
    #[instrument(level = "trace", skip(state))]
    pub fn from_state(state: &GameState) -> Self {
        let outcome = state.outcome();
        Self {
            cells: cell_views(state),
            status: status_view(&outcome, state.turn()),
            board_disabled: !outcome.is_in_progress(),
        }
    }

    /// Returns the view of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.to_index()]
    }
}

/// Status text for an outcome and the mark about to move.
pub fn status_text(outcome: &GameOutcome, turn: Mark) -> String {
    match outcome {
        GameOutcome::Win(mark, _) => format!("Winner: Player {}", mark),
        GameOutcome::Draw => "Draw game — no more moves.".to_string(),
        GameOutcome::InProgress => format!("Turn: Player {}", turn),
    }
}

/// Status text plus hint.
pub fn status_view(outcome: &GameOutcome, turn: Mark) -> StatusView {
    StatusView {
        text: status_text(outcome, turn),
        hint: outcome.is_in_progress().then_some(STATUS_HINT),
    }
}

/// Cell views for every position.
pub fn cell_views(state: &GameState) -> [CellView; 9] {
    let outcome = state.outcome();
    let line = outcome.winning_line();
    let locked = !outcome.is_in_progress();

    Position::ALL.map(|position| {
        let mark = state.board().get(position).mark();
        CellView {
            position,
            mark,
            disabled: locked || mark.is_some(),
            winning: line.is_some_and(|l| l.contains(position)),
        }
    })
}

/// Applies an intent to the game.
///
/// Play intents on disabled cells are dropped before reaching the game.
/// Returns true if the state changed.
#[instrument(skip(state))]
pub fn dispatch(state: &mut GameState, intent: Intent) -> bool {
    match intent {
        Intent::Play(pos) => {
            let cells = cell_views(state);
            if cells[pos.to_index()].disabled {
                debug!(%pos, "Ignoring play on disabled cell");
                return false;
            }
            match state.play(pos) {
                Ok(_) => true,
                Err(e) => {
                    log_rejection(e);
                    false
                }
            }
        }
        Intent::NewGame => {
            state.reset();
            true
        }
    }
}

fn log_rejection(err: MoveError) {
    debug!(error = %err, "Move rejected");
}

/// Tracks the last announced status so changes are reported once.
#[derive(Debug, Clone, Default)]
pub struct StatusAnnouncer {
    last: Option<String>,
}

impl StatusAnnouncer {
    /// Creates an announcer that has announced nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `Some(text)` if `text` differs from the last announcement.
    pub fn announce(&mut self, text: &str) -> Option<&str> {
        if self.last.as_deref() == Some(text) {
            return None;
        }
        self.last = Some(text.to_string());
        self.last.as_deref()
    }
}

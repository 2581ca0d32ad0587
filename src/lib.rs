//! Tic Tac Toe - two players, one terminal.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a 3x3 board
//! - **GameState**: board plus turn, move application and reset
//! - **View**: toolkit-independent presentation model and intents
//! - **TUI**: ratatui rendering, keyboard/mouse input, event loop
//!
//! # Example
//!
//! ```
//! use tic_tac_toe::{GameOutcome, GameState, Mark, Position};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::MiddleLeft,
//!             Position::Center, Position::BottomLeft] {
//!     game.play(pos).unwrap();
//! }
//! assert_eq!(game.outcome().winner(), Some(Mark::X));
//! assert!(!matches!(game.outcome(), GameOutcome::InProgress));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod tui;
mod view;

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, BoardConsistent, GameOutcome, GameState, LINES, Line, Mark, MoveError, Position,
    Square, apply_move, evaluate,
};
pub use games::tictactoe::rules::{check_winner, is_full};

// Crate-level exports - View
pub use view::{
    BOARD_LABEL, CellView, FOOTER, GameView, Intent, LEGEND, NEW_GAME_LABEL, STATUS_HINT,
    SUBTITLE, StatusAnnouncer, StatusView, TITLE, cell_views, dispatch, status_text, status_view,
};

// Crate-level exports - Terminal front end
pub use tui::{Action, App, HitMap, draw, map_key, map_mouse, move_cursor, run as run_tui};

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

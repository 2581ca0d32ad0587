//! Application state and logic.

use crossterm::event::{Event, KeyEvent, MouseEvent};
use derive_getters::Getters;
use tracing::{debug, instrument};

use super::input::{self, Action};
use super::ui::HitMap;
use crate::games::tictactoe::{GameState, Position};
use crate::view::{GameView, Intent, StatusAnnouncer, dispatch};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    game: GameState,
    /// Cell under the keyboard cursor.
    cursor: Position,
    /// Show the hint under the status line.
    show_hint: bool,
    /// Set once the user asked to leave.
    should_quit: bool,
    #[getter(skip)]
    hits: HitMap,
    #[getter(skip)]
    announcer: StatusAnnouncer,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_hint: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            show_hint,
            should_quit: false,
            hits: HitMap::default(),
            announcer: StatusAnnouncer::new(),
        }
    }

    /// Builds the view of the current game.
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.game)
    }

    /// Stores the clickable areas of the last rendered frame.
    pub fn set_hits(&mut self, hits: HitMap) {
        self.hits = hits;
    }

    /// Returns the status text if it changed since the last call.
    pub fn take_announcement(&mut self) -> Option<String> {
        let text = self.view().status.text;
        self.announcer.announce(&text).map(str::to_string)
    }

    /// Handles a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            other => debug!(event = ?other, "Ignoring terminal event"),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = input::map_key(key) else {
            return;
        };

        match action {
            Action::Intent(intent) => {
                if let Intent::Play(pos) = intent {
                    self.cursor = pos;
                }
                self.apply(intent);
            }
            Action::PlayCursor => {
                self.apply(Intent::Play(self.cursor));
            }
            Action::Cursor(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Handles a mouse event using the last hit map.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let Some(intent) = input::map_mouse(mouse, &self.hits) {
            if let Intent::Play(pos) = intent {
                self.cursor = pos;
            }
            self.apply(intent);
        }
    }

    /// Applies an intent to the game. Returns true if the game changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let changed = dispatch(&mut self.game, intent);
        debug!(?intent, changed, board = %self.game.board(), "Intent applied");
        changed
    }
}

//! Board invariants checked after every accepted move.

use super::{Board, Mark};
use tracing::{instrument, warn};

/// Invariant: X moves first, so the X count leads the O count by 0 or 1.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true when the mark counts are consistent with alternating play.
    #[instrument(level = "trace", skip(board))]
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

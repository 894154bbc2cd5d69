use crate::types::Square;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the engine refused a move. The game state is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MoveRejected {
    /// Source and destination are the same square; callers treat this as a deselect.
    #[error("no move: source and destination are the same square")]
    NoOp,

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("Invalid move: would put your king in check!")]
    SelfCheck { from: Square, to: Square },

    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    #[error("the game is over; start a new game to keep playing")]
    GameOver,
}

impl MoveRejected {
    pub(crate) fn out_of_bounds(sq: Square) -> Self {
        MoveRejected::OutOfBounds {
            row: sq.row,
            col: sq.col,
        }
    }
}

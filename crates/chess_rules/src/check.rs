//! Check and checkmate analysis on arbitrary (possibly hypothetical) boards.

use crate::board::Board;
use crate::movement::can_reach;
use crate::types::*;

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True iff some piece of the other side can reach `side`'s king.
///
/// A board without a king for `side` is never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(king) = board.king_square(side) else {
        return false;
    };
    is_square_attacked(board, king, side.other())
}

/// Whether any piece of side `by` can move onto `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Side) -> bool {
    board
        .pieces()
        .any(|(from, pc)| pc.side == by && can_reach(board, from, target))
}

/// King-mobility-only checkmate test.
///
/// The side must be in check, and every neighbouring square the king could
/// step to (on the board, not occupied by its own side) must still be
/// attacked once the king stands there. Interposing a piece or capturing
/// the checker with another piece is not considered.
pub fn is_checkmate(board: &Board, side: Side) -> bool {
    is_in_check(board, side) && king_escape_squares(board, side).is_empty()
}

/// Squares the king of `side` could step to without being attacked.
/// Empty when the side has no king.
pub fn king_escape_squares(board: &Board, side: Side) -> Vec<Square> {
    let Some(king) = board.king_square(side) else {
        return Vec::new();
    };
    KING_STEPS
        .iter()
        .filter_map(|&(d_row, d_col)| king.offset(d_row, d_col))
        .filter(|&dest| !board.piece_at(dest).is_some_and(|pc| pc.side == side))
        .filter(|&dest| !is_in_check(&board.with_move(king, dest), side))
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;

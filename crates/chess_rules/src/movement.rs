//! Piece movement geometry.
//!
//! Everything here is a pure function of a board and two squares. None of it
//! knows whose turn it is or whether a move exposes the mover's king; those
//! checks are layered on top in [`crate::check`] and [`crate::engine`].

use crate::board::Board;
use crate::types::*;

/// Whether the piece on `from` can travel to `to` under its movement rules.
///
/// False when `from` is empty, either square is off the board, or `to`
/// holds a piece of the mover's own side (which also covers `from == to`).
/// This is the attack relation used for check detection.
pub fn can_reach(board: &Board, from: Square, to: Square) -> bool {
    if !from.is_on_board() || !to.is_on_board() {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if let Some(target) = board.piece_at(to)
        && target.side == piece.side
    {
        return false;
    }
    piece_rule(board, piece, from, to)
}

/// Dispatches on piece kind. Assumes `to` is not friendly-occupied.
pub fn piece_rule(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_rule(board, piece.side, from, to),
        PieceKind::Rook => rook_rule(board, from, to),
        PieceKind::Knight => knight_rule(from, to),
        PieceKind::Bishop => bishop_rule(board, from, to),
        PieceKind::Queen => rook_rule(board, from, to) || bishop_rule(board, from, to),
        PieceKind::King => king_rule(from, to),
    }
}

fn pawn_rule(board: &Board, side: Side, from: Square, to: Square) -> bool {
    let dir = side.forward();
    let target = board.piece_at(to);

    // Single step
    if from.col == to.col && to.row == from.row + dir {
        return target.is_none();
    }

    // Double step from the start rank, both squares empty
    if from.col == to.col && from.row == side.pawn_row() && to.row == from.row + 2 * dir {
        let middle = Square::at(from.row + dir, from.col);
        return target.is_none() && board.is_empty(middle);
    }

    // Diagonal capture
    if (from.col - to.col).abs() == 1 && to.row == from.row + dir {
        return target.is_some_and(|t| t.side != side);
    }

    false
}

fn rook_rule(board: &Board, from: Square, to: Square) -> bool {
    (from.row == to.row || from.col == to.col) && path_clear(board, from, to)
}

fn bishop_rule(board: &Board, from: Square, to: Square) -> bool {
    let row_diff = (to.row - from.row).abs();
    let col_diff = (to.col - from.col).abs();
    row_diff == col_diff && path_clear(board, from, to)
}

fn knight_rule(from: Square, to: Square) -> bool {
    let row_diff = (to.row - from.row).abs();
    let col_diff = (to.col - from.col).abs();
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}

fn king_rule(from: Square, to: Square) -> bool {
    (to.row - from.row).abs() <= 1 && (to.col - from.col).abs() <= 1
}

/// Squares strictly between `from` and `to` are all empty.
///
/// Callers must only pass squares on a shared row, column or diagonal;
/// other pairs are reported as blocked.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row - from.row).signum();
    let d_col = (to.col - from.col).signum();
    let aligned = from.row == to.row
        || from.col == to.col
        || (to.row - from.row).abs() == (to.col - from.col).abs();
    if !aligned {
        return false;
    }

    let mut cur = Square::at(from.row + d_row, from.col + d_col);
    while cur != to && cur.is_on_board() {
        if !board.is_empty(cur) {
            return false;
        }
        cur = Square::at(cur.row + d_row, cur.col + d_col);
    }
    true
}

#[cfg(test)]
#[path = "movement_tests.rs"]
mod movement_tests;

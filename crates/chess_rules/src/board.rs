use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// FEN piece placement of the standard starting position.
pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("expected 8 rows separated by '/', found {0}")]
    RowCount(usize),
    #[error("invalid piece character '{ch}' in row {row}")]
    BadPiece { row: usize, ch: char },
    #[error("row {row} describes {cols} columns, expected 8")]
    RowWidth { row: usize, cols: usize },
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position: black on rows 0-1, white on rows 6-7.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for side in [Side::White, Side::Black] {
            let back = side.back_row() as usize;
            let pawns = side.pawn_row() as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                b.squares[back][col] = Some(Piece { kind, side });
                b.squares[pawns][col] = Some(Piece {
                    kind: PieceKind::Pawn,
                    side,
                });
            }
        }
        b
    }

    /// Parses a FEN piece-placement field. The first row listed is row 0.
    pub fn from_placement(placement: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;
            for ch in row_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_fen_char(ch).ok_or(BoardParseError::BadPiece { row, ch })?;
                    if col < 8 {
                        board.squares[row][col] = Some(pc);
                    }
                    col += 1;
                }
                if col > 8 {
                    return Err(BoardParseError::RowWidth { row, cols: col });
                }
            }
            if col != 8 {
                return Err(BoardParseError::RowWidth { row, cols: col });
            }
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_placement`].
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (row, cells) in self.squares.iter().enumerate() {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }

    /// Piece on `sq`; off-board squares read as empty.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.squares[sq.row as usize][sq.col as usize]
    }

    /// Places (or clears) a square. Off-board squares are ignored.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if sq.is_on_board() {
            self.squares[sq.row as usize][sq.col as usize] = pc;
        }
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Copy of the board with the piece on `from` relocated to `to`,
    /// overwriting whatever stood there.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        let moved = next.piece_at(from);
        next.set_piece(from, None);
        next.set_piece(to, moved);
        next
    }

    /// First king of `side` in row-major order.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.side == side && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, pc)| pc.side == side).count()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}

impl fmt::Display for Board {
    /// Plain grid, row 0 on top, `.` for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.squares {
            let line: String = cells
                .iter()
                .map(|c| c.map_or('.', Piece::fen_char))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row the side's pawns start on.
    pub fn pawn_row(self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row of the side's back rank.
    pub fn back_row(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'r' => Some(PieceKind::Rook),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn fen_char(self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Some(Piece { kind, side })
    }
}

/// A (row, column) coordinate. Row 0 is black's back rank, row 7 white's.
///
/// Coordinates coming from outside the engine are not trusted; use
/// [`Square::is_on_board`] or construct through [`Square::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        let s = Square { row, col };
        s.is_on_board().then_some(s)
    }

    /// Builds a square without bounds checking.
    pub const fn at(row: i8, col: i8) -> Square {
        Square { row, col }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Neighbouring square, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        Square::new(self.row + d_row, self.col + d_col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// File letter and rank digit, e.g. `e2` for (6, 4).
    pub fn name(self) -> String {
        let f = (b'a' + self.col as u8) as char;
        let r = (b'0' + (BOARD_SIZE - self.row) as u8) as char;
        format!("{f}{r}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}", self.name())
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareParseError {
    #[error("empty square name")]
    Empty,
    #[error("unrecognised square '{0}' (expected e.g. 'e2' or '6,4')")]
    Malformed(String),
    #[error("square '{0}' is off the board")]
    OffBoard(String),
}

impl FromStr for Square {
    type Err = SquareParseError;

    /// Accepts a file/rank name (`e2`) or a `row,col` pair (`6,4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SquareParseError::Empty);
        }

        if let Some((r, c)) = s.split_once(',') {
            let row: i8 = r
                .trim()
                .parse()
                .map_err(|_| SquareParseError::Malformed(s.to_string()))?;
            let col: i8 = c
                .trim()
                .parse()
                .map_err(|_| SquareParseError::Malformed(s.to_string()))?;
            return Square::new(row, col).ok_or_else(|| SquareParseError::OffBoard(s.to_string()));
        }

        let b = s.as_bytes();
        if b.len() != 2 || !b[0].is_ascii_alphabetic() || !b[1].is_ascii_digit() {
            return Err(SquareParseError::Malformed(s.to_string()));
        }
        let file = b[0].to_ascii_lowercase();
        let rank = b[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(SquareParseError::OffBoard(s.to_string()));
        }
        let col = (file - b'a') as i8;
        let row = BOARD_SIZE - (rank - b'0') as i8;
        Ok(Square { row, col })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

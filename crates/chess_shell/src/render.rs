//! Text rendering of boards and game notices.

use crate::config::{GlyphStyle, ShellConfig};
use crate::session::ClickResult;
use chess_rules::{Board, MoveRejected, Outcome, Piece, PieceKind, Side, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    pub glyphs: GlyphStyle,
    pub show_coordinates: bool,
}

impl From<&ShellConfig> for Renderer {
    fn from(config: &ShellConfig) -> Self {
        Self {
            glyphs: config.glyphs,
            show_coordinates: config.show_coordinates,
        }
    }
}

impl Renderer {
    pub fn glyph(&self, piece: Piece) -> char {
        match self.glyphs {
            GlyphStyle::Ascii => piece.fen_char(),
            GlyphStyle::Unicode => match (piece.side, piece.kind) {
                (Side::White, PieceKind::King) => '♔',
                (Side::White, PieceKind::Queen) => '♕',
                (Side::White, PieceKind::Rook) => '♖',
                (Side::White, PieceKind::Bishop) => '♗',
                (Side::White, PieceKind::Knight) => '♘',
                (Side::White, PieceKind::Pawn) => '♙',
                (Side::Black, PieceKind::King) => '♚',
                (Side::Black, PieceKind::Queen) => '♛',
                (Side::Black, PieceKind::Rook) => '♜',
                (Side::Black, PieceKind::Bishop) => '♝',
                (Side::Black, PieceKind::Knight) => '♞',
                (Side::Black, PieceKind::Pawn) => '♟',
            },
        }
    }

    /// Row 0 on top. The selected square is bracketed `[x]`, reachable
    /// destinations are parenthesised `(x)`.
    pub fn board(&self, board: &Board, selected: Option<Square>, destinations: &[Square]) -> String {
        let mut out = String::new();
        let files = "   a  b  c  d  e  f  g  h";
        if self.show_coordinates {
            out.push_str(files);
            out.push('\n');
        }

        for row in 0..8 {
            let rank = 8 - row;
            let mut line = String::new();
            if self.show_coordinates {
                line.push_str(&format!("{rank} "));
            }
            for col in 0..8 {
                let sq = Square::at(row, col);
                let glyph = board.piece_at(sq).map_or('.', |pc| self.glyph(pc));
                let (l, r) = if selected == Some(sq) {
                    ('[', ']')
                } else if destinations.contains(&sq) {
                    ('(', ')')
                } else {
                    (' ', ' ')
                };
                line.push(l);
                line.push(glyph);
                line.push(r);
            }
            if self.show_coordinates {
                line.push_str(&format!(" {rank}"));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        if self.show_coordinates {
            out.push_str(files);
            out.push('\n');
        }
        out
    }
}

/// Status banner for an outcome, if it deserves one.
pub fn outcome_notice(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Check(side) => Some(format!("{side} is in check!")),
        Outcome::Checkmate(winner) => Some(format!("{winner} wins by checkmate!")),
        Outcome::KingCaptured(winner) => Some(format!("{winner} wins by capturing the king!")),
    }
}

/// One-line description of a click for the transcript.
pub fn describe(result: &ClickResult) -> String {
    match result {
        ClickResult::Selected(sq) | ClickResult::Reselected(sq) => format!("Selected {sq}"),
        ClickResult::Deselected => "Selection cleared".to_string(),
        ClickResult::Moved {
            from,
            to,
            captured,
            ..
        } => match captured {
            Some(pc) => format!("{from} takes {to} ({:?})", pc.kind),
            None => format!("{from} to {to}"),
        },
        ClickResult::Rejected(MoveRejected::NoOp) => "Selection cleared".to_string(),
        ClickResult::Rejected(e) => e.to_string(),
        ClickResult::Ignored => "Select one of your own pieces".to_string(),
        ClickResult::Locked(outcome) => match outcome.winner() {
            Some(w) => format!("Game over, {w} won. Type 'new' to play again"),
            None => "Game over. Type 'new' to play again".to_string(),
        },
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

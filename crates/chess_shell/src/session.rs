//! Square-selection controller: turns a stream of clicked squares into moves.

use chess_rules::{GameState, MoveRejected, Outcome, Piece, RulesEngine, Square};
use tracing::debug;

/// What a click (or a direct move) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickResult {
    /// A friendly piece became the move source.
    Selected(Square),
    /// The selection moved to another friendly piece.
    Reselected(Square),
    /// The selected square was clicked again.
    Deselected,
    Moved {
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        outcome: Outcome,
    },
    /// The engine refused the move; state and selection are unchanged.
    Rejected(MoveRejected),
    /// Nothing selected and the click was not on a friendly piece.
    Ignored,
    /// The game has ended; only a new game unlocks the board.
    Locked(Outcome),
}

/// One game in progress plus the currently selected square.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: RulesEngine,
    selected: Option<Square>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            engine: RulesEngine::from_state(state),
            selected: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Destinations of the selected piece, for highlighting.
    pub fn highlighted(&self) -> Vec<Square> {
        self.selected
            .map(|from| self.engine.legal_destinations(from))
            .unwrap_or_default()
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        self.engine.legal_destinations(from)
    }

    pub fn click(&mut self, sq: Square) -> ClickResult {
        let state = self.engine.state();
        if state.is_over() {
            return ClickResult::Locked(state.outcome());
        }
        let friendly = state
            .piece_at(sq)
            .is_some_and(|pc| pc.side == state.side_to_move());

        match self.selected {
            None if friendly => {
                self.selected = Some(sq);
                ClickResult::Selected(sq)
            }
            None => ClickResult::Ignored,
            Some(sel) if sel == sq => {
                self.selected = None;
                ClickResult::Deselected
            }
            Some(_) if friendly => {
                self.selected = Some(sq);
                ClickResult::Reselected(sq)
            }
            Some(sel) => self.play(sel, sq),
        }
    }

    /// Plays `from -> to` directly. Clears the selection on success.
    pub fn play(&mut self, from: Square, to: Square) -> ClickResult {
        let before = self.engine.state();
        if before.is_over() {
            return ClickResult::Locked(before.outcome());
        }
        let piece = before.piece_at(from);
        let captured = before.piece_at(to);

        match self.engine.apply_move(from, to) {
            Ok(next) => {
                let outcome = next.outcome();
                self.selected = None;
                match piece {
                    Some(piece) => ClickResult::Moved {
                        from,
                        to,
                        piece,
                        captured,
                        outcome,
                    },
                    // apply_move only accepts moves of an existing piece
                    None => ClickResult::Ignored,
                }
            }
            Err(e) => {
                debug!(%from, %to, reason = %e, "move refused");
                ClickResult::Rejected(e)
            }
        }
    }

    pub fn new_game(&mut self) -> &GameState {
        self.selected = None;
        self.engine.reset()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

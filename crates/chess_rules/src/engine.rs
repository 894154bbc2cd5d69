//! Game state, move application and outcome classification.

use crate::board::Board;
use crate::check::{is_checkmate, is_in_check};
use crate::error::MoveRejected;
use crate::movement::can_reach;
use crate::types::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

/// Status of the game after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "side", rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    /// The given side is in check. Informational, play continues.
    Check(Side),
    /// The given side won by checkmate.
    Checkmate(Side),
    /// The given side won by capturing the opposing king.
    KingCaptured(Side),
}

impl Outcome {
    /// Checkmate and king capture end the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Checkmate(_) | Outcome::KingCaptured(_))
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Checkmate(s) | Outcome::KingCaptured(s) => Some(s),
            Outcome::Ongoing | Outcome::Check(_) => None,
        }
    }
}

/// Board, side to move and outcome. Replaced wholesale on every move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        initialize()
    }
}

impl GameState {
    /// State for an arbitrary position with `side_to_move` to play.
    ///
    /// The outcome is read off the position: checkmate for the other side if
    /// the mover is mated, check if merely attacked, otherwise ongoing. King
    /// capture cannot be inferred from a position and is never reported here.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let outcome = classify(&board, side_to_move, false);
        GameState {
            board,
            side_to_move,
            outcome,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn is_checkmate(&self, side: Side) -> bool {
        is_checkmate(&self.board, side)
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        is_in_check(&self.board, side)
    }
}

/// Standard starting position, white to move.
pub fn initialize() -> GameState {
    GameState {
        board: Board::standard(),
        side_to_move: Side::White,
        outcome: Outcome::Ongoing,
    }
}

/// Same as [`initialize`].
pub fn reset() -> GameState {
    initialize()
}

/// Movement legality for the side to move, without the self-check filter.
pub fn is_legal_move(state: &GameState, from: Square, to: Square) -> bool {
    match state.board.piece_at(from) {
        Some(pc) if pc.side == state.side_to_move => can_reach(&state.board, from, to),
        _ => false,
    }
}

/// Every destination [`apply_move`] would accept from `from`, row-major.
pub fn legal_destinations(state: &GameState, from: Square) -> Vec<Square> {
    if state.is_over() {
        return Vec::new();
    }
    Square::all()
        .filter(|&to| is_legal_move(state, from, to))
        .filter(|&to| !is_in_check(&state.board.with_move(from, to), state.side_to_move))
        .collect()
}

/// Validates and plays `from -> to`, returning the successor state.
pub fn apply_move(state: &GameState, from: Square, to: Square) -> Result<GameState, MoveRejected> {
    for sq in [from, to] {
        if !sq.is_on_board() {
            return Err(MoveRejected::out_of_bounds(sq));
        }
    }
    if state.is_over() {
        return Err(MoveRejected::GameOver);
    }
    if from == to {
        return Err(MoveRejected::NoOp);
    }
    if !is_legal_move(state, from, to) {
        return Err(MoveRejected::IllegalMove { from, to });
    }

    let mover = state.side_to_move;
    let next_board = state.board.with_move(from, to);
    if is_in_check(&next_board, mover) {
        return Err(MoveRejected::SelfCheck { from, to });
    }

    let captured_king = state
        .board
        .piece_at(to)
        .is_some_and(|pc| pc.kind == PieceKind::King);

    let next_side = mover.other();
    let outcome = classify(&next_board, next_side, captured_king);

    Ok(GameState {
        board: next_board,
        side_to_move: next_side,
        outcome,
    })
}

/// Outcome with `to_move` about to play. A king capture wins for the other
/// side regardless of what the position looks like.
fn classify(board: &Board, to_move: Side, captured_king: bool) -> Outcome {
    let last_mover = to_move.other();
    if captured_king {
        Outcome::KingCaptured(last_mover)
    } else if is_checkmate(board, to_move) {
        Outcome::Checkmate(last_mover)
    } else if is_in_check(board, to_move) {
        Outcome::Check(to_move)
    } else {
        Outcome::Ongoing
    }
}

/// Owns the single game in progress.
///
/// Callers only ever see `&GameState` or a cloned snapshot; the state
/// changes exclusively through [`RulesEngine::apply_move`] and
/// [`RulesEngine::reset`].
#[derive(Debug, Clone, Default)]
pub struct RulesEngine {
    state: GameState,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self {
            state: initialize(),
        }
    }

    /// Engine starting from an arbitrary position.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        is_legal_move(&self.state, from, to)
    }

    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.state, from)
    }

    pub fn is_checkmate(&self, side: Side) -> bool {
        self.state.is_checkmate(side)
    }

    #[instrument(level = "debug", skip(self), fields(side = %self.state.side_to_move))]
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<&GameState, MoveRejected> {
        let next = match apply_move(&self.state, from, to) {
            Ok(next) => next,
            Err(e) => {
                trace!(reason = %e, "move rejected");
                return Err(e);
            }
        };

        if let Some(captured) = self.state.board.piece_at(to) {
            debug!(%from, %to, ?captured, "capture");
        } else {
            debug!(%from, %to, "move");
        }

        match next.outcome {
            Outcome::Ongoing => {}
            Outcome::Check(side) => debug!(%side, "check"),
            Outcome::Checkmate(winner) => info!(%winner, "checkmate"),
            Outcome::KingCaptured(winner) => info!(%winner, "king captured"),
        }

        self.state = next;
        Ok(&self.state)
    }

    /// Back to the standard starting position.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> &GameState {
        self.state = reset();
        &self.state
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;

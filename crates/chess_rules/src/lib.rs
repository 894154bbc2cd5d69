//! Rules engine for two-player, same-screen chess.
//!
//! Decides move legality, produces successor positions and classifies the
//! game as ongoing, check, checkmate or king captured. Castling, en passant,
//! promotion and draw rules are not part of this rule set, and checkmate is
//! judged on the king's own escape squares only.

pub mod board;
pub mod check;
pub mod engine;
pub mod error;
pub mod movement;
pub mod types;

pub use board::*;
pub use check::*;
pub use engine::*;
pub use error::*;
pub use movement::*;
pub use types::*;

//! End-to-end games played through the public engine API.
//!
//! - Turn alternation and rejection behaviour
//! - Board diffs of accepted moves
//! - Short games ending in checkmate
//! - Reset after arbitrary play

use chess_rules::{
    Board, GameState, MoveRejected, Outcome, PieceKind, RulesEngine, Side, Square, initialize,
};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(engine: &mut RulesEngine, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        engine
            .apply_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{from}-{to} rejected: {e}"));
    }
}

/// Squares whose contents differ between two boards.
fn diff(a: &Board, b: &Board) -> Vec<Square> {
    Square::all()
        .filter(|&s| a.piece_at(s) != b.piece_at(s))
        .collect()
}

// =============================================================================
// Turn alternation
// =============================================================================

#[test]
fn test_turns_alternate_and_rejections_do_not_flip() {
    let mut engine = RulesEngine::new();
    let script = [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")];

    for (i, (from, to)) in script.iter().enumerate() {
        let expected_mover = if i % 2 == 0 { Side::White } else { Side::Black };
        assert_eq!(engine.side_to_move(), expected_mover);

        // Moving the opponent's piece is refused and keeps the turn
        let wrong = if expected_mover == Side::White { "a7" } else { "a2" };
        let wrong_to = if expected_mover == Side::White { "a6" } else { "a3" };
        assert!(matches!(
            engine.apply_move(sq(wrong), sq(wrong_to)),
            Err(MoveRejected::IllegalMove { .. })
        ));
        assert_eq!(engine.side_to_move(), expected_mover);

        engine.apply_move(sq(from), sq(to)).unwrap();
        assert_eq!(engine.side_to_move(), expected_mover.other());
    }
}

#[test]
fn test_noop_keeps_state() {
    let mut engine = RulesEngine::new();
    let before = engine.snapshot();
    assert_eq!(engine.apply_move(sq("e2"), sq("e2")), Err(MoveRejected::NoOp));
    assert_eq!(engine.state(), &before);
}

// =============================================================================
// Board diffs
// =============================================================================

#[test]
fn test_quiet_move_changes_two_squares() {
    let mut engine = RulesEngine::new();
    let before = engine.snapshot();
    let after = engine.apply_move(sq("g1"), sq("f3")).unwrap().clone();

    assert_eq!(diff(before.board(), after.board()), vec![sq("f3"), sq("g1")]);
    assert_eq!(after.piece_at(sq("g1")), None);
    assert_eq!(after.piece_at(sq("f3")), before.piece_at(sq("g1")));
}

#[test]
fn test_capture_replaces_target() {
    let mut engine = RulesEngine::new();
    play(&mut engine, &[("e2", "e4"), ("d7", "d5")]);
    let before = engine.snapshot();
    let after = engine.apply_move(sq("e4"), sq("d5")).unwrap().clone();

    assert_eq!(diff(before.board(), after.board()), vec![sq("d5"), sq("e4")]);
    assert_eq!(after.board().count(Side::Black), 15);
    assert_eq!(after.board().count(Side::White), 16);
    assert_eq!(
        after.piece_at(sq("d5")).map(|p| (p.kind, p.side)),
        Some((PieceKind::Pawn, Side::White))
    );
}

// =============================================================================
// Finished games
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut engine = RulesEngine::new();
    play(&mut engine, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    let state = engine.apply_move(sq("d8"), sq("h4")).unwrap();
    assert_eq!(state.outcome(), Outcome::Checkmate(Side::Black));

    // Game is locked until reset
    assert_eq!(
        engine.apply_move(sq("a2"), sq("a3")),
        Err(MoveRejected::GameOver)
    );
}

#[test]
fn test_king_mobility_only_mate_after_scholars_attack() {
    // Qxf7 with the bishop on c4: standard mate, and also mate here
    let mut engine = RulesEngine::new();
    play(
        &mut engine,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
        ],
    );
    let state = engine.apply_move(sq("h5"), sq("f7")).unwrap();
    assert_eq!(state.outcome(), Outcome::Checkmate(Side::White));
}

#[test]
fn test_check_that_can_be_blocked_is_reported_as_mate() {
    // Black king boxed in by its own pieces. The check along the b5-e8
    // diagonal could be blocked by ...c6 or ...Nd7, but only king squares count.
    let mut engine = RulesEngine::new();
    play(&mut engine, &[("e2", "e4"), ("d7", "d6"), ("d2", "d4")]);
    // Black plays a waiting move, then Bb5+ cannot be answered by the king
    play(&mut engine, &[("a7", "a6")]);
    let state = engine.apply_move(sq("f1"), sq("b5")).unwrap();
    assert_eq!(state.outcome(), Outcome::Checkmate(Side::White));
}

#[test]
fn test_escaping_check() {
    let mut engine = RulesEngine::new();
    play(
        &mut engine,
        &[("e2", "e4"), ("e7", "e5"), ("d1", "h5"), ("d7", "d6"), ("h5", "f7")],
    );
    assert_eq!(engine.outcome(), Outcome::Check(Side::Black));

    // Ignoring the check is refused
    assert!(matches!(
        engine.apply_move(sq("a7"), sq("a6")),
        Err(MoveRejected::SelfCheck { .. })
    ));
    // So is stepping to another attacked square
    assert!(matches!(
        engine.apply_move(sq("e8"), sq("e7")),
        Err(MoveRejected::SelfCheck { .. })
    ));
    assert_eq!(engine.side_to_move(), Side::Black);

    // Taking the unprotected queen is accepted
    let state = engine.apply_move(sq("e8"), sq("f7")).unwrap();
    assert_eq!(state.outcome(), Outcome::Ongoing);
    assert_eq!(state.board().count(Side::White), 15);
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = RulesEngine::new();
    play(
        &mut engine,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")],
    );
    assert_ne!(engine.state(), &initialize());

    engine.reset();
    assert_eq!(engine.state(), &initialize());
    assert_eq!(engine.state(), &GameState::default());
}

#[test]
fn test_reset_after_game_over() {
    let mut engine = RulesEngine::new();
    play(
        &mut engine,
        &[("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")],
    );
    assert!(engine.state().is_over());

    engine.reset();
    assert_eq!(engine.state(), &initialize());
    assert!(engine.apply_move(sq("e2"), sq("e4")).is_ok());
}

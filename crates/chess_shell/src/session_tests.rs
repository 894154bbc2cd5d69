use super::*;
use chess_rules::{Board, PieceKind, Side, initialize};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_select_and_move() {
    let mut s = Session::new();
    assert_eq!(s.click(sq("e2")), ClickResult::Selected(sq("e2")));
    assert_eq!(s.selected(), Some(sq("e2")));
    assert_eq!(s.highlighted(), vec![sq("e4"), sq("e3")]);

    let result = s.click(sq("e4"));
    assert_eq!(
        result,
        ClickResult::Moved {
            from: sq("e2"),
            to: sq("e4"),
            piece: Piece::new(PieceKind::Pawn, Side::White),
            captured: None,
            outcome: Outcome::Ongoing,
        }
    );
    assert_eq!(s.selected(), None);
    assert_eq!(s.state().side_to_move(), Side::Black);
}

#[test]
fn test_clicks_without_selection() {
    let mut s = Session::new();
    // Empty square and opponent piece do nothing
    assert_eq!(s.click(sq("e4")), ClickResult::Ignored);
    assert_eq!(s.click(sq("e7")), ClickResult::Ignored);
    assert_eq!(s.selected(), None);
    assert!(s.highlighted().is_empty());
}

#[test]
fn test_deselect_and_reselect() {
    let mut s = Session::new();
    s.click(sq("g1"));
    assert_eq!(s.click(sq("g1")), ClickResult::Deselected);
    assert_eq!(s.selected(), None);

    s.click(sq("g1"));
    assert_eq!(s.click(sq("b1")), ClickResult::Reselected(sq("b1")));
    assert_eq!(s.selected(), Some(sq("b1")));
    assert_eq!(s.highlighted(), vec![sq("a3"), sq("c3")]);
}

#[test]
fn test_rejected_move_keeps_selection_and_state() {
    let mut s = Session::new();
    let before = s.state().clone();
    s.click(sq("e2"));

    assert_eq!(
        s.click(sq("e5")),
        ClickResult::Rejected(MoveRejected::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert_eq!(s.selected(), Some(sq("e2")));
    assert_eq!(s.state(), &before);
}

#[test]
fn test_self_check_rejected_through_clicks() {
    let board = Board::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap();
    let mut s = Session::from_state(GameState::from_board(board, Side::White));
    s.click(sq("e2"));
    assert!(matches!(
        s.click(sq("d3")),
        ClickResult::Rejected(MoveRejected::SelfCheck { .. })
    ));
    assert_eq!(s.state().side_to_move(), Side::White);
}

#[test]
fn test_capture_reports_captured_piece() {
    let mut s = Session::new();
    s.play(sq("e2"), sq("e4"));
    s.play(sq("d7"), sq("d5"));
    let result = s.play(sq("e4"), sq("d5"));
    assert!(matches!(
        result,
        ClickResult::Moved {
            captured: Some(Piece {
                kind: PieceKind::Pawn,
                side: Side::Black
            }),
            ..
        }
    ));
}

#[test]
fn test_locked_after_checkmate_until_new_game() {
    let mut s = Session::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        s.play(sq(from), sq(to));
    }
    s.click(sq("d8"));
    let result = s.click(sq("h4"));
    assert!(matches!(
        result,
        ClickResult::Moved {
            outcome: Outcome::Checkmate(Side::Black),
            ..
        }
    ));

    assert_eq!(
        s.click(sq("a2")),
        ClickResult::Locked(Outcome::Checkmate(Side::Black))
    );
    assert_eq!(
        s.play(sq("a2"), sq("a3")),
        ClickResult::Locked(Outcome::Checkmate(Side::Black))
    );

    s.new_game();
    assert_eq!(s.state(), &initialize());
    assert_eq!(s.click(sq("a2")), ClickResult::Selected(sq("a2")));
}

#[test]
fn test_new_game_clears_selection() {
    let mut s = Session::new();
    s.click(sq("e2"));
    s.new_game();
    assert_eq!(s.selected(), None);
}

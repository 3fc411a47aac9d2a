//! Tests for slot token resolution.

use tictactoe_slots::{Board, Mark, Slot, SlotError};

#[test]
fn test_all_tokens_resolve_on_empty_board() {
    let board = Board::new();
    let expected = [
        ("ar", (0, 0)),
        ("as", (0, 1)),
        ("at", (0, 2)),
        ("br", (1, 0)),
        ("bs", (1, 1)),
        ("bt", (1, 2)),
        ("cr", (2, 0)),
        ("cs", (2, 1)),
        ("ct", (2, 2)),
    ];
    for (token, coords) in expected {
        let resolved = board.resolve_slot(token).expect("empty slot resolves");
        assert_eq!(<(usize, usize)>::from(resolved), coords, "token {token}");
    }
}

#[test]
fn test_played_slot_is_occupied() {
    let mut board = Board::new();
    let coords = board.resolve_slot("bs").unwrap();
    board.apply_move(coords, Mark::X);

    assert_eq!(
        board.resolve_slot("bs"),
        Err(SlotError::SlotOccupied(Slot::Bs))
    );
    assert!(board.is_played(Slot::Bs));
    // Other slots are unaffected.
    assert!(board.resolve_slot("ar").is_ok());
}

#[test]
fn test_unknown_tokens_rejected() {
    let board = Board::new();
    for token in ["zz", "", "ar ", "AR", "a", "ars", "ra", "dr"] {
        assert_eq!(
            board.resolve_slot(token),
            Err(SlotError::UnknownSlot(token.to_string())),
            "token {token:?}"
        );
    }
}

#[test]
fn test_unknown_checked_before_occupied() {
    let mut board = Board::new();
    board.apply_move(Slot::Ar.coordinates(), Mark::O);
    assert!(matches!(
        board.resolve_slot("Ar"),
        Err(SlotError::UnknownSlot(_))
    ));
}

#[test]
fn test_resolve_does_not_modify_board() {
    let board = Board::new();
    let before = board.clone();
    let _ = board.resolve_slot("ct");
    let _ = board.resolve_slot("nope");
    assert_eq!(board, before);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SlotError::UnknownSlot("zz".into()).to_string(),
        "'zz' is not a valid move. Try again"
    );
    assert_eq!(
        SlotError::SlotOccupied(Slot::Cs).to_string(),
        "slot 'cs' has already been played, choose another one"
    );
}

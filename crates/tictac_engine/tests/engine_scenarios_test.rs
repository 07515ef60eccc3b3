//! End-to-end game scenarios against the public engine API.

use tictac_engine::{Board, Engine, Marker, MoveError, Phase, Placement, Position, Square, Status};

fn started() -> Engine {
    let mut engine = Engine::new();
    engine.start_game("", "");
    engine
}

#[test]
fn test_top_row_win() {
    let mut engine = started();
    for index in [0, 3, 1, 4] {
        assert!(engine.play_move(index).is_ok());
    }
    let placement = engine.play_move(2).expect("winning move accepted");

    assert!(matches!(placement, Placement::Won { winner: Marker::X, .. }));
    assert!(engine.is_over());
    assert_eq!(engine.phase(), Phase::Over);
    let winner = engine.winner().expect("winner set");
    assert_eq!(*winner.marker(), Marker::X);
    assert_eq!(winner.name(), "Player 1");
}

#[test]
fn test_full_board_tie() {
    let mut engine = started();
    let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for (i, index) in order.into_iter().enumerate() {
        let placement = engine.play_move(index).expect("legal move");
        if i < order.len() - 1 {
            assert!(matches!(placement, Placement::Continue { .. }));
        } else {
            assert_eq!(placement, Placement::Tie);
        }
    }

    assert!(engine.is_over());
    assert!(engine.winner().is_none());
    assert!(engine.check_tie());
    assert_eq!(engine.status(), Status::Tie);
    assert_eq!(engine.status().to_string(), "It's a tie!");
}

#[test]
fn test_repeat_square_rejected() {
    let mut engine = started();
    assert!(engine.play_move(4).is_ok());
    let mover = engine.current_player().clone();

    assert_eq!(
        engine.play_move(4),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(engine.board().get(Position::Center), Square::Occupied(Marker::X));
    assert_eq!(engine.current_player(), &mover);
}

#[test]
fn test_move_before_start_has_no_effect() {
    let mut engine = Engine::new();
    assert!(engine.play_move(0).is_err());
    assert_eq!(engine.board(), &Board::new());
    assert!(!engine.is_started());
}

#[test]
fn test_players_alternate_until_over() {
    let mut engine = started();
    let mut expected = Marker::X;
    for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        assert_eq!(*engine.current_player().marker(), expected);
        match engine.play_move(index).expect("legal move") {
            Placement::Continue { next } => {
                assert_eq!(next, expected.opponent());
                expected = next;
            }
            Placement::Won { .. } | Placement::Tie => break,
        }
    }
    assert!(engine.is_over());
}

#[test]
fn test_error_messages() {
    let mut engine = Engine::new();
    assert_eq!(
        engine.play_move(0).unwrap_err().to_string(),
        "No move allowed: game is not started"
    );
    engine.start_game("Ada", "Grace");
    assert_eq!(
        engine.play_move(11).unwrap_err().to_string(),
        "Index 11 is off the board (expected 0-8)"
    );
    engine.play_move(0).unwrap();
    assert_eq!(
        engine.play_move(0).unwrap_err().to_string(),
        "Top-left is already taken"
    );
}

#[test]
fn test_start_again_renames_and_clears() {
    let mut engine = started();
    engine.play_move(0).unwrap();
    engine.start_game("Ada", "  ");

    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.players()[0].name(), "Ada");
    assert_eq!(engine.players()[1].name(), "Player 2");
    assert_eq!(engine.phase(), Phase::InProgress);
}

#[test]
fn test_reset_after_win_is_playable() {
    let mut engine = started();
    for index in [0, 3, 1, 4, 2] {
        engine.play_move(index).unwrap();
    }
    engine.reset_game();

    assert!(!engine.is_over());
    assert!(engine.winner().is_none());
    assert_eq!(*engine.current_player().marker(), Marker::X);
    assert!(engine.play_move(0).is_ok());
}

#[test]
fn test_start_after_win_is_in_progress() {
    let mut engine = started();
    for index in [0, 3, 1, 4, 2] {
        engine.play_move(index).unwrap();
    }
    engine.start_game("Ada", "Grace");

    assert!(engine.is_started());
    assert!(!engine.is_over());
    assert!(engine.winner().is_none());
    assert!(engine.history().is_empty());
    assert_eq!(engine.status().to_string(), "Ada's turn (X)");
}

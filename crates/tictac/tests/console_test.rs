//! Scripted console sessions.

use std::io::Cursor;
use tictac::{ConsoleSession, TictacConfig};
use tictac_engine::{Engine, Marker, Phase, Position, Square};

fn run_script(config: &TictacConfig, script: &str) -> (Engine, String) {
    let mut session = ConsoleSession::new(Engine::new(), Cursor::new(script.to_string()), Vec::new());
    session.run(config).expect("session runs");
    let engine = session.engine().clone();
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (engine, output)
}

fn named() -> TictacConfig {
    TictacConfig::default().with_overrides(Some("Ada".to_string()), Some("Grace".to_string()))
}

#[test]
fn test_prompts_for_missing_names() {
    let (engine, output) = run_script(&TictacConfig::default(), "Ada\n\nq\n");
    assert!(output.contains("Name for player 1 [Player 1]: "));
    assert!(output.contains("Name for player 2 [Player 2]: "));
    assert_eq!(engine.players()[0].name(), "Ada");
    assert_eq!(engine.players()[1].name(), "Player 2");
    assert!(output.contains("Ada's turn (X)"));
    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn test_configured_names_skip_prompts() {
    let (_, output) = run_script(&named(), "q\n");
    assert!(!output.contains("Name for player"));
    assert!(output.contains("Ada's turn (X)"));
}

#[test]
fn test_win_is_announced() {
    let (engine, output) = run_script(&named(), "1\n4\n2\n5\n3\nq\n");
    assert_eq!(engine.phase(), Phase::Over);
    assert_eq!(engine.winner().map(|p| *p.marker()), Some(Marker::X));
    assert!(output.contains("🎉 Ada (X) is the winner!"));
    assert!(output.contains("Ada wins!"));
    assert!(output.contains("Type r to play again or q to quit."));
}

#[test]
fn test_tie_is_announced() {
    let (engine, output) = run_script(&named(), "1\n2\n3\n5\n4\n6\n8\n7\n9\n");
    assert!(engine.check_tie());
    assert!(output.contains("😐 It's a tie! Good game!"));
    assert!(output.contains("It's a tie!"));
}

#[test]
fn test_rejected_moves_print_diagnostics() {
    let (engine, output) = run_script(&named(), "center\n5\n10\nwibble\nq\n");
    assert!(output.contains("Center is already taken. Try another square."));
    assert!(output.contains("Pick a square from 1 to 9."));
    assert!(output.contains("Unrecognised input 'wibble'. Type h for help."));
    assert_eq!(engine.board().get(Position::Center), Square::Occupied(Marker::X));
    assert_eq!(engine.current_player().name(), "Grace");
}

#[test]
fn test_moves_after_game_over_rejected() {
    let (engine, output) = run_script(&named(), "1\n4\n2\n5\n3\n9\n");
    assert!(output.contains("The game is over. Type r to play again or q to quit."));
    assert_eq!(engine.board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_restart_keeps_names() {
    let (engine, output) = run_script(&named(), "1\n4\nr\n");
    assert!(output.contains("New game."));
    assert!(engine.history().is_empty());
    assert_eq!(engine.current_player().name(), "Ada");
    assert_eq!(engine.phase(), Phase::InProgress);
}

#[test]
fn test_end_of_input_during_name_prompt() {
    let (engine, _) = run_script(&TictacConfig::default(), "");
    assert!(!engine.is_started());
}

#[test]
fn test_help_lists_commands() {
    let (_, output) = run_script(&named(), "h\n");
    assert!(output.contains("r, restart"));
    assert!(output.contains("q, quit"));
}

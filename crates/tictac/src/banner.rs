//! Game-over announcement shared by both front ends.

use tictac_engine::{Engine, Status};

/// Celebration line for a finished game, `None` while the game is still open.
pub fn result_banner(engine: &Engine) -> Option<String> {
    match engine.status() {
        Status::Won(player) => Some(format!(
            "🎉 {} ({}) is the winner!",
            player.name(),
            player.marker()
        )),
        Status::Tie => Some("😐 It's a tie! Good game!".to_string()),
        Status::NotStarted | Status::Turn(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_banner_while_playing() {
        let mut engine = Engine::new();
        assert_eq!(result_banner(&engine), None);
        engine.start_game("Ada", "Grace");
        assert_eq!(result_banner(&engine), None);
    }

    #[test]
    fn test_winner_banner() {
        let mut engine = Engine::new();
        engine.start_game("Ada", "Grace");
        for index in [0, 3, 1, 4, 2] {
            engine.play_move(index).unwrap();
        }
        assert_eq!(
            result_banner(&engine).as_deref(),
            Some("🎉 Ada (X) is the winner!")
        );
    }

    #[test]
    fn test_tie_banner() {
        let mut engine = Engine::new();
        engine.start_game("", "");
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.play_move(index).unwrap();
        }
        assert_eq!(
            result_banner(&engine).as_deref(),
            Some("😐 It's a tie! Good game!")
        );
    }
}

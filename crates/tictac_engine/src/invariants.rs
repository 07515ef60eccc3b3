//! Properties the engine maintains between calls.
//!
//! Each invariant can be checked on its own; [`check_all`] runs the whole
//! set and is asserted after every accepted move in debug builds.

use super::engine::{Engine, Phase, Seat};
use super::rules;
use super::types::Marker;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkCountsBalanced;

impl Invariant<Engine> for MarkCountsBalanced {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Marker::X);
        let o = engine.board().count(Marker::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

/// Every occupied square was played this game, markers alternating from X.
pub struct HistoryMatchesBoard;

impl Invariant<Engine> for HistoryMatchesBoard {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        let history = engine.history();
        let occupied = board.squares().iter().filter(|s| !s.is_empty()).count();
        if occupied != history.len() {
            return false;
        }

        history.iter().enumerate().all(|(turn, pos)| {
            let expected = if turn % 2 == 0 { Marker::X } else { Marker::O };
            board.get(*pos).marker() == Some(expected)
        })
    }

    fn description() -> &'static str {
        "Move history replays to the board, alternating X and O"
    }
}

/// A winner exists only in a finished game and matches the board.
pub struct WinnerImpliesOver;

impl Invariant<Engine> for WinnerImpliesOver {
    fn holds(engine: &Engine) -> bool {
        let on_board = rules::check_winner(engine.board()).map(Seat::of);
        match engine.state().winner() {
            Some(seat) => engine.phase() == Phase::Over && on_board == Some(seat),
            None if engine.phase() == Phase::Over => engine.check_tie(),
            None => on_board.is_none(),
        }
    }

    fn description() -> &'static str {
        "Winner is set exactly when the game is over and a line is complete"
    }
}

/// Checks every engine invariant, collecting all violations.
pub fn check_all(engine: &Engine) -> Result<(), Vec<InvariantViolation>> {
    fn check<I: Invariant<Engine>>(engine: &Engine, violations: &mut Vec<InvariantViolation>) {
        if !I::holds(engine) {
            violations.push(InvariantViolation::new(I::description()));
        }
    }

    let mut violations = Vec::new();
    check::<MarkCountsBalanced>(engine, &mut violations);
    check::<HistoryMatchesBoard>(engine, &mut violations);
    check::<WinnerImpliesOver>(engine, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine_holds() {
        assert!(check_all(&Engine::new()).is_ok());
    }

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = Engine::new();
        engine.start_game("", "");
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.play_move(index).unwrap();
            assert!(check_all(&engine).is_ok());
        }
        assert!(engine.check_tie());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new(MarkCountsBalanced::description());
        assert_eq!(
            violation.to_string(),
            "Invariant violated: X has the same number of marks as O, or one more"
        );
    }
}

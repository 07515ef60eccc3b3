//! Turn sequencing and game lifecycle.

use super::board::Board;
use super::error::MoveError;
use super::invariants;
use super::position::Position;
use super::rules;
use super::types::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Marker, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Names may be configured; no moves accepted yet.
    #[display("not started")]
    NotStarted,
    /// Moves are accepted.
    #[display("in progress")]
    InProgress,
    /// A line was completed or the board filled up.
    #[display("over")]
    Over,
}

/// Which of the two configured players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Plays `X` and moves first.
    First,
    /// Plays `O`.
    Second,
}

impl Seat {
    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Seat that plays `marker`.
    pub fn of(marker: Marker) -> Self {
        match marker {
            Marker::X => Seat::First,
            Marker::O => Seat::Second,
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Game goes on; `next` moves now.
    Continue {
        /// Marker of the player to move next.
        next: Marker,
    },
    /// The move completed `line`.
    Won {
        /// Marker of the winning player.
        winner: Marker,
        /// The completed line.
        line: [Position; 3],
    },
    /// The move filled the board without completing a line.
    Tie,
}

/// Mutable bookkeeping of one game.
///
/// `winner` is only set while `over` is; `over` without a winner is a tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    current: Seat,
    started: bool,
    over: bool,
    winner: Option<Seat>,
    history: Vec<Position>,
}

impl GameState {
    fn new() -> Self {
        Self {
            current: Seat::First,
            started: false,
            over: false,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Seat whose turn it is.
    pub fn current(&self) -> Seat {
        self.current
    }

    /// True once a game has been started or reset.
    pub fn started(&self) -> bool {
        self.started
    }

    /// True when the game has ended.
    pub fn over(&self) -> bool {
        self.over
    }

    /// Seat that won, if any.
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// Positions played this game, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Lifecycle phase derived from the flags.
    pub fn phase(&self) -> Phase {
        match (self.started, self.over) {
            (false, _) => Phase::NotStarted,
            (true, false) => Phase::InProgress,
            (true, true) => Phase::Over,
        }
    }
}

/// One-line summary of the game for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    /// Waiting for the start command.
    NotStarted,
    /// This player moves next.
    Turn(&'a Player),
    /// This player completed a line.
    Won(&'a Player),
    /// Board full, nobody won.
    Tie,
}

impl std::fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NotStarted => f.write_str("Press Start to begin!"),
            Status::Turn(player) => write!(f, "{}'s turn ({})", player.name(), player.marker()),
            Status::Won(player) => write!(f, "{} wins!", player.name()),
            Status::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Tic-tac-toe game engine.
///
/// Owns the board, both players and the game state. All operations run to
/// completion; rejected moves leave everything untouched.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    players: [Player; 2],
    state: GameState,
}

impl Engine {
    /// Creates an engine with default player names, not yet started.
    #[instrument]
    pub fn new() -> Self {
        Self::with_names("", "")
    }

    /// Creates an engine with the given names applied, not yet started.
    ///
    /// Blank names fall back to "Player 1" and "Player 2".
    #[instrument]
    pub fn with_names(name1: &str, name2: &str) -> Self {
        Self {
            board: Board::new(),
            players: Self::make_players(name1, name2),
            state: GameState::new(),
        }
    }

    fn make_players(name1: &str, name2: &str) -> [Player; 2] {
        [
            Player::named_or(name1, DEFAULT_PLAYER_ONE, Marker::X),
            Player::named_or(name2, DEFAULT_PLAYER_TWO, Marker::O),
        ]
    }

    /// Applies player names and starts a fresh game.
    ///
    /// Calling it again mid-game or after game over simply starts over with
    /// the new names.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name1: &str, name2: &str) {
        self.players = Self::make_players(name1, name2);
        self.reset_game();
        info!(
            player_one = %self.players[0],
            player_two = %self.players[1],
            "Game started"
        );
    }

    /// Clears the board and starts a new game with the current names.
    ///
    /// Always leaves the engine in progress, whatever phase it was in.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.state = GameState {
            started: true,
            ..GameState::new()
        };
        debug!("Game reset");
    }

    /// Places the current player's marker at `index`.
    ///
    /// On success the turn passes to the other player unless the move won
    /// or tied the game. A win takes precedence over a tie when the last
    /// move both completes a line and fills the board.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn play_move(&mut self, index: usize) -> Result<Placement, MoveError> {
        let phase = self.phase();
        if phase != Phase::InProgress {
            warn!(index, %phase, "Move rejected: game not in progress");
            return Err(MoveError::IllegalMoveTiming(phase));
        }

        let marker = *self.current_player().marker();
        let pos = self.board.try_place(index, marker).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;
        self.state.history.push(pos);

        let placement = if let Some((winner, line)) = rules::winning_line(&self.board) {
            self.state.over = true;
            self.state.winner = Some(Seat::of(winner));
            info!(%winner, ?line, "Game won");
            Placement::Won { winner, line }
        } else if self.board.is_full() {
            self.state.over = true;
            info!("Game tied");
            Placement::Tie
        } else {
            self.state.current = self.state.current.other();
            Placement::Continue {
                next: marker.opponent(),
            }
        };

        debug!(%pos, %marker, ?placement, "Move accepted");
        debug_assert!(
            invariants::check_all(self).is_ok(),
            "Engine invariants violated: {:?}",
            invariants::check_all(self)
        );
        Ok(placement)
    }

    /// Full board with no winning line. Does not modify anything.
    pub fn check_tie(&self) -> bool {
        rules::is_tie(&self.board)
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.state.current)
    }

    /// True once the game has ended.
    pub fn is_over(&self) -> bool {
        self.state.over
    }

    /// Winner of a finished game, `None` while playing or after a tie.
    pub fn winner(&self) -> Option<&Player> {
        self.state.winner.map(|seat| self.player(seat))
    }

    /// True once the game has been started.
    pub fn is_started(&self) -> bool {
        self.state.started
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, first player (`X`) first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Positions played this game, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.state.history
    }

    /// Free squares while the game is in progress; empty otherwise.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase() == Phase::InProgress {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Display summary of the game.
    pub fn status(&self) -> Status<'_> {
        match self.phase() {
            Phase::NotStarted => Status::NotStarted,
            Phase::InProgress => Status::Turn(self.current_player()),
            Phase::Over => match self.winner() {
                Some(player) => Status::Won(player),
                None => Status::Tie,
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared outcome and error types.

use alloc::vec::Vec;
use core::fmt;

use crate::geometry::Cell;

/// Identifier of a player bound to a game.
pub type PlayerId = u32;

/// Reserved id for the built-in bot seat in single-play games.
pub const BOT_PLAYER_ID: PlayerId = PlayerId::MAX;

/// Who attacks next after a shot resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// The attacker keeps the turn.
    Same,
    /// The turn passes to the opponent.
    Switch,
}

/// Result of one shot at a board.
///
/// Shooting an already-revealed cell reports the same kind of outcome
/// again with no state change and no turn cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship at the cell. `turn` is `Switch` the first time the cell is
    /// revealed and `Same` on repeats, so a client retry cannot cede the
    /// turn.
    Miss { cell: Cell, turn: Turn },
    /// Wounded a ship that still has intact cells.
    Hit { cell: Cell },
    /// Sank a ship. `ship` lists the hull cells, `cleared` the bordering
    /// cells newly revealed as empty. Both lists are empty on a repeat.
    Sunk {
        cell: Cell,
        ship: Vec<Cell>,
        cleared: Vec<Cell>,
    },
}

impl ShotOutcome {
    /// The targeted cell.
    pub fn cell(&self) -> Cell {
        match self {
            ShotOutcome::Miss { cell, .. }
            | ShotOutcome::Hit { cell }
            | ShotOutcome::Sunk { cell, .. } => *cell,
        }
    }

    /// Whether the turn passes to the opponent.
    pub fn switches_turn(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Miss {
                turn: Turn::Switch,
                ..
            }
        )
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk { .. })
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A target or hull cell lies outside the board.
    OutOfBounds,
    /// The board already holds a fleet.
    FleetAlreadyPlaced,
    /// Every cell has been revealed; nothing left to sample.
    NoUntriedCells,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "cell is outside the board"),
            BoardError::FleetAlreadyPlaced => write!(f, "board already holds a fleet"),
            BoardError::NoUntriedCells => write!(f, "no untried cell left to shoot"),
        }
    }
}

/// Errors returned by Game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying board error.
    Board(BoardError),
    /// The game already has two players.
    GameFull,
    /// The player id is already bound to this game.
    DuplicatePlayer,
    /// No such player in this game.
    PlayerNotFound,
    /// The attacker is not the current turn holder.
    NotYourTurn,
    /// Both fleets must be placed before attacks resolve.
    NotStarted,
    /// The game has finished; no further commands are accepted.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "board error: {}", e),
            GameError::GameFull => write!(f, "game already has 2 players"),
            GameError::DuplicatePlayer => write!(f, "player is already in this game"),
            GameError::PlayerNotFound => write!(f, "player not found in this game"),
            GameError::NotYourTurn => write!(f, "player is not the current turn holder"),
            GameError::NotStarted => write!(f, "both fleets must be placed first"),
            GameError::GameOver => write!(f, "game is over"),
        }
    }
}

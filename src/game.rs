//! Two-player match arbitration: turn ownership, attack resolution and
//! completion tracking.

use alloc::vec::Vec;

use log::{debug, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{GameError, PlayerId, ShotOutcome, BOT_PLAYER_ID};
use crate::geometry::Cell;
use crate::placement::random_fleet;
use crate::ship::Ship;

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fewer than two fleets placed.
    AwaitingFleets,
    /// Both fleets placed; the turn pointer is valid.
    InProgress,
    /// One side has no ships left, or a participant left. Terminal.
    Finished,
}

/// Kind of match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayers,
    /// One human seat; the second seat is the built-in bot.
    SinglePlay,
}

struct Seat {
    player: PlayerId,
    board: Board,
    fleet: Vec<Ship>,
}

/// Everything both participants need to render one resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: PlayerId,
    pub outcome: ShotOutcome,
    /// One synthetic miss per cell cleared by a sink, so observers can
    /// render the cascade without re-deriving geometry.
    pub cascade_misses: Vec<Cell>,
    /// Turn holder after this attack resolved.
    pub turn: PlayerId,
    /// Set as soon as the defender has no ships left.
    pub winner: Option<PlayerId>,
}

impl AttackReport {
    pub fn game_over(&self) -> bool {
        self.winner.is_some()
    }
}

/// One match: two boards, a turn pointer and a completion flag.
pub struct Game {
    id: u32,
    mode: GameMode,
    /// At most two, in join order; the first non-bot joiner is the host.
    seats: Vec<Seat>,
    fleets_placed: u8,
    current: Option<PlayerId>,
    phase: GamePhase,
    winner: Option<PlayerId>,
}

impl Game {
    /// Create a two-player match.
    pub fn new(id: u32) -> Self {
        Game {
            id,
            mode: GameMode::TwoPlayers,
            seats: Vec::new(),
            fleets_placed: 0,
            current: None,
            phase: GamePhase::AwaitingFleets,
            winner: None,
        }
    }

    /// Create a single-play match. The bot seat joins immediately with a
    /// generated fleet; the human seat is added by the caller.
    pub fn single_play<R: Rng + ?Sized>(id: u32, rng: &mut R) -> Self {
        let mut game = Game::new(id);
        game.mode = GameMode::SinglePlay;
        let _ = game.add_player(BOT_PLAYER_ID);
        let _ = game.place_fleet_for(BOT_PLAYER_ID, random_fleet(rng));
        game
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Both fleets placed.
    pub fn is_ready_to_start(&self) -> bool {
        self.fleets_placed == 2
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Ids of the bound players, in join order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats.iter().map(|s| s.player)
    }

    fn seat(&self, player: PlayerId) -> Result<&Seat, GameError> {
        self.seats
            .iter()
            .find(|s| s.player == player)
            .ok_or(GameError::PlayerNotFound)
    }

    fn seat_mut(&mut self, player: PlayerId) -> Result<&mut Seat, GameError> {
        self.seats
            .iter_mut()
            .find(|s| s.player == player)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Bind a player to a fresh empty board. The first non-bot joiner
    /// becomes the initial turn holder.
    pub fn add_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.seats.len() == 2 {
            return Err(GameError::GameFull);
        }
        if self.seats.iter().any(|s| s.player == player) {
            return Err(GameError::DuplicatePlayer);
        }
        if self.current.is_none() && player != BOT_PLAYER_ID {
            self.current = Some(player);
        }
        self.seats.push(Seat {
            player,
            board: Board::new(),
            fleet: Vec::new(),
        });
        Ok(())
    }

    /// Place a fleet on a player's board; flips the match to in-progress
    /// once both boards are populated.
    pub fn place_fleet_for(&mut self, player: PlayerId, fleet: Vec<Ship>) -> Result<(), GameError> {
        let id = self.id;
        let seat = self.seat_mut(player)?;
        seat.board.place_fleet(&fleet)?;
        debug!("game {}: fleet placed for player {}\n{}", id, player, seat.board);
        seat.fleet = fleet;
        self.fleets_placed += 1;
        if self.fleets_placed == 2 {
            self.phase = GamePhase::InProgress;
        }
        Ok(())
    }

    /// The fleet a player registered, as sent back in start-of-game
    /// notifications.
    pub fn fleet_of(&self, player: PlayerId) -> Result<&[Ship], GameError> {
        Ok(&self.seat(player)?.fleet)
    }

    /// Ships still afloat on a player's board.
    pub fn remaining_ships_of(&self, player: PlayerId) -> Result<usize, GameError> {
        Ok(self.seat(player)?.board.remaining_ship_count())
    }

    /// The other bound player; defined only once both seats are taken.
    pub fn opponent_of(&self, player: PlayerId) -> Result<PlayerId, GameError> {
        if self.seats.len() < 2 {
            return Err(GameError::PlayerNotFound);
        }
        self.seat(player)?;
        self.seats
            .iter()
            .map(|s| s.player)
            .find(|&p| p != player)
            .ok_or(GameError::PlayerNotFound)
    }

    /// Resolve an attack at a chosen cell.
    pub fn attack(&mut self, player: PlayerId, cell: Cell) -> Result<AttackReport, GameError> {
        self.check_attack(player)?;
        let defender = self.opponent_of(player)?;
        let outcome = self.seat_mut(defender)?.board.shoot(cell)?;
        Ok(self.resolve(player, defender, outcome))
    }

    /// Resolve an attack at a uniformly random untried cell of the
    /// opponent's board.
    pub fn random_attack<R: Rng + ?Sized>(
        &mut self,
        player: PlayerId,
        rng: &mut R,
    ) -> Result<AttackReport, GameError> {
        self.check_attack(player)?;
        let defender = self.opponent_of(player)?;
        let outcome = self.seat_mut(defender)?.board.shoot_at_random_cell(rng)?;
        Ok(self.resolve(player, defender, outcome))
    }

    fn check_attack(&self, player: PlayerId) -> Result<(), GameError> {
        if self.phase == GamePhase::Finished {
            return Err(GameError::GameOver);
        }
        self.seat(player)?;
        if self.phase != GamePhase::InProgress {
            return Err(GameError::NotStarted);
        }
        if self.current != Some(player) {
            warn!("game {}: attack by player {} out of turn", self.id, player);
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn resolve(
        &mut self,
        attacker: PlayerId,
        defender: PlayerId,
        outcome: ShotOutcome,
    ) -> AttackReport {
        let remaining = match self.seat(defender) {
            Ok(seat) => seat.board.remaining_ship_count(),
            Err(_) => 0,
        };
        if remaining == 0 {
            self.phase = GamePhase::Finished;
            self.winner = Some(attacker);
        } else if outcome.switches_turn() {
            self.current = Some(defender);
        }
        let cascade_misses = match &outcome {
            ShotOutcome::Sunk { cleared, .. } => cleared.clone(),
            _ => Vec::new(),
        };
        AttackReport {
            attacker,
            outcome,
            cascade_misses,
            turn: self.current.unwrap_or(attacker),
            winner: self.winner,
        }
    }

    /// A participant abandoned the match: the game finishes and the
    /// remaining player, if any, takes the win.
    pub fn player_left(&mut self, player: PlayerId) -> Result<Option<PlayerId>, GameError> {
        self.seat(player)?;
        if self.phase == GamePhase::Finished {
            return Ok(self.winner);
        }
        self.phase = GamePhase::Finished;
        self.winner = self.seats.iter().map(|s| s.player).find(|&p| p != player);
        Ok(self.winner)
    }
}

//! One player's hidden grid and per-ship residual health.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::cellset::CellSet;
use crate::common::{BoardError, ShotOutcome, Turn};
use crate::config::BOARD_SIZE;
use crate::geometry::Cell;
use crate::ship::Ship;

const N: usize = BOARD_SIZE as usize;

/// Status of a single board cell. A cell moves monotonically from
/// `Unknown` to one of the revealed states; `Shot` further advances to
/// `Killed` when the owning ship sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Never targeted; occupancy unrevealed.
    Unknown,
    /// Confirmed empty, by a miss or by the clearing around a sunk ship.
    Empty,
    /// Hit, owning ship still afloat.
    Shot,
    /// Hit, owning ship sunk.
    Killed,
}

#[derive(Clone)]
struct PlacedShip {
    cells: CellSet,
    /// In-bounds cells bordering the hull, revealed when it sinks.
    ring: CellSet,
}

/// One player's board: cell states, ship ownership and residual health.
#[derive(Clone)]
pub struct Board {
    states: [[CellState; N]; N],
    /// Occupied cell → index into `ships`.
    owners: [[Option<u8>; N]; N],
    ships: Vec<PlacedShip>,
    /// Ship index → hits left to sink. An entry leaves the map when the
    /// ship sinks; an absent index means the ship is already down.
    health: BTreeMap<u8, u8>,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            states: [[CellState::Unknown; N]; N],
            owners: [[None; N]; N],
            ships: Vec::new(),
            health: BTreeMap::new(),
        }
    }

    fn state(&self, cell: Cell) -> CellState {
        self.states[cell.y as usize][cell.x as usize]
    }

    fn set_state(&mut self, cell: Cell, state: CellState) {
        self.states[cell.y as usize][cell.x as usize] = state;
    }

    fn owner(&self, cell: Cell) -> Option<u8> {
        self.owners[cell.y as usize][cell.x as usize]
    }

    /// Status of a cell, or `None` off the board.
    pub fn cell_state(&self, cell: Cell) -> Option<CellState> {
        cell.in_bounds().then(|| self.state(cell))
    }

    /// Ships still afloat.
    pub fn remaining_ship_count(&self) -> usize {
        self.health.len()
    }

    /// Place a whole fleet at once. Every hull is bounds-checked before
    /// any state changes; legality of the arrangement itself (overlap,
    /// one-cell separation) is the caller's contract.
    pub fn place_fleet(&mut self, ships: &[Ship]) -> Result<(), BoardError> {
        if !self.ships.is_empty() {
            return Err(BoardError::FleetAlreadyPlaced);
        }
        if !ships.iter().all(Ship::fits) {
            return Err(BoardError::OutOfBounds);
        }
        for (idx, ship) in ships.iter().enumerate() {
            let mask = ship.mask();
            for cell in mask.iter() {
                self.owners[cell.y as usize][cell.x as usize] = Some(idx as u8);
            }
            self.health.insert(idx as u8, ship.length);
            self.ships.push(PlacedShip {
                cells: mask,
                ring: ship.ring(),
            });
        }
        Ok(())
    }

    /// Resolve one shot. Out-of-bounds targets fail closed with no state
    /// change.
    pub fn shoot(&mut self, cell: Cell) -> Result<ShotOutcome, BoardError> {
        if !cell.in_bounds() {
            return Err(BoardError::OutOfBounds);
        }
        let outcome = match self.state(cell) {
            CellState::Unknown => match self.owner(cell) {
                None => {
                    self.set_state(cell, CellState::Empty);
                    ShotOutcome::Miss {
                        cell,
                        turn: Turn::Switch,
                    }
                }
                Some(idx) => self.wound(cell, idx),
            },
            CellState::Empty => ShotOutcome::Miss {
                cell,
                turn: Turn::Same,
            },
            CellState::Shot => ShotOutcome::Hit { cell },
            CellState::Killed => ShotOutcome::Sunk {
                cell,
                ship: Vec::new(),
                cleared: Vec::new(),
            },
        };
        Ok(outcome)
    }

    fn wound(&mut self, cell: Cell, idx: u8) -> ShotOutcome {
        let Some(hits_left) = self.health.get(&idx).copied() else {
            // owner entry without health: ship already resolved
            return ShotOutcome::Miss {
                cell,
                turn: Turn::Same,
            };
        };
        if hits_left > 1 {
            self.health.insert(idx, hits_left - 1);
            self.set_state(cell, CellState::Shot);
            return ShotOutcome::Hit { cell };
        }

        // Last intact cell: the whole hull flips to killed and the ring
        // around it is revealed as empty.
        self.health.remove(&idx);
        let (hull, ring) = {
            let placed = &self.ships[idx as usize];
            (placed.cells, placed.ring)
        };
        for c in hull.iter() {
            self.set_state(c, CellState::Killed);
        }
        let mut cleared = Vec::new();
        for c in ring.iter() {
            if self.state(c) == CellState::Unknown {
                self.set_state(c, CellState::Empty);
                cleared.push(c);
            }
        }
        ShotOutcome::Sunk {
            cell,
            ship: hull.iter().collect(),
            cleared,
        }
    }

    /// Shoot a uniformly random cell still in `Unknown` status. Fails
    /// closed once the whole board is revealed.
    pub fn shoot_at_random_cell<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<ShotOutcome, BoardError> {
        if !self.has_untried_cells() {
            return Err(BoardError::NoUntriedCells);
        }
        loop {
            let cell = Cell::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if self.state(cell) == CellState::Unknown {
                return self.shoot(cell);
            }
        }
    }

    fn has_untried_cells(&self) -> bool {
        self.states
            .iter()
            .any(|row| row.iter().any(|&s| s == CellState::Unknown))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let cell = Cell::new(x as u8, y as u8);
                let mark = match self.state(cell) {
                    CellState::Unknown if self.owner(cell).is_some() => '■',
                    CellState::Unknown => '·',
                    CellState::Empty => 'o',
                    CellState::Shot => 'x',
                    CellState::Killed => 'X',
                };
                write!(f, "{} ", mark)?;
            }
            if y + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board ({} ships afloat):", self.remaining_ship_count())?;
        fmt::Display::fmt(self, f)
    }
}

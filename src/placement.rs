//! Random fleet arrangement with one-cell separation between hulls.

use alloc::vec::Vec;

use rand::Rng;

use crate::cellset::CellSet;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, FLEET_SIZE};
use crate::geometry::Cell;
use crate::ship::{Orientation, Ship};

/// Attempts per ship before the whole arrangement is thrown away and
/// restarted, keeping worst-case latency bounded.
const MAX_ATTEMPTS_PER_SHIP: u32 = 100;

/// Generate one random legal fleet: every hull in bounds and no two hulls
/// within touching distance, including diagonally.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Vec<Ship> {
    loop {
        if let Some(fleet) = try_arrangement(rng) {
            return fleet;
        }
    }
}

fn try_arrangement<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<Ship>> {
    let mut occupied = CellSet::new();
    // occupied cells plus their rings; candidates must avoid all of it
    let mut blocked = CellSet::new();
    let mut fleet = Vec::with_capacity(FLEET_SIZE);

    for &length in FLEET_LENGTHS.iter() {
        let mut placed = false;
        for _ in 0..MAX_ATTEMPTS_PER_SHIP {
            let ship = random_candidate(rng, length);
            if ship.mask().intersects(blocked) {
                continue;
            }
            occupied |= ship.mask();
            blocked = occupied.expand();
            fleet.push(ship);
            placed = true;
            break;
        }
        if !placed {
            return None;
        }
    }
    Some(fleet)
}

/// An in-bounds candidate, with the origin sampled directly from the valid
/// range for the chosen orientation.
fn random_candidate<R: Rng + ?Sized>(rng: &mut R, length: u8) -> Ship {
    let orientation = if rng.random() {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let (max_x, max_y) = match orientation {
        Orientation::Horizontal => (BOARD_SIZE - length, BOARD_SIZE - 1),
        Orientation::Vertical => (BOARD_SIZE - 1, BOARD_SIZE - length),
    };
    let origin = Cell::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
    Ship::new(origin, orientation, length)
}

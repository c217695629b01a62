//! Pure coordinate math: bounds checks, hull cell enumeration and the
//! buffer ring of cells bordering a hull.

use core::fmt;

use crate::cellset::CellSet;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// One grid position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Cell { x, y }
    }

    /// Whether the cell lies on the board.
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    pub(crate) fn checked(x: i16, y: i16) -> Option<Cell> {
        if (0..BOARD_SIZE as i16).contains(&x) && (0..BOARD_SIZE as i16).contains(&y) {
            Some(Cell::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// In-bounds cells within Chebyshev distance 1 of `self`, excluding
    /// `self`.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        const OFFSETS: [(i16, i16); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];
        let (x, y) = (self.x as i16, self.y as i16);
        OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| Cell::checked(x + dx, y + dy))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Whether a hull of `length` cells starting at `origin` lies entirely on
/// the board.
pub fn fits(origin: Cell, orientation: Orientation, length: u8) -> bool {
    let len = length as u16;
    match orientation {
        Orientation::Horizontal => {
            origin.y < BOARD_SIZE && origin.x as u16 + len <= BOARD_SIZE as u16
        }
        Orientation::Vertical => {
            origin.x < BOARD_SIZE && origin.y as u16 + len <= BOARD_SIZE as u16
        }
    }
}

/// The `length` cells a hull occupies starting at `origin`. Horizontal
/// hulls extend along +x, vertical along +y. No bounds filtering; callers
/// validate fit with [`fits`] first.
pub fn ship_cells(
    origin: Cell,
    orientation: Orientation,
    length: u8,
) -> impl Iterator<Item = Cell> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => Cell::new(origin.x + i, origin.y),
        Orientation::Vertical => Cell::new(origin.x, origin.y + i),
    })
}

/// Occupancy mask of a hull. Cells off the board are dropped.
pub fn ship_mask(origin: Cell, orientation: Orientation, length: u8) -> CellSet {
    ship_cells(origin, orientation, length).collect()
}

/// The in-bounds cells within Chebyshev distance 1 of a hull, excluding
/// the hull itself. Doubles as the separation zone during placement and as
/// the cells revealed as empty when the hull sinks.
pub fn buffer_ring(origin: Cell, orientation: Orientation, length: u8) -> CellSet {
    let mask = ship_mask(origin, orientation, length);
    mask.expand() & !mask
}

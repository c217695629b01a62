//! Ship descriptors: orientation, size class and hull geometry.

use crate::cellset::CellSet;
use crate::geometry::{self, Cell};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Size class of a ship, derived purely from hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum ShipClass {
    Small,
    Medium,
    Large,
    Huge,
}

impl ShipClass {
    /// Class label for a hull of `length` cells.
    pub const fn of_length(length: u8) -> ShipClass {
        match length {
            2 => ShipClass::Medium,
            3 => ShipClass::Large,
            4 => ShipClass::Huge,
            _ => ShipClass::Small,
        }
    }
}

/// A ship descriptor: origin cell, orientation and hull length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    pub origin: Cell,
    pub orientation: Orientation,
    pub length: u8,
}

impl Ship {
    pub const fn new(origin: Cell, orientation: Orientation, length: u8) -> Self {
        Ship {
            origin,
            orientation,
            length,
        }
    }

    /// Size-class label of the hull.
    pub fn class(&self) -> ShipClass {
        ShipClass::of_length(self.length)
    }

    /// Whether the whole hull lies on the board.
    pub fn fits(&self) -> bool {
        geometry::fits(self.origin, self.orientation, self.length)
    }

    /// Cells occupied by the hull.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        geometry::ship_cells(self.origin, self.orientation, self.length)
    }

    /// Occupancy mask of the hull.
    pub fn mask(&self) -> CellSet {
        geometry::ship_mask(self.origin, self.orientation, self.length)
    }

    /// The in-bounds cells bordering the hull.
    pub fn ring(&self) -> CellSet {
        geometry::buffer_ring(self.origin, self.orientation, self.length)
    }
}

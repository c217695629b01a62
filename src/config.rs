/// Board dimension; the grid is `BOARD_SIZE` × `BOARD_SIZE`.
pub const BOARD_SIZE: u8 = 10;

/// Number of ships in a fleet.
pub const FLEET_SIZE: usize = 10;

/// Hull lengths of the fixed fleet, largest first. The placement generator
/// walks this order; placing large hulls early keeps collision retries low.
pub const FLEET_LENGTHS: [u8; FLEET_SIZE] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total cells occupied by a full fleet.
pub const FLEET_CELLS: usize = 20;

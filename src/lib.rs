#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod cellset;
mod common;
mod config;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod ship;

pub use board::*;
pub use cellset::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use ship::*;

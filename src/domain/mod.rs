mod board;
mod cell;
mod coordinate;
mod error;
mod patterns;

pub use board::{Board, LiveSet, advance, advance_parallel};
pub use cell::Cell;
pub use coordinate::Coordinate;
pub use error::CoordinateError;
pub use patterns::{Pattern, presets, random_soup};

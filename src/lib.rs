// Domain layer - sparse Game of Life on an unbounded plane
pub mod domain;

// Re-exports for convenience
pub use domain::{
    Board, Cell, Coordinate, CoordinateError, LiveSet, Pattern, advance, advance_parallel,
    presets,
};

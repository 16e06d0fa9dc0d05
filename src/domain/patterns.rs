use super::board::{Board, LiveSet};
use super::error::CoordinateError;
use super::Coordinate;

/// Represents a pattern that can be placed on a board
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    /// Relative coordinates of alive cells
    pub cells: Vec<(i64, i64)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i64, i64)>) -> Self {
        Self { name, description, cells }
    }

    /// Translate the pattern so its origin lands at `(x, y)`.
    pub fn place_at(&self, x: i64, y: i64) -> Result<Vec<Coordinate>, CoordinateError> {
        let origin = Coordinate::new(x, y)?;
        self.cells
            .iter()
            .map(|&(dx, dy)| origin.translated(dx, dy))
            .collect()
    }

    /// Place pattern on a board with its origin at `(x, y)`.
    pub fn place_on(&self, board: &mut Board, x: i64, y: i64) -> Result<(), CoordinateError> {
        for c in self.place_at(x, y)? {
            board.insert(c)?;
        }
        Ok(())
    }
}

/// Fill a `width` x `height` rectangle at the origin with live cells at the
/// given density. Used by the benchmark to build soups of arbitrary size.
pub fn random_soup(width: i64, height: i64, density: f64) -> LiveSet {
    use rand::Rng;
    let mut rng = rand::rng();

    let mut live = LiveSet::new();
    for y in 0..height {
        for x in 0..width {
            if rng.random::<f64>() < density {
                // Soup coordinates are nowhere near the i64 boundary.
                if let Ok(c) = Coordinate::new(x, y) {
                    live.insert(c);
                }
            }
        }
    }
    live
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator (vertical phase)
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            r_pentomino(),
            acorn(),
        ]
    }
}

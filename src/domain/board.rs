//! Sparse board over an unbounded plane.
//!
//! A generation is a set of live coordinates; everything off the set is dead.
//! Advancing a generation never scans the infinite grid: only live cells and
//! their immediate neighbors can possibly be alive next generation, so the
//! step walks exactly that candidate set.
//!
//! Every stored coordinate satisfies the construction margin (see
//! [`Coordinate::new`]). Candidates sit at most one ring beyond the live set
//! and their neighbor counts reach one ring further, so with that invariant
//! all arithmetic inside a step is exact. Survivors are re-validated before
//! they become the new generation: a pattern growing across the margin
//! surfaces [`CoordinateError::Overflow`] instead of wrapping.

use std::collections::HashSet;

use rayon::prelude::*;

use super::error::CoordinateError;
use super::{Cell, Coordinate};

/// One generation's complete state. Unordered, unique by coordinate value.
pub type LiveSet = HashSet<Coordinate>;

/// Every coordinate that could be alive next generation: the live cells plus
/// each of their 8 neighbors. Anything outside this set has zero live
/// neighbors and is not itself alive, so it stays dead.
fn candidates(live: &LiveSet) -> LiveSet {
    live.iter()
        .copied()
        .chain(live.iter().flat_map(|c| c.neighbors()))
        .collect()
}

fn live_neighbor_count(live: &LiveSet, c: Coordinate) -> u8 {
    c.neighbors().iter().filter(|n| live.contains(n)).count() as u8
}

fn cell_at(live: &LiveSet, c: Coordinate) -> Cell {
    if live.contains(&c) { Cell::Alive } else { Cell::Dead }
}

fn survives(live: &LiveSet, c: Coordinate) -> bool {
    cell_at(live, c)
        .evolve(live_neighbor_count(live, c))
        .is_alive()
}

/// Pure generation step: maps one live set to the next.
///
/// Every candidate is evaluated against the old generation only, so the
/// result is deterministic and independent of iteration order. Errs if a
/// survivor would land outside the accepted coordinate range; the input set
/// is never modified.
pub fn advance(live: &LiveSet) -> Result<LiveSet, CoordinateError> {
    candidates(live)
        .into_iter()
        .filter(|&c| survives(live, c))
        .map(Coordinate::validated)
        .collect()
}

/// Parallel [`advance`] using rayon. The candidate set is partitioned across
/// workers; each worker reads the same immutable prior generation, and the
/// next set is assembled only after all of them finish. Produces exactly the
/// same membership as the serial version. Worthwhile only for large
/// populations.
pub fn advance_parallel(live: &LiveSet) -> Result<LiveSet, CoordinateError> {
    candidates(live)
        .into_par_iter()
        .filter(|&c| survives(live, c))
        .map(Coordinate::validated)
        .collect()
}

/// Board owns the current generation and steps it in place.
pub struct Board {
    live: LiveSet,
    generation: u64,
}

impl Board {
    /// Create a board from initial live positions. Duplicates collapse to a
    /// single cell; components outside the accepted coordinate range are
    /// rejected (see [`Coordinate::new`]).
    pub fn new(cells: impl IntoIterator<Item = (i64, i64)>) -> Result<Self, CoordinateError> {
        let live = cells
            .into_iter()
            .map(|(x, y)| Coordinate::new(x, y))
            .collect::<Result<LiveSet, _>>()?;
        Ok(Self { live, generation: 0 })
    }

    /// Create a board from an existing live set. Re-validates every member:
    /// [`Coordinate::neighbors`] can produce coordinates one step past the
    /// accepted range, and those must not seed a board.
    pub fn from_live_set(live: LiveSet) -> Result<Self, CoordinateError> {
        for &c in &live {
            c.validated()?;
        }
        Ok(Self { live, generation: 0 })
    }

    /// The current generation's live set.
    pub fn current(&self) -> &LiveSet {
        &self.live
    }

    /// How many generations have been stepped since construction.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// State of the cell at `c` in the current generation.
    pub fn cell_at(&self, c: Coordinate) -> Cell {
        cell_at(&self.live, c)
    }

    /// Mark a cell alive. Returns false if it already was.
    pub fn insert(&mut self, c: Coordinate) -> Result<bool, CoordinateError> {
        Ok(self.live.insert(c.validated()?))
    }

    /// Advance one generation and return the new live set. The stored set is
    /// replaced wholesale once the computation is complete; no reader ever
    /// observes a half-updated generation. On overflow the board is left
    /// exactly as it was.
    pub fn step(&mut self) -> Result<&LiveSet, CoordinateError> {
        self.live = advance(&self.live)?;
        self.generation += 1;
        Ok(&self.live)
    }

    /// [`Board::step`] using [`advance_parallel`].
    pub fn step_parallel(&mut self) -> Result<&LiveSet, CoordinateError> {
        self.live = advance_parallel(&self.live)?;
        self.generation += 1;
        Ok(&self.live)
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.live.clear();
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::random_soup;

    fn live_set(cells: &[(i64, i64)]) -> LiveSet {
        cells
            .iter()
            .map(|&(x, y)| Coordinate::new(x, y).unwrap())
            .collect()
    }

    #[test]
    fn test_dead_universe_is_stable() {
        assert_eq!(advance(&LiveSet::new()).unwrap(), LiveSet::new());
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = live_set(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(advance(&block).unwrap(), block);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let vertical = live_set(&[(0, 0), (0, 1), (0, 2)]);
        let horizontal = advance(&vertical).unwrap();
        assert_eq!(horizontal, live_set(&[(-1, 1), (0, 1), (1, 1)]));
        assert_eq!(advance(&horizontal).unwrap(), vertical);
    }

    #[test]
    fn test_isolated_cell_dies_of_underpopulation() {
        assert_eq!(advance(&live_set(&[(5, 5)])).unwrap(), LiveSet::new());
    }

    #[test]
    fn test_fully_surrounded_cell_dies_of_overpopulation() {
        let center = Coordinate::new(0, 0).unwrap();
        let mut cells: LiveSet = center.neighbors().into_iter().collect();
        cells.insert(center);
        assert!(!advance(&cells).unwrap().contains(&center));
    }

    #[test]
    fn test_advance_is_deterministic() {
        let seed = live_set(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(advance(&seed).unwrap(), advance(&seed).unwrap());
    }

    #[test]
    fn test_no_life_appears_outside_the_candidate_set() {
        // R-pentomino: active enough to grow in every direction.
        let seed = live_set(&[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)]);
        for c in advance(&seed).unwrap() {
            let adjacent = seed.contains(&c)
                || c.neighbors().iter().any(|n| seed.contains(n));
            assert!(adjacent, "{c} appeared away from the previous generation");
        }
    }

    #[test]
    fn test_parallel_advance_matches_serial() {
        // Acorn: a methuselah, so successive generations differ a lot.
        let mut live = live_set(&[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)]);
        for _ in 0..20 {
            assert_eq!(advance_parallel(&live).unwrap(), advance(&live).unwrap());
            live = advance(&live).unwrap();
        }
    }

    #[test]
    fn test_parallel_advance_matches_serial_on_random_soup() {
        let mut live = random_soup(40, 40, 0.3);
        for _ in 0..5 {
            assert_eq!(advance_parallel(&live).unwrap(), advance(&live).unwrap());
            live = advance(&live).unwrap();
        }
    }

    #[test]
    fn test_board_collapses_duplicate_input_cells() {
        let board = Board::new([(0, 0), (0, 0), (1, 1), (0, 0)]).unwrap();
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn test_board_rejects_out_of_range_input() {
        assert!(Board::new([(0, 0), (i64::MAX, 3)]).is_err());
    }

    #[test]
    fn test_from_live_set_rejects_out_of_range_members() {
        // neighbors() can reach one step past the accepted range.
        let edge = Coordinate::new(Coordinate::MAX, 0).unwrap();
        let past_margin: LiveSet = edge.neighbors().into_iter().collect();
        assert!(matches!(
            Board::from_live_set(past_margin),
            Err(CoordinateError::Overflow { axis: 'x', .. })
        ));

        let interior = live_set(&[(0, 0), (0, 1)]);
        assert_eq!(Board::from_live_set(interior).unwrap().population(), 2);
    }

    #[test]
    fn test_step_replaces_state_and_counts_generations() {
        let mut board = Board::new([(0, 0), (0, 1), (0, 2)]).unwrap();
        assert_eq!(board.generation(), 0);

        let after_one = board.step().unwrap().clone();
        assert_eq!(after_one, live_set(&[(-1, 1), (0, 1), (1, 1)]));
        assert_eq!(board.generation(), 1);
        assert_eq!(*board.current(), after_one);

        board.step().unwrap();
        assert_eq!(*board.current(), live_set(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(board.generation(), 2);
    }

    #[test]
    fn test_step_parallel_matches_step() {
        let acorn = [(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)];
        let mut serial = Board::new(acorn).unwrap();
        let mut parallel = Board::new(acorn).unwrap();
        for _ in 0..10 {
            let expected = serial.step().unwrap().clone();
            assert_eq!(*parallel.step_parallel().unwrap(), expected);
            assert_eq!(parallel.generation(), serial.generation());
        }
    }

    #[test]
    fn test_step_at_coordinate_margin_surfaces_overflow() {
        // A vertical blinker flush against the margin flips horizontal, which
        // needs a cell one step past the representable range.
        let mut board = Board::new([
            (Coordinate::MAX, 0),
            (Coordinate::MAX, 1),
            (Coordinate::MAX, 2),
        ])
        .unwrap();
        let before = board.current().clone();

        assert!(matches!(
            board.step(),
            Err(CoordinateError::Overflow { axis: 'x', .. })
        ));
        assert!(matches!(
            board.step_parallel(),
            Err(CoordinateError::Overflow { axis: 'x', .. })
        ));

        // The failed step leaves the board untouched.
        assert_eq!(*board.current(), before);
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn test_current_does_not_mutate() {
        let board = Board::new([(4, 4)]).unwrap();
        let before = board.current().clone();
        let _ = board.current();
        assert_eq!(*board.current(), before);
        assert_eq!(board.generation(), 0);
    }

    #[test]
    fn test_cell_at_reflects_membership() {
        let board = Board::new([(2, 3)]).unwrap();
        assert_eq!(board.cell_at(Coordinate::new(2, 3).unwrap()), Cell::Alive);
        assert_eq!(board.cell_at(Coordinate::new(3, 3).unwrap()), Cell::Dead);
    }

    #[test]
    fn test_clear_resets_board() {
        let mut board = Board::new([(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
        board.step().unwrap();
        board.clear();
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 0);
    }
}

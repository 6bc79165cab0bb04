//! Recursive backtracking search over candidate sets.
//!
//! Each search node owns a copy of the grid and the candidate set, so
//! sibling branches never observe each other's placements. A node first
//! checks validity, then whether everything is already fixed, then
//! branches on the most constrained empty cell in ascending digit
//! order. The first solution found is propagated up immediately.

use crate::board::positions::Cell;
use crate::board::{CellState, GridState, Sudoku};
use crate::candidates::CandidateSet;
use crate::errors::ConstructionError;
use log::trace;

// counts above 9 cannot occur for an empty cell, so fixed cells
// (candidate count 0) are mapped to this to keep them unselectable
const FIXED_CELL_COUNT: u8 = 99;

/// Solver for a single puzzle.
///
/// Construction propagates every clue into the candidate set and fails
/// on puzzles that break the rules outright. [`solve`](Solver::solve)
/// runs the search; the solver itself is never mutated, so it can be
/// reused or inspected afterwards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Solver {
    grid: Sudoku,
    candidates: CandidateSet,
}

impl Solver {
    /// Creates a solver for `sudoku`.
    ///
    /// Fails if the puzzle gives the same digit twice in one house or
    /// if propagating the clues leaves an empty cell without candidates.
    pub fn new(sudoku: Sudoku) -> Result<Solver, ConstructionError> {
        let candidates = CandidateSet::from_sudoku(&sudoku)?;
        Ok(Solver {
            grid: sudoku,
            candidates,
        })
    }

    /// Searches for a solution.
    ///
    /// Returns `None` if the puzzle is proven unsolvable. If multiple
    /// solutions exist, the search stops at the first one; the order is
    /// fully deterministic (most constrained cell, row-major tie-break,
    /// ascending digits), so repeated calls return the same grid.
    pub fn solve(&self) -> Option<Sudoku> {
        Self::search(self.grid, self.candidates, 0)
    }

    /// Returns a read-only view of the solver's starting position:
    /// the clue digit or the remaining candidates of every cell.
    pub fn grid_state(&self) -> GridState {
        let mut states = [CellState::Candidates(crate::board::DigitSet::NONE); 81];
        for cell in Cell::all() {
            states[cell.as_index()] = match self.grid.get(cell) {
                Some(digit) => CellState::Digit(digit),
                None => CellState::Candidates(self.candidates.get(cell)),
            };
        }
        GridState(states)
    }

    fn search(grid: Sudoku, candidates: CandidateSet, depth: usize) -> Option<Sudoku> {
        if let Some(cell) = candidates.first_dead_cell(&grid) {
            trace!(
                "depth {}: dead end, ({}, {}) has no candidate",
                depth,
                cell.row(),
                cell.col()
            );
            return None;
        }
        // no candidates anywhere means no empty cell is left: an empty
        // cell without candidates would have failed the check above
        if candidates.n_candidates() == 0 {
            trace!("depth {}: solved", depth);
            return Some(grid);
        }

        let cell = most_constrained_cell(&candidates);
        trace!(
            "depth {}: branching on ({}, {}) with candidates {}",
            depth,
            cell.row(),
            cell.col(),
            candidates.get(cell)
        );
        for digit in candidates.get(cell) {
            trace!("depth {}: trying {}", depth, digit);
            let mut next_grid = grid;
            next_grid.set(cell, digit);
            let mut next_candidates = candidates;
            next_candidates.eliminate(cell, digit);

            if let Some(solution) = Self::search(next_grid, next_candidates, depth + 1) {
                return Some(solution);
            }
        }
        // every candidate failed, backtrack
        None
    }
}

// minimum-remaining-values heuristic
// ties go to the first cell in row-major order
fn most_constrained_cell(candidates: &CandidateSet) -> Cell {
    let mut best = Cell::new(0);
    let mut best_count = FIXED_CELL_COUNT;
    for cell in Cell::all() {
        let count = match candidates.get(cell).len() {
            0 => FIXED_CELL_COUNT,
            count => count,
        };
        if count < best_count {
            best = cell;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::DigitSet;

    #[test]
    fn selects_cell_with_fewest_candidates() {
        // row 0 filled except the last cell, which must take the 9
        let mut bytes = [0; 81];
        for col in 0..8 {
            bytes[col] = col as u8 + 1;
        }
        let solver = Solver::new(Sudoku::from_bytes(bytes).unwrap()).unwrap();
        let cell = most_constrained_cell(&solver.candidates);
        assert_eq!((cell.row(), cell.col()), (0, 8));
        assert_eq!(solver.candidates.get(cell).len(), 1);
    }

    #[test]
    fn grid_state_mixes_digits_and_candidates() {
        let mut bytes = [0; 81];
        for col in 0..8 {
            bytes[col] = col as u8 + 1;
        }
        let solver = Solver::new(Sudoku::from_bytes(bytes).unwrap()).unwrap();
        let states = solver.grid_state();
        assert_eq!(states.0[0], CellState::Digit(crate::Digit::new(1)));
        let mut only_nine = DigitSet::NONE;
        only_nine.insert(crate::Digit::new(9));
        assert_eq!(states.0[8], CellState::Candidates(only_nine));
    }
}

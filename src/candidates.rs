//! Per-cell candidate tracking and the propagation rule.

use crate::board::positions::{self, Cell};
use crate::board::{Digit, DigitSet, Sudoku};
use crate::errors::ConstructionError;

/// Records, for every cell, which digits are still legally placeable
/// given all digits currently fixed elsewhere in the cell's row, column
/// and block.
///
/// Fixed cells hold the empty set; they have no remaining candidates.
/// The search copies this structure at every branch point, so it stays
/// `Copy` and flat.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct CandidateSet([DigitSet; 81]);

impl CandidateSet {
    /// Builds the candidate set for a starting grid by propagating every clue.
    ///
    /// Conflicting clues are rejected up front: a fixed cell carries no
    /// candidates, so propagation alone never notices that two equal
    /// digits share a house.
    pub(crate) fn from_sudoku(sudoku: &Sudoku) -> Result<Self, ConstructionError> {
        if let Some((cell, digit)) = sudoku.first_conflicting_clue() {
            return Err(ConstructionError::ConflictingClues {
                digit: digit.get(),
                row: cell.row(),
                col: cell.col(),
            });
        }

        let mut candidates = CandidateSet([DigitSet::ALL; 81]);
        for cell in Cell::all() {
            if let Some(digit) = sudoku.get(cell) {
                candidates.eliminate(cell, digit);
            }
        }

        if let Some(cell) = candidates.first_dead_cell(sudoku) {
            return Err(ConstructionError::UnsatisfiableCell {
                row: cell.row(),
                col: cell.col(),
            });
        }
        Ok(candidates)
    }

    /// Removes every candidate invalidated by placing `digit` at `cell`:
    /// the digit disappears from the cell's column, row and block, and
    /// the cell itself keeps no candidates at all.
    ///
    /// Idempotent. Only touches candidates, never the grid.
    pub(crate) fn eliminate(&mut self, cell: Cell, digit: Digit) {
        for other in positions::col_cells(cell.col()) {
            self.0[other.as_index()].remove(digit);
        }
        for other in positions::row_cells(cell.row()) {
            self.0[other.as_index()].remove(digit);
        }
        for other in positions::block_cells(cell.block()) {
            self.0[other.as_index()].remove(digit);
        }
        self.0[cell.as_index()] = DigitSet::NONE;
    }

    /// Reports the first empty cell, in row-major order, that has no
    /// candidate left. Such a cell proves the configuration dead.
    pub(crate) fn first_dead_cell(&self, sudoku: &Sudoku) -> Option<Cell> {
        Cell::all().find(|&cell| sudoku.get(cell).is_none() && self.get(cell).is_empty())
    }

    /// Total number of remaining candidates across the board.
    ///
    /// Zero means every cell is fixed, provided the validity check
    /// already ruled out empty cells without candidates.
    pub(crate) fn n_candidates(&self) -> u32 {
        self.0.iter().map(|set| u32::from(set.len())).sum()
    }

    pub(crate) fn get(&self, cell: Cell) -> DigitSet {
        self.0[cell.as_index()]
    }
}

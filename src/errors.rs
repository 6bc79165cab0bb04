//! Errors reported when a solver cannot be constructed from a puzzle.
#[cfg(doc)]
use crate::{Solver, Sudoku};

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Solver::new`]
///
/// The starting grid breaks the rules outright, before any search.
/// An exhausted search is not an error; [`Solver::solve`] reports it
/// by returning `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ConstructionError {
    /// Propagating the clues left an empty cell with no legal digit.
    #[error("puzzle has an unsatisfiable cell at ({row}, {col})")]
    UnsatisfiableCell {
        /// Row index of the dead cell, 0 to 8.
        row: u8,
        /// Column index of the dead cell, 0 to 8.
        col: u8,
    },
    /// The same digit is given twice in one row, column or block.
    ///
    /// Reports the second clue of the pair in row-major scan order.
    #[error("clue {digit} at ({row}, {col}) repeats an earlier clue in the same house")]
    ConflictingClues {
        /// The duplicated digit, 1 to 9.
        digit: u8,
        /// Row index of the offending clue, 0 to 8.
        row: u8,
        /// Column index of the offending clue, 0 to 8.
        col: u8,
    },
}

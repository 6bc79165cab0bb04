//! Errors that may be encountered when reading a sudoku from a string
use crate::board::positions::Cell;

/// An invalid sudoku entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("cell {cell} contains invalid character '{ch}'")]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first line, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    pub fn row(self) -> u8 {
        Cell::new(self.cell).row()
    }
    /// Column index from 0..=8, leftmost col is 0
    pub fn col(self) -> u8 {
        Cell::new(self.cell).col()
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom
    pub fn block(self) -> u8 {
        Cell::new(self.cell).block()
    }
}

/// A structure representing an error caused when parsing the sudoku
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LineParseError {
    /// Accepted values are the numbers 1 to 9 and '0', '.' or '_' for empty cells
    #[error(transparent)]
    InvalidEntry(#[from] InvalidEntry),
    /// Line ends before 81 cells are supplied. Contains the number of cells found.
    #[error("line contains {0} cells instead of the required 81")]
    NotEnoughCells(u8),
    /// Returned if more than 81 valid cell positions are supplied.
    /// Comments after the 81st cell must be delimited by whitespace.
    #[error("line contains more than 81 cells or is missing a comment delimiter")]
    TooManyCells,
}

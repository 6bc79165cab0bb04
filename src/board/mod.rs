//! Types for cells, digits and other things on a sudoku board
mod cell_state;
mod digit;
mod digit_set;
pub(crate) mod positions;
mod sudoku;
mod grid_state;

pub(crate) use self::positions::Cell;

pub use self::{
    cell_state::CellState,
    digit::Digit,
    digit_set::DigitSet,
    grid_state::GridState,
    sudoku::Sudoku,
};

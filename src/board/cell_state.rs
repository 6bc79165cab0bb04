use super::{Digit, DigitSet};
use std::fmt;

/// Contains either a digit or all the remaining candidates for an unsolved cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(DigitSet),
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CellState::Digit(digit) => write!(f, "{}", digit),
            CellState::Candidates(set) if set.is_empty() => write!(f, "_"),
            CellState::Candidates(set) => write!(f, "{}", set),
        }
    }
}

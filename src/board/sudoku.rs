use super::{positions, Cell, Digit, DigitSet};
use crate::errors::{ConstructionError, FromBytesError};
use crate::parse_errors::{InvalidEntry, LineParseError};
use crate::Solver;
use std::fmt;

/// The main structure representing a puzzle, solved or unsolved.
///
/// Cells are stored in row-major order; `0` marks an empty cell,
/// `1` to `9` a fixed digit.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Sudoku([u8; 81]);

impl Sudoku {
    /// Creates a sudoku from a byte array.
    ///
    /// `0` marks an empty cell. Returns an error if any entry is greater than 9.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&num| num > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from an 81 character line.
    ///
    /// Accepted entries are the digits `1` to `9` and `0`, `.` or `_`
    /// for empty cells. A comment may follow the 81st cell, separated
    /// by whitespace.
    pub fn from_str_line(s: &str) -> Result<Sudoku, LineParseError> {
        let mut grid = [0; 81];
        let mut n_cells = 0_usize;
        for ch in s.chars() {
            if n_cells == 81 {
                if ch.is_whitespace() {
                    break;
                }
                return Err(LineParseError::TooManyCells);
            }
            grid[n_cells] = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' | '_' => 0,
                _ => {
                    return Err(LineParseError::InvalidEntry(InvalidEntry {
                        cell: n_cells as u8,
                        ch,
                    }))
                }
            };
            n_cells += 1;
        }
        if n_cells < 81 {
            return Err(LineParseError::NotEnoughCells(n_cells as u8));
        }
        Ok(Sudoku(grid))
    }

    /// Returns the cell contents in row-major order, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Renders the sudoku as an 81 character line, `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&num| match num {
                0 => '.',
                _ => (num + b'0') as char,
            })
            .collect()
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&num| num != 0).count() as u8
    }

    /// Checks that the sudoku is fully filled and no row, column or
    /// block contains a duplicate digit.
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            self.house_complete(positions::row_cells(i))
                && self.house_complete(positions::col_cells(i))
                && self.house_complete(positions::block_cells(i))
        })
    }

    fn house_complete(&self, cells: impl Iterator<Item = Cell>) -> bool {
        let mut seen = DigitSet::NONE;
        for cell in cells {
            match self.get(cell) {
                Some(digit) => seen.insert(digit),
                None => return false,
            }
        }
        seen == DigitSet::ALL
    }

    /// Constructs a solver for this puzzle and searches for a solution.
    ///
    /// Convenience for [`Solver::new`] followed by [`Solver::solve`].
    /// A malformed puzzle is reported as an error, an exhausted search
    /// as `Ok(None)`.
    pub fn solve_one(self) -> Result<Option<Sudoku>, ConstructionError> {
        Solver::new(self).map(|solver| solver.solve())
    }

    pub(crate) fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    pub(crate) fn set(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }

    /// Reports the first filled cell whose digit already appears
    /// earlier in the same row, column or block. Scan order is
    /// row-major, so the second of a conflicting pair is returned.
    pub(crate) fn first_conflicting_clue(&self) -> Option<(Cell, Digit)> {
        let mut rows = [DigitSet::NONE; 9];
        let mut cols = [DigitSet::NONE; 9];
        let mut blocks = [DigitSet::NONE; 9];
        for cell in Cell::all() {
            let digit = match self.get(cell) {
                Some(digit) => digit,
                None => continue,
            };
            let row = &mut rows[cell.row() as usize];
            let col = &mut cols[cell.col() as usize];
            let block = &mut blocks[cell.block() as usize];
            if row.contains(digit) || col.contains(digit) || block.contains(digit) {
                return Some((cell, digit));
            }
            row.insert(digit);
            col.insert(digit);
            block.insert(digit);
        }
        None
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, &num) in self.0.iter().enumerate() {
            let (row, col) = (idx as u8 / 9, idx as u8 % 9);
            match (row, col) {
                (0, 0) => (),
                (3, 0) | (6, 0) => write!(f, "\n\n")?, // blank line between bands
                (_, 0) => writeln!(f)?,
                (_, 3) | (_, 6) => write!(f, " ")?, // gap between stacks
                _ => (),
            }
            match num {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", num)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    #[test]
    fn line_roundtrip() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
        let sudoku = Sudoku::from_str_line(line).unwrap();
        assert_eq!(sudoku.to_str_line(), line);
        assert_eq!(sudoku.n_clues(), 27);
    }

    #[test]
    fn line_with_comment() {
        let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3.. project euler grid 1";
        assert!(Sudoku::from_str_line(line).is_ok());
    }

    #[test]
    fn line_parse_errors() {
        assert_eq!(
            Sudoku::from_str_line("..3.2"),
            Err(LineParseError::NotEnoughCells(5))
        );
        assert_eq!(
            Sudoku::from_str_line(&format!("{}5", SOLVED)),
            Err(LineParseError::TooManyCells)
        );
        assert_eq!(
            Sudoku::from_str_line("..x"),
            Err(LineParseError::InvalidEntry(InvalidEntry { cell: 2, ch: 'x' }))
        );
    }

    #[test]
    fn from_bytes_rejects_large_entries() {
        let mut bytes = [0; 81];
        bytes[13] = 10;
        assert!(Sudoku::from_bytes(bytes).is_err());
    }

    #[test]
    fn solved_detection() {
        let solved = Sudoku::from_str_line(SOLVED).unwrap();
        assert!(solved.is_solved());

        // swapping two cells of a row keeps it full but breaks the columns
        let mut bytes = solved.to_bytes();
        bytes.swap(0, 1);
        let broken = Sudoku::from_bytes(bytes).unwrap();
        assert!(!broken.is_solved());

        let unfinished = Sudoku::from_bytes([0; 81]).unwrap();
        assert!(!unfinished.is_solved());
    }

    #[test]
    fn block_display() {
        let solved = Sudoku::from_str_line(SOLVED).unwrap();
        let rendered = format!("{}", solved);
        assert!(rendered.starts_with("483 921 657\n967 345 821\n251 876 493\n\n548"));
    }
}

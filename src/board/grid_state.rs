use super::CellState;
use std::fmt;

/// A snapshot of the solver's view of the board: one [`CellState`] per cell.
///
/// The `Display` impl renders fixed digits and remaining candidate sets in a
/// bordered grid. Columns are padded to the widest entry of each column.
///
/// ```text
/// ┌─────────┬───────────────┬─────────┐
/// │ 4  8  3 │ 9    2    1   │ 6  5  7 │
/// │ 9  6  7 │ 345  34   45  │ 8  2  1 │
/// ...
/// ```
pub struct GridState(pub(crate) [CellState; 81]);

impl GridState {
    fn column_widths(&self) -> [usize; 9] {
        let mut widths = [1; 9];
        for col in 0..9 {
            widths[col] = (0..9)
                .map(|row| match self.0[row * 9 + col] {
                    CellState::Digit(_) => 1,
                    CellState::Candidates(cands) => std::cmp::max(1, cands.len() as usize),
                })
                .max()
                .unwrap();
        }
        widths
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        // each cell is padded by one space on both sides
        let stack_width =
            |stack: usize| widths[stack * 3..stack * 3 + 3].iter().sum::<usize>() + 6;

        let horizontal_rule = |f: &mut fmt::Formatter<'_>, left, middle, right: &str| {
            write!(
                f,
                "{}{}{}{}{}{}{}",
                left,
                "─".repeat(stack_width(0)),
                middle,
                "─".repeat(stack_width(1)),
                middle,
                "─".repeat(stack_width(2)),
                right,
            )
        };

        horizontal_rule(f, "┌", "┬", "┐\n")?;
        for band in 0..3 {
            if band != 0 {
                horizontal_rule(f, "├", "┼", "┤\n")?;
            }
            for row in band * 3..band * 3 + 3 {
                write!(f, "│")?;
                for (col, &width) in widths.iter().enumerate() {
                    // pad via an owned string; width specs don't reach
                    // through custom Display impls
                    let entry = self.0[row * 9 + col].to_string();
                    write!(f, " {:<1$} ", entry, width)?;
                    if col % 3 == 2 {
                        write!(f, "│")?;
                    }
                }
                writeln!(f)?;
            }
        }
        horizontal_rule(f, "└", "┴", "┘")
    }
}

#[test]
fn displays_solved_grid() {
    use crate::{Solver, Sudoku};
    let line = "483921657967345821251876493548132976729564138136798245372689514814253769695417382";
    let solver = Solver::new(Sudoku::from_str_line(line).unwrap()).unwrap();
    let expected = "\
┌─────────┬─────────┬─────────┐
│ 4  8  3 │ 9  2  1 │ 6  5  7 │
│ 9  6  7 │ 3  4  5 │ 8  2  1 │
│ 2  5  1 │ 8  7  6 │ 4  9  3 │
├─────────┼─────────┼─────────┤
│ 5  4  8 │ 1  3  2 │ 9  7  6 │
│ 7  2  9 │ 5  6  4 │ 1  3  8 │
│ 1  3  6 │ 7  9  8 │ 2  4  5 │
├─────────┼─────────┼─────────┤
│ 3  7  2 │ 6  8  9 │ 5  1  4 │
│ 8  1  4 │ 2  5  3 │ 7  6  9 │
│ 6  9  5 │ 4  1  7 │ 3  8  2 │
└─────────┴─────────┴─────────┘";
    assert_eq!(expected, format!("{}", solver.grid_state()));
}

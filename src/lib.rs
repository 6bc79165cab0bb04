#![warn(missing_docs)]
//! A sudoku solver built on candidate propagation and backtracking search.
//!
//! ## Overview
//!
//! The solver tracks, for every cell, the set of digits that are still
//! legally placeable. Fixing a digit removes it from the candidate sets
//! of the cell's row, column and 3×3 block; the search then branches on
//! the empty cell with the fewest remaining candidates and backtracks
//! from dead ends. Every branch works on its own copy of the board, so
//! backtracking is just dropping the copy.
//!
//! Puzzles that break the sudoku rules outright are rejected when the
//! solver is constructed. A well-formed puzzle without any solution is
//! not an error: [`Solver::solve`] reports it by returning `None`.
//!
//! ## Example
//!
//! ```
//! use propsolve::{Solver, Sudoku};
//!
//! let line = "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..";
//!
//! let sudoku = Sudoku::from_str_line(line).unwrap();
//! let solver = Solver::new(sudoku).unwrap();
//! if let Some(solution) = solver.solve() {
//!     println!("{}", solution);
//!     assert!(solution.is_solved());
//! }
//! ```

mod board;
mod candidates;
pub mod errors;
pub mod parse_errors;
mod solver;

pub use crate::board::{CellState, Digit, DigitSet, GridState, Sudoku};
pub use crate::solver::Solver;

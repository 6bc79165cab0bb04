use propsolve::{Solver, Sudoku};
use std::io::{self, BufRead};

// Reads line-format puzzles from stdin, one per line, and prints the
// solved line, "no solution" or the reason the puzzle was rejected.
// Set RUST_LOG=trace to watch the search.
fn main() {
    env_logger::init();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("{}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let sudoku = match Sudoku::from_str_line(&line) {
            Ok(sudoku) => sudoku,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        match Solver::new(sudoku) {
            Ok(solver) => match solver.solve() {
                Some(solution) => println!("{}", solution.to_str_line()),
                None => println!("no solution"),
            },
            Err(err) => eprintln!("{}", err),
        }
    }
}

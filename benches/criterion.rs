use criterion::{criterion_group, criterion_main, Criterion};
use propsolve::{Solver, Sudoku};

fn read_sudokus(sudokus_str: &str) -> Vec<Sudoku> {
    sudokus_str
        .lines()
        .map(|line| Sudoku::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

fn solve_easy_sudokus(c: &mut Criterion) {
    let sudokus = read_sudokus(
        "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..
2...8.3...6..7..84.3.5..2.9...1.54.8.........4.27.6...3.1..7.4.72..4..6...4.1...3
...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...",
    );
    let mut iter = sudokus.iter().cycle().cloned();
    c.bench_function("solve_easy_sudokus", |b| {
        b.iter(|| {
            let sudoku = iter.next().unwrap();
            Solver::new(sudoku).unwrap().solve()
        })
    });
}

fn solve_empty_grid(c: &mut Criterion) {
    let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
    c.bench_function("solve_empty_grid", |b| {
        b.iter(|| Solver::new(sudoku).unwrap().solve())
    });
}

criterion_group!(benches, solve_easy_sudokus, solve_empty_grid);
criterion_main!(benches);

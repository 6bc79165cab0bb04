// Cell indexing and house membership.
//
//        0    1    2    3    4    5    6    7    8
//      ┌────┬────┬────┬────┬────┬────┬────┬────┬────┐
//   0  │ 00 │ 01 │ 02 │ 03 │ 04 │ 05 │ 06 │ 07 │ 08 │
//   1  │ 09 │ 10 │ 11 │ 12 │ 13 │ 14 │ 15 │ 16 │ 17 │
//      ⋮                    ⋮                       ⋮
//   8  │ 72 │ 73 │ 74 │ 75 │ 76 │ 77 │ 78 │ 79 │ 80 │
//      └────┴────┴────┴────┴────┴────┴────┴────┴────┘
//
// Blocks are numbered left to right, top to bottom; the block of a cell
// is derived from its row and column, never stored.

/// A cell position on the board, from 0 to 80 in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub(crate) struct Cell(u8);

impl Cell {
    pub(crate) fn new(index: u8) -> Self {
        assert!(index < 81);
        Cell(index)
    }

    pub(crate) fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Cell(row * 9 + col)
    }

    /// Row index from 0 to 8, topmost row is 0.
    pub(crate) fn row(self) -> u8 {
        self.0 / 9
    }

    /// Column index from 0 to 8, leftmost column is 0.
    pub(crate) fn col(self) -> u8 {
        self.0 % 9
    }

    /// Block index from 0 to 8, numbered left to right, top to bottom.
    pub(crate) fn block(self) -> u8 {
        3 * (self.row() / 3) + self.col() / 3
    }

    pub(crate) fn as_index(self) -> usize {
        self.0 as usize
    }

    /// All cells in row-major order.
    pub(crate) fn all() -> impl Iterator<Item = Cell> {
        (0..81).map(Cell)
    }
}

pub(crate) fn row_cells(row: u8) -> impl Iterator<Item = Cell> {
    (0..9).map(move |col| Cell::from_row_col(row, col))
}

pub(crate) fn col_cells(col: u8) -> impl Iterator<Item = Cell> {
    (0..9).map(move |row| Cell::from_row_col(row, col))
}

pub(crate) fn block_cells(block: u8) -> impl Iterator<Item = Cell> {
    assert!(block < 9);
    let base_row = block / 3 * 3;
    let base_col = block % 3 * 3;
    (0..9).map(move |i| Cell::from_row_col(base_row + i / 3, base_col + i % 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_col_block() {
        let cell = Cell::new(40); // center of the board
        assert_eq!(cell.row(), 4);
        assert_eq!(cell.col(), 4);
        assert_eq!(cell.block(), 4);

        let cell = Cell::from_row_col(8, 0);
        assert_eq!(cell.as_index(), 72);
        assert_eq!(cell.block(), 6);
    }

    #[test]
    fn block_membership() {
        let cells: Vec<usize> = block_cells(4).map(Cell::as_index).collect();
        assert_eq!(cells, [30, 31, 32, 39, 40, 41, 48, 49, 50]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_cell() {
        Cell::new(81);
    }
}

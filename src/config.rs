/// Cells per row and per column.
pub const BOARD_SIDE: usize = 3;
/// Total number of cells, addressed row-major as `0..CELL_COUNT`.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const NUM_WIN_LINES: usize = 8;

/// A winning triple of cell indices.
pub type WinLine = [usize; 3];

/// Every winning configuration, in the order they are checked.
pub const WIN_LINES: [WinLine; NUM_WIN_LINES] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

//! The 3×3 grid, stored as one occupancy bitboard per mark.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Player};
use crate::config::{WinLine, BOARD_SIDE, CELL_COUNT, WIN_LINES};
use core::fmt;

pub type BB = BitBoard<u16, BOARD_SIDE>;

/// Bitboard with the three cells of `line` set.
pub fn line_mask(line: &WinLine) -> BB {
    BB::from_raw(line.iter().fold(0u16, |acc, &idx| acc | (1 << idx)))
}

/// Cell occupancy for both players. The two bitboards never intersect.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Build a board from a row-major list of cells.
    pub fn from_cells(cells: &[Cell; CELL_COUNT]) -> Self {
        let mut board = Board::new();
        for (idx, cell) in cells.iter().enumerate() {
            if let Some(player) = cell.owner() {
                // every index of a CELL_COUNT array is in range and distinct
                let _ = board.place(idx, player);
            }
        }
        board
    }

    /// Contents of cell `index`, or `None` if the index is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        if index >= CELL_COUNT {
            return None;
        }
        if self.x.get(index).unwrap_or(false) {
            Some(Cell::X)
        } else if self.o.get(index).unwrap_or(false) {
            Some(Cell::O)
        } else {
            Some(Cell::Empty)
        }
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        core::array::from_fn(|idx| self.cell(idx).unwrap_or(Cell::Empty))
    }

    /// Occupancy mask of `player`'s marks.
    pub fn marks(&self, player: Player) -> BB {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.marks(player).count_ones()
    }

    /// Total number of occupied cells.
    pub fn occupied(&self) -> usize {
        (self.x | self.o).count_ones()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        (self.x | self.o).is_full()
    }

    /// Put `player`'s mark on an empty cell.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        if (self.x | self.o).get(index)? {
            return Err(BoardError::CellOccupied);
        }
        match player {
            Player::X => self.x.set(index)?,
            Player::O => self.o.set(index)?,
        }
        Ok(())
    }

    /// First line in `WIN_LINES` order fully owned by `player`.
    pub fn winning_line(&self, player: Player) -> Option<WinLine> {
        let marks = self.marks(player);
        WIN_LINES
            .iter()
            .find(|line| marks.contains_all(line_mask(line)))
            .copied()
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.x.clear_all();
        self.o.clear_all();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells().chunks(BOARD_SIDE) {
            write!(f, " ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl From<&Board> for [Cell; CELL_COUNT] {
    fn from(board: &Board) -> Self {
        board.cells()
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Board::from_cells(&cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_masks_have_three_cells() {
        for line in WIN_LINES.iter() {
            let mask = line_mask(line);
            assert_eq!(mask.count_ones(), 3);
            assert_eq!(mask.iter_set_bits().collect::<Vec<_>>(), line.to_vec());
        }
    }

    #[test]
    fn marks_never_overlap() {
        let mut board = Board::new();
        board.place(4, Player::X).unwrap();
        assert_eq!(board.place(4, Player::O), Err(BoardError::CellOccupied));
        assert_eq!(board.place(4, Player::X), Err(BoardError::CellOccupied));
        assert!((board.marks(Player::X) & board.marks(Player::O)).is_empty());
    }

    #[test]
    fn first_declared_line_wins() {
        // X on 0,1,2 and 0,3,6 at once: the row is declared first
        let board = Board::from_cells(&[
            Cell::X, Cell::X, Cell::X,
            Cell::X, Cell::O, Cell::O,
            Cell::X, Cell::O, Cell::O,
        ]);
        assert_eq!(board.winning_line(Player::X), Some([0, 1, 2]));
    }
}

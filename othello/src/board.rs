//! Board data model: cells, players and the 8x8 grid.

use std::fmt;

use crate::error::OthelloError;

/// Board side length. Only 8x8 Othello is supported.
pub const SIZE: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// An 8x8 grid of cells. Pure storage: all rule logic lives in [`crate::rules`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a new board with the standard initial Othello setup:
    /// (3,3) and (4,4) White, (3,4) and (4,3) Black, everything else empty.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];

        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;

        Board { cells }
    }

    /// Build a board from an explicit cell matrix. Useful for tests and for
    /// analysing positions that did not come from a played game.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Range-checked cell access for callers outside the crate.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OthelloError> {
        if row >= SIZE || col >= SIZE {
            return Err(OthelloError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Unchecked cell access for rule-engine walks that stay in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Count the stones of one color.
    pub fn count_stones(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    /// Count the empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Textual grid with A-H column labels and 1-8 row labels. This is the
/// rendering handed to external move-suggestion sources and demos.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{}", i + 1)?;
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_new_initial_setup() {
        let board = Board::new();

        assert_eq!(board.at(3, 3), Cell::White);
        assert_eq!(board.at(3, 4), Cell::Black);
        assert_eq!(board.at(4, 3), Cell::Black);
        assert_eq!(board.at(4, 4), Cell::White);

        for i in 0..SIZE {
            for j in 0..SIZE {
                if (i, j) != (3, 3) && (i, j) != (3, 4) && (i, j) != (4, 3) && (i, j) != (4, 4) {
                    assert_eq!(board.at(i, j), Cell::Empty);
                }
            }
        }
    }

    #[test]
    fn test_initial_counts() {
        let board = Board::new();
        assert_eq!(board.count_stones(Player::Black), 2);
        assert_eq!(board.count_stones(Player::White), 2);
        assert_eq!(board.empty_count(), 60);
        assert!(!board.is_full());
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
    }

    #[test]
    fn test_player_to_cell() {
        assert_eq!(Player::Black.to_cell(), Cell::Black);
        assert_eq!(Player::White.to_cell(), Cell::White);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert!(matches!(
            board.get(8, 0),
            Err(OthelloError::OutOfRange { row: 8, col: 0 })
        ));
        assert!(matches!(board.get(0, 8), Err(OthelloError::OutOfRange { .. })));
        assert_eq!(board.get(3, 3).unwrap(), Cell::White);
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_cells([[Cell::Black; SIZE]; SIZE]);
        assert!(board.is_full());
        assert_eq!(board.count_stones(Player::Black), 64);
        assert_eq!(board.count_stones(Player::White), 0);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  A B C D E F G H");
        assert_eq!(lines[4], "4 . . . W B . . .");
        assert_eq!(lines[5], "5 . . . B W . . .");
    }
}

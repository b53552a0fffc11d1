use serde::Serialize;

use super::letter::Letter;

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 15;

/// A cell coordinate on the board.
///
/// Both coordinates are guaranteed to be within `0..BOARD_SIZE`, so any
/// `Position` can be used to index a [`Board`] without further checks.
///
/// # Example
///
/// ```
/// use wordgrid_engine::{BOARD_SIZE, Position};
///
/// let pos = Position::new(7, 7).unwrap();
/// assert_eq!(pos, Position::CENTER);
/// assert_eq!(pos.right().unwrap().col(), 8);
/// assert!(Position::new(BOARD_SIZE, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub const CENTER: Self = Self {
        row: BOARD_SIZE / 2,
        col: BOARD_SIZE / 2,
    };

    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row == 0 {
            return None;
        }
        Self::new(self.row - 1, self.col)
    }

    #[must_use]
    pub const fn down(self) -> Option<Self> {
        Self::new(self.row + 1, self.col)
    }

    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col == 0 {
            return None;
        }
        Self::new(self.row, self.col - 1)
    }

    #[must_use]
    pub const fn right(self) -> Option<Self> {
        Self::new(self.row, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell is already occupied")]
pub struct CellOccupiedError;

/// The 15×15 grid of placed letters.
///
/// Cells start empty and, once a letter is set, are never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Letter>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const SIZE: usize = BOARD_SIZE;

    pub const EMPTY: Self = Self {
        cells: [[None; BOARD_SIZE]; BOARD_SIZE],
    };

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Letter> {
        self.cells[pos.row][pos.col]
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Sets `letter` at `pos` if the cell is empty.
    pub fn try_set(&mut self, pos: Position, letter: Letter) -> Result<(), CellOccupiedError> {
        if !self.is_empty_at(pos) {
            return Err(CellOccupiedError);
        }
        self.cells[pos.row][pos.col] = Some(letter);
        Ok(())
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Letter>; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player markers
pub mod player;

pub use player::Player;

/// Number of rows on the board
pub const NUM_ROWS: usize = 3;

/// Number of columns on the board
pub const NUM_COLS: usize = 3;

/// Board cell
/// `None`: Empty
/// `Some(player)`: Occupied by `player`
pub type Cell = Option<Player>;

/// Error when a linear index falls outside the board
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("position {0} is outside the board (valid positions are {min}-{max})", min = Position::MIN, max = Position::MAX)]
pub struct InvalidPosition(pub u8);

/// Linear board position, 1-based
///
/// Positions run left to right, top to bottom:
/// `1 2 3` on the top row, `4 5 6` in the middle, `7 8 9` on the bottom.
/// Can only be constructed through [`Position::new`], so a value of this
/// type always denotes one of the 9 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(u8);

impl Position {
    /// Smallest valid linear position
    pub const MIN: u8 = 1;

    /// Largest valid linear position
    pub const MAX: u8 = (NUM_ROWS * NUM_COLS) as u8;

    /// Validates a raw linear index
    pub const fn new(pos: u8) -> Result<Self, InvalidPosition> {
        if pos >= Self::MIN && pos <= Self::MAX {
            Ok(Self(pos))
        } else {
            Err(InvalidPosition(pos))
        }
    }

    /// Row index in `[0, NUM_ROWS)`
    pub const fn row(&self) -> usize {
        (self.0 as usize - 1) / NUM_COLS
    }

    /// Column index in `[0, NUM_COLS)`
    pub const fn col(&self) -> usize {
        (self.0 as usize - 1) % NUM_COLS
    }

    const fn from_row_col(row: usize, col: usize) -> Self {
        Self((row * NUM_COLS + col + 1) as u8)
    }
}

impl TryFrom<u8> for Position {
    type Error = InvalidPosition;

    fn try_from(pos: u8) -> Result<Self, Self::Error> {
        Self::new(pos)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tic-tac-toe board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([[Cell; NUM_COLS]; NUM_ROWS]);

impl Board {
    /// New empty board
    pub fn new() -> Self {
        Self([[None; NUM_COLS]; NUM_ROWS])
    }

    /// Occupies the cell at `pos` with `player` if it is empty
    ///
    /// A move targeting an occupied cell is silently discarded; enforcing
    /// anything stronger is the caller's business. This is the only way the
    /// grid is ever mutated.
    pub fn apply_move(&mut self, pos: Position, player: Player) {
        let cell = &mut self.0[pos.row()][pos.col()];
        if cell.is_none() {
            *cell = Some(player);
        }
    }

    /// Check if any of the 8 lines is uniformly occupied by one player
    pub fn has_won(&self) -> bool {
        self.lines()
            .any(|line| matches!(line.into_iter().all_equal_value(), Ok(Some(_))))
    }

    /// Check if every cell is occupied, regardless of win status
    ///
    /// A full board that also completes a line is a win, not a draw, so
    /// callers check [`Board::has_won`] first.
    pub fn has_drawn(&self) -> bool {
        self.0.iter().flatten().all(Cell::is_some)
    }

    /// Iterate over the positions of the empty cells
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        self.0.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, cell)| {
                if cell.is_none() {
                    Some(Position::from_row_col(row, col))
                } else {
                    None
                }
            })
        })
    }

    /// The 3 rows, 3 columns and 2 diagonals
    fn lines(&self) -> impl Iterator<Item = [Cell; NUM_COLS]> {
        let rows = (0..NUM_ROWS).map(|row| self.0[row]);
        let cols = (0..NUM_COLS).map(|col| std::array::from_fn(|row| self.0[row][col]));
        let diagonals = [
            std::array::from_fn(|i| self.0[i][i]),
            std::array::from_fn(|i| self.0[i][NUM_COLS - 1 - i]),
        ];
        rows.chain(cols).chain(diagonals)
    }
}

impl Default for Board {
    /// Default board is an empty board
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.row()][pos.col()]
    }
}

/// Board display
///
/// Empty cells show their linear position (1-9) as a placement hint,
/// occupied cells show the player's marker.
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cols) in self.0.iter().enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for (col, cell) in cols.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Some(player) => write!(f, " {player} ")?,
                    None => write!(f, " {pos} ", pos = Position::from_row_col(row, col))?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Square board storage and geometry helpers.

use super::types::CellState;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest side length a configuration may ask for.
pub const MAX_BOARD_SIZE: usize = 16;

/// A zero-based (row, column) board coordinate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    new,
    derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub column: usize,
}

impl Coord {
    /// Shifts the coordinate, returning `None` if it would leave the first quadrant.
    pub fn offset(self, rows: isize, columns: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(rows)?,
            column: self.column.checked_add_signed(columns)?,
        })
    }
}

/// N×N board of cell states stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// # Panics
    ///
    /// If `size * size` overflows. Configured sizes are bounded by
    /// [`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of positions.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns true if the coordinate addresses a position on this board.
    pub fn is_on_board(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    /// Row-major index of a coordinate.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.is_on_board(coord)
            .then(|| coord.row * self.size + coord.column)
    }

    /// Coordinate of a row-major index.
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        (index < self.cells.len()).then(|| Coord::new(index / self.size, index % self.size))
    }

    /// Gets the state at a coordinate, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.index_of(coord).map(|index| self.cells[index])
    }

    /// Writes a state, returning what was there before.
    ///
    /// Returns `None` and leaves the board untouched when the coordinate is
    /// off the board.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Option<CellState> {
        let index = self.index_of(coord)?;
        Some(std::mem::replace(&mut self.cells[index], state))
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|index| Coord::new(index / self.size, index % self.size))
    }

    /// Number of positions holding the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Returns true if no position is empty.
    pub fn is_full(&self) -> bool {
        !self.has_free_cells()
    }

    /// Returns true if at least one position is empty.
    pub fn has_free_cells(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Returns true if the coordinate lies on the top-left to bottom-right diagonal.
    pub fn on_principal_diagonal(&self, coord: Coord) -> bool {
        self.is_on_board(coord) && coord.row == coord.column
    }

    /// Returns true if the coordinate lies on the top-right to bottom-left diagonal.
    pub fn on_secondary_diagonal(&self, coord: Coord) -> bool {
        self.is_on_board(coord) && coord.row + coord.column == self.size - 1
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Coord; 4] {
        let last = self.size.saturating_sub(1);
        [
            Coord::new(0, 0),
            Coord::new(0, last),
            Coord::new(last, 0),
            Coord::new(last, last),
        ]
    }

    /// Returns true if the coordinate is one of the four corners.
    pub fn is_corner(&self, coord: Coord) -> bool {
        self.corners().contains(&coord)
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

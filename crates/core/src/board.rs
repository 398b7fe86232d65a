//! Board module - manages the grid of locked cells
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked it. It uses a flat, fixed-size array, so the row count can
//! never change: clearing a row compacts the cells in place and refills the top.
//!
//! Coordinates are `(row, col)`: row 0 is the top, row 19 the bottom. Rows
//! above the board (negative) never collide, which lets a freshly spawned piece
//! enter from above.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single line clear.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Why a piece could not be locked into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockError {
    /// A cell lies above row 0: the piece never fully entered the board.
    AboveTop { row: i8, col: i8 },
    /// A cell lies at or below `BOARD_HEIGHT`.
    BelowBottom { row: i8, col: i8 },
    /// A cell lies outside the left or right wall.
    OutsideWalls { row: i8, col: i8 },
    /// A cell is already occupied.
    Occupied { row: i8, col: i8 },
}

impl fmt::Display for LockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockError::AboveTop { row, col } => {
                write!(f, "cell ({row}, {col}) is above the top of the board")
            }
            LockError::BelowBottom { row, col } => {
                write!(f, "cell ({row}, {col}) is below the bottom of the board")
            }
            LockError::OutsideWalls { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the board walls")
            }
            LockError::Occupied { row, col } => write!(f, "cell ({row}, {col}) is already occupied"),
        }
    }
}

impl std::error::Error for LockError {}

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff `0 <= col < BOARD_WIDTH`.
    #[inline]
    pub fn is_inside_horizontally(&self, col: i8) -> bool {
        col >= 0 && col < BOARD_WIDTH as i8
    }

    /// Whether a piece cell at (row, col) would collide.
    ///
    /// Rows above the board are never blocked. Rows at or past the bottom
    /// always are. Otherwise the cell blocks when it is occupied (an
    /// out-of-range column on a visible row also reports blocked).
    #[inline]
    pub fn is_blocked(&self, row: i8, col: i8) -> bool {
        if row < 0 {
            return false;
        }
        if row >= BOARD_HEIGHT as i8 {
            return true;
        }
        !matches!(self.get(row, col), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = row * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Lock piece cells onto the board with the given kind.
    ///
    /// Every cell is checked before any is written, so a failed lock leaves the
    /// board untouched. A cell above row 0 fails as well as one past the bottom:
    /// both mean the piece cannot be placed on the board.
    pub fn lock(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> Result<(), LockError> {
        for &(row, col) in cells {
            if row < 0 {
                return Err(LockError::AboveTop { row, col });
            }
            if row >= BOARD_HEIGHT as i8 {
                return Err(LockError::BelowBottom { row, col });
            }
            if !self.is_inside_horizontally(col) {
                return Err(LockError::OutsideWalls { row, col });
            }
            if self.is_occupied(row, col) {
                return Err(LockError::Occupied { row, col });
            }
        }

        for &(row, col) in cells {
            self.set(row, col, Some(kind));
        }

        Ok(())
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (bottom to top, as indices into the board before compaction).
    ///
    /// Non-full rows are compacted towards the bottom with a two-pointer pass and
    /// the freed rows at the top are emptied, so any number of full rows,
    /// adjacent or not, is removed in one call.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_row = BOARD_HEIGHT as usize;

        for read_row in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_row * width].fill(None);

        cleared_rows
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Write the board as compact cell codes (0 = empty).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map_or(0, |kind| kind.code());
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Fill a whole row with the given kind (for tests and benches).
    pub fn fill_row(&mut self, row: i8, kind: PieceKind) {
        for col in 0..BOARD_WIDTH as i8 {
            self.set(row, col, Some(kind));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

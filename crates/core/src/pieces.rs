//! Pieces module - tetromino shapes and rotation
//!
//! Every kind has one base shape, an N×N occupancy matrix (N is 2, 3 or 4).
//! The other three orientations are derived by rotating the matrix 90°
//! clockwise; there is no kick table, a rotation either fits in place or is
//! rejected. All 28 orientations are computed at compile time.

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Largest bounding box side of any piece.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece orientation.
///
/// Only the top-left `size × size` corner of `grid` is meaningful; the rest
/// stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    grid: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from the rows of a `size × size` 0/1 matrix.
    const fn from_bits(size: usize, rows: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut i = 0;
        while i < size {
            let mut j = 0;
            while j < size {
                grid[i][j] = rows[i][j] == 1;
                j += 1;
            }
            i += 1;
        }
        Self {
            size: size as u8,
            grid,
        }
    }

    /// Side length of the bounding box.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the matrix cell at (row, col) is occupied.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize && self.grid[row][col]
    }

    /// Occupied `(row, col)` offsets relative to the bounding-box corner, in
    /// row-major order.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |i| {
            (0..n)
                .filter(move |&j| self.grid[i][j])
                .map(move |j| (i as i8, j as i8))
        })
    }

    /// Rotate 90° clockwise: `out[i][j] = self[n - 1 - j][i]`.
    pub const fn rotate_cw(&self) -> Shape {
        let n = self.size as usize;
        let mut grid = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut i = 0;
        while i < n {
            let mut j = 0;
            while j < n {
                grid[i][j] = self.grid[n - 1 - j][i];
                j += 1;
            }
            i += 1;
        }
        Shape {
            size: self.size,
            grid,
        }
    }
}

const I_SHAPE: Shape = Shape::from_bits(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const J_SHAPE: Shape = Shape::from_bits(
    3,
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const L_SHAPE: Shape = Shape::from_bits(
    3,
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const O_SHAPE: Shape = Shape::from_bits(
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const S_SHAPE: Shape = Shape::from_bits(
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const T_SHAPE: Shape = Shape::from_bits(
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);
const Z_SHAPE: Shape = Shape::from_bits(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Base shapes indexed like [`PieceKind::ALL`].
const BASE_SHAPES: [Shape; 7] = [
    I_SHAPE, J_SHAPE, L_SHAPE, O_SHAPE, S_SHAPE, T_SHAPE, Z_SHAPE,
];

const fn orientations(base: Shape) -> [Shape; 4] {
    let east = base.rotate_cw();
    let south = east.rotate_cw();
    let west = south.rotate_cw();
    [base, east, south, west]
}

const fn build_table() -> [[Shape; 4]; 7] {
    let mut table = [[I_SHAPE; 4]; 7];
    let mut k = 0;
    while k < 7 {
        table[k] = orientations(BASE_SHAPES[k]);
        k += 1;
    }
    table
}

/// Every (kind, rotation) orientation.
static SHAPE_TABLE: [[Shape; 4]; 7] = build_table();

#[inline]
fn kind_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::J => 1,
        PieceKind::L => 2,
        PieceKind::O => 3,
        PieceKind::S => 4,
        PieceKind::T => 5,
        PieceKind::Z => 6,
    }
}

/// Base (unrotated) shape of a kind.
pub fn base_shape(kind: PieceKind) -> &'static Shape {
    &BASE_SHAPES[kind_index(kind)]
}

/// Shape of `kind` rotated clockwise `rotation.turns()` times.
pub fn shape_of(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPE_TABLE[kind_index(kind)][rotation.turns() as usize]
}

/// Spawn column for a kind: `floor(W / 2) - round(N / 2)`, rounding halves up.
///
/// On a 10-wide board this puts the I piece at column 3, the O piece at 4 and
/// the 3-wide pieces at 3.
pub fn spawn_col(kind: PieceKind) -> i8 {
    let n = base_shape(kind).size() as i8;
    (BOARD_WIDTH / 2) as i8 - (n + 1) / 2
}

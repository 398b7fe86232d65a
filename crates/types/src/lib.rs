//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the game core,
//! the terminal renderer and the key mapping can share them.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn row**: -2 (pieces enter partially above the visible board)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval used by the terminal runner (~60 FPS) |
//! | `GRAVITY_FRAMES` | 35 | Frames that must elapse before a gravity descent |
//!
//! Gravity is counted in frames, not milliseconds: the game descends one row
//! on the first tick where the frame counter exceeds `GRAVITY_FRAMES`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceColor, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), PieceColor::Purple);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of frames the gravity counter must exceed before the active piece
/// descends by one row.
pub const GRAVITY_FRAMES: u32 = 35;

/// Row of the bounding-box anchor for freshly spawned pieces.
pub const SPAWN_ROW: i8 = -2;

/// The seven tetromino piece kinds
///
/// Each kind has a fixed display color:
/// - **I**: cyan
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in generator order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Display color of the kind.
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::S => PieceColor::Green,
            PieceKind::T => PieceColor::Purple,
            PieceKind::Z => PieceColor::Red,
        }
    }

    /// Compact non-zero cell code used by snapshots (`0` is an empty cell).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }
}

/// Named display colors of the seven kinds.
///
/// Renderers map these onto whatever palette their surface supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// Rotation states, counted in clockwise quarter turns from the base shape
///
/// - **North**: base shape (0 turns)
/// - **East**: 1 turn
/// - **South**: 2 turns
/// - **West**: 3 turns
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns (0..=3).
    pub fn turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build a rotation from a quarter-turn count, taken mod 4.
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_turns(1), Rotation::East);
    /// assert_eq!(Rotation::from_turns(6), Rotation::South);
    /// ```
    pub fn from_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Commands accepted by the game controller
///
/// Movement commands only act while the game is running. `Pause` toggles
/// between running and paused; `Restart` is accepted in every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot descend
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle pause state
    Pause,
    /// Restart the game (at any time)
    Restart,
}

/// Coarse game phase; exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Created but not started yet.
    #[default]
    ReadyToStart,
    Running,
    Paused,
    /// A piece could not be locked onto the board.
    GameOver,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of the given kind
pub type Cell = Option<PieceKind>;

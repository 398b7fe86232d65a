//! Read-only, copyable view of a game for renderers and tests.

use arrayvec::ArrayVec;

use crate::game_state::Tetromino;
use crate::types::{GamePhase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl ActiveSnapshot {
    /// Absolute cells of the piece (may include rows above the board).
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        Tetromino::from(*self).cells()
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

impl From<ActiveSnapshot> for Tetromino {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Cell codes, row-major; 0 is empty, otherwise [`PieceKind::code`].
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub phase: GamePhase,
    pub score: u32,
    /// Filled in by the owner of the best-score store; `GameState` leaves it alone.
    pub best: u32,
    pub frame: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Locked cell at (row, col), if any.
    pub fn cell(&self, row: usize, col: usize) -> Option<PieceKind> {
        self.board
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|&code| PieceKind::from_code(code))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            phase: GamePhase::ReadyToStart,
            score: 0,
            best: 0,
            frame: 0,
            episode_id: 0,
        }
    }
}

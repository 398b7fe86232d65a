//! Game state module - the controller that owns the whole game
//!
//! `GameState` ties together the board, the active/next piece pair, the piece
//! generator and the score, and runs the phase machine:
//!
//! ```text
//! ReadyToStart --start--> Running <--pause--> Paused
//!                            |
//!                       lock fails
//!                            v
//!                         GameOver
//! (Restart from any phase goes back to a fresh Running game)
//! ```
//!
//! Every move is built as a candidate piece, validated against the board, and
//! only then committed. Gravity and soft drop share one descent step.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{shape_of, spawn_col, Shape};
use crate::rng::PieceGenerator;
use crate::scoring::calculate_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece
///
/// `row`/`col` are the top-left corner of the shape's bounding box. `row` is
/// negative while the piece is still entering the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: spawn_col(kind),
        }
    }

    /// Occupancy matrix for the current rotation
    pub fn shape(&self) -> &'static Shape {
        shape_of(self.kind, self.rotation)
    }

    /// Absolute `(row, col)` of every occupied cell
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.shape()
            .offsets()
            .map(|(dr, dc)| (self.row.saturating_add(dr), self.col.saturating_add(dc)))
            .collect()
    }

    /// Check that every cell is between the walls and not blocked
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .all(|&(row, col)| board.is_inside_horizontally(col) && !board.is_blocked(row, col))
    }

    /// Copy of this piece moved by `(d_row, d_col)`
    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
            ..*self
        }
    }

    /// Copy of this piece rotated 90° clockwise in place
    pub fn rotated_cw(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: PieceKind,
    generator: PieceGenerator,
    phase: GamePhase,
    score: u32,
    /// Ticks since the last gravity descent.
    frame: u32,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed, waiting to be started
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a new game on a prepared board
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let next = generator.draw();

        Self {
            board,
            active: None,
            next,
            generator,
            phase: GamePhase::ReadyToStart,
            score: 0,
            frame: 0,
            episode_id: 0,
        }
    }

    /// Leave `ReadyToStart`. Returns false in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::ReadyToStart {
            return false;
        }
        self.phase = GamePhase::Running;
        true
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != GamePhase::ReadyToStart
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Ticks counted towards the next gravity descent
    pub fn frame_counter(&self) -> u32 {
        self.frame
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.frame = self.frame;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the lookahead piece to active and draw a new lookahead.
    fn spawn_piece(&mut self) {
        self.active = Some(Tetromino::spawn(self.next));
        self.next = self.generator.draw();
    }

    /// Commit `candidate` as the active piece if it fits
    fn try_commit(&mut self, candidate: Tetromino) -> bool {
        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Try to move the active piece sideways
    fn try_shift(&mut self, d_col: i8) -> bool {
        match self.active {
            Some(active) => self.try_commit(active.shifted(0, d_col)),
            None => false,
        }
    }

    /// Try to rotate the active piece clockwise (no kicks)
    fn try_rotate(&mut self) -> bool {
        match self.active {
            Some(active) => self.try_commit(active.rotated_cw()),
            None => false,
        }
    }

    /// Move the active piece down one row, or lock it where it is.
    ///
    /// Shared by gravity and soft drop. Returns false only when there is no
    /// active piece.
    fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if !self.try_commit(active.shifted(1, 0)) {
            self.lock_piece(active);
        }
        true
    }

    /// Lock `piece` into the board, clear rows and score.
    ///
    /// A piece that cannot be placed ends the game; it stays active so the
    /// final position remains visible.
    fn lock_piece(&mut self, piece: Tetromino) {
        if self.board.lock(&piece.cells(), piece.kind).is_err() {
            self.phase = GamePhase::GameOver;
            return;
        }

        self.active = None;
        let cleared_rows = self.board.clear_full_rows();
        self.score += calculate_score(cleared_rows.len());
    }

    fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::Paused;
                true
            }
            GamePhase::Paused => {
                self.phase = GamePhase::Running;
                true
            }
            GamePhase::ReadyToStart | GamePhase::GameOver => false,
        }
    }

    /// Throw the current game away and start a fresh one.
    ///
    /// The generator keeps its state, so the new game gets a new sequence.
    fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.next = self.generator.draw();
        self.score = 0;
        self.frame = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Running;
    }

    /// Advance one frame.
    ///
    /// Spawns a piece when none is active, then counts the frame; once the
    /// counter exceeds [`GRAVITY_FRAMES`] it resets and the piece descends (or
    /// locks). Returns false, touching nothing, unless the game is running.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        if self.active.is_none() {
            self.spawn_piece();
        }

        self.frame += 1;
        if self.frame > GRAVITY_FRAMES {
            self.frame = 0;
            self.step_down();
        }

        true
    }

    /// Apply a game action. Returns whether it changed anything.
    ///
    /// Movement is ignored unless the game is running and a piece is active.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
            _ if self.phase != GamePhase::Running => false,
            GameAction::MoveLeft => self.try_shift(-1),
            GameAction::MoveRight => self.try_shift(1),
            GameAction::RotateCw => self.try_rotate(),
            GameAction::SoftDrop => self.step_down(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

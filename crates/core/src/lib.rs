//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management and simulation
//! logic. It has no dependencies on rendering, input devices or storage:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Rules are unit-tested next to the code
//! - **Portable**: Runs in any host that can call `tick` at a fixed rate
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision queries, locking and line clearing
//! - [`pieces`]: base shapes and derived clockwise rotations
//! - [`rng`]: seeded uniform piece generator
//! - [`game_state`]: active/next pieces, phase machine, gravity and commands
//! - [`scoring`]: one point per cleared row, best-score collaborator
//! - [`snapshot`]: copyable render view
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameAction, GamePhase, GRAVITY_FRAMES};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // The first tick spawns the lookahead piece above the board.
//! game.tick();
//! let spawned = game.active().unwrap();
//!
//! game.apply_action(GameAction::MoveRight);
//!
//! // Gravity moves the piece down once the frame counter passes the threshold.
//! for _ in 0..GRAVITY_FRAMES {
//!     game.tick();
//! }
//! assert_eq!(game.active().unwrap().row, spawned.row + 1);
//! assert_eq!(game.phase(), GamePhase::Running);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) once per
//! frame. Gravity is frame-counted: the piece descends on the first frame where
//! the counter exceeds [`GRAVITY_FRAMES`](types::GRAVITY_FRAMES).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LockError};
pub use game_state::{GameState, Tetromino};
pub use pieces::{base_shape, shape_of, spawn_col, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_score, BestScore, BestScoreStore, MemoryBestScore};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

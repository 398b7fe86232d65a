//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view renders a snapshot into a
//! framebuffer of styled characters, and the renderer flushes that framebuffer
//! to the terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep layout testable without a terminal
//! - Draw board cells 2 chars wide to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

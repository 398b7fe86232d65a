//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values. The
//! game core never sees raw keys; the runner feeds it the mapped actions.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_start_key, should_quit};

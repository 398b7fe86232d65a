//! Blockfall (workspace facade crate).
//!
//! Re-exports the game crates under `blockfall::{core,input,term,types}` and
//! adds the file-backed best-score store and the game/best-score session
//! used by the terminal runner.

pub mod session;
pub mod store;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Intent`]. Holding a key
//! relies on the terminal's own auto-repeat; there is no DAS/ARR layer.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};

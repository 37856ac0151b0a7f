//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state. It has **no
//! dependencies** on UI, terminals, or I/O, which keeps it:
//!
//! - **Deterministic**: same piece source produces identical games
//! - **Testable**: every rule is reachable from plain method calls
//! - **Portable**: terminal, GUI, headless simulation
//! - **Bounded**: every call touches at most the 10x20 grid
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision, placement and line clearing
//! - [`shape`]: piece matrices and naive clockwise rotation
//! - [`engine`]: [`GameEngine`], the state machine driven by intents and ticks
//! - [`rng`]: [`PieceSource`] trait, seeded uniform source, scripted sequences
//! - [`scoring`]: points, level curve, gravity speed
//! - [`snapshot`]: read-only frame state for renderers
//! - [`event`]: notifications for the presentation layer
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece kind is drawn independently
//! - **Naive rotation**: clockwise matrix rotation in place, no wall kicks
//! - **Instant lock**: a blocked downward move locks the piece immediately
//! - **Flat scoring**: `100 * level` per cleared line
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::Intent;
//!
//! let mut game = GameEngine::new(12345);
//! game.start();
//!
//! game.apply(Intent::MoveRight);
//! game.apply(Intent::Rotate);
//! game.apply(Intent::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0); // no line was complete
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. Call
//! [`GameEngine::tick`](engine::GameEngine::tick) with the elapsed
//! milliseconds from any scheduler (render loop, timer, test harness).

pub mod board;
pub mod engine;
pub mod event;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{ActivePiece, GameEngine};
pub use event::EngineEvent;
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};

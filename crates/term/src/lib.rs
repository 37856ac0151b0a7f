//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It does not use
//! widget/layout libraries; it renders a snapshot into a framebuffer that is
//! then flushed to the terminal with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! from the engine, the terminal view, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (4, 0), i.e. `BOARD_WIDTH / 2 - 1`
//!
//! # Speed Curve
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | 5 | 600ms |
//! | 10 | 100ms |
//! | 11+ | 50ms floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color().to_string(), "#a000f0");
//!
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for the top-left corner of a new piece
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row for the top-left corner of a new piece
pub const SPAWN_Y: i8 = 0;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Interval reduction per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval
pub const MIN_DROP_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line, multiplied by the level at the time of the clear
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Level at game start
pub const START_LEVEL: u32 = 1;

/// Largest shape dimension (the I piece is 4 long)
pub const MAX_SHAPE_DIM: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_constants() {
        assert_eq!(SPAWN_X, 4);
        assert_eq!(SPAWN_Y, 0);
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 100);
        assert_eq!(MIN_DROP_MS, 50);
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(LINE_CLEAR_POINTS, 100);
    }

    #[test]
    fn piece_colors_render_as_hex() {
        assert_eq!(PieceKind::I.color().to_string(), "#00f0f0");
        assert_eq!(PieceKind::O.color().to_string(), "#f0f000");
        assert_eq!(PieceKind::T.color().to_string(), "#a000f0");
        assert_eq!(PieceKind::S.color().to_string(), "#00f000");
        assert_eq!(PieceKind::Z.color().to_string(), "#f00000");
        assert_eq!(PieceKind::J.color().to_string(), "#0000f0");
        assert_eq!(PieceKind::L.color().to_string(), "#f0a000");
    }

    #[test]
    fn rgb_hex_parse() {
        assert_eq!(Rgb::from_hex("#00f0f0"), Some(Rgb::new(0, 240, 240)));
        assert_eq!(Rgb::from_hex("f0a000"), Some(Rgb::new(240, 160, 0)));
        assert_eq!(Rgb::from_hex("#00f0f"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn base_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            let filled: usize = kind
                .base_rows()
                .iter()
                .map(|row| row.iter().filter(|&&c| c).count())
                .sum();
            assert_eq!(filled, 4, "{:?}", kind);
        }
    }

    #[test]
    fn intent_names_roundtrip() {
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::Rotate,
            Intent::HardDrop,
            Intent::Start,
            Intent::TogglePause,
        ] {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a fixed base shape and color:
/// - **I**: cyan bar
/// - **O**: yellow 2x2 square
/// - **T**: purple
/// - **S**: green
/// - **Z**: red (mirror of S)
/// - **J**: blue
/// - **L**: orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order used by uniform piece selection
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Fixed display color of this kind
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
            PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
            PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
            PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
            PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
            PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
            PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
        }
    }

    /// Unrotated shape as rows of occupied flags
    pub fn base_rows(&self) -> &'static [&'static [bool]] {
        const X: bool = true;
        const O: bool = false;
        match self {
            PieceKind::I => &[&[X, X, X, X]],
            PieceKind::O => &[&[X, X], &[X, X]],
            PieceKind::T => &[&[O, X, O], &[X, X, X]],
            PieceKind::S => &[&[O, X, X], &[X, X, O]],
            PieceKind::Z => &[&[X, X, O], &[O, X, X]],
            PieceKind::J => &[&[X, O, O], &[X, X, X]],
            PieceKind::L => &[&[O, O, X], &[X, X, X]],
        }
    }
}

/// Discrete commands accepted by the engine
///
/// The presentation layer maps input devices onto these; the engine decides
/// whether the current phase accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (locks it if blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its lowest legal row and lock it
    HardDrop,
    /// Start a new game (only from not-started or game over)
    Start,
    /// Pause or resume
    TogglePause,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("togglepause"), Some(Intent::TogglePause));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            "harddrop" => Some(Intent::HardDrop),
            "start" => Some(Intent::Start),
            "togglepause" => Some(Intent::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::HardDrop => "hardDrop",
            Intent::Start => "start",
            Intent::TogglePause => "togglePause",
        }
    }
}

/// Engine lifecycle phase
///
/// `NotStarted -> Running <-> Paused -> GameOver -> (start) -> Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: settled cell; its color is `kind.color()`
pub type Cell = Option<PieceKind>;

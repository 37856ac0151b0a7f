use crate::engine::ActivePiece;
use crate::shape::Shape;
use crate::types::{Cell, Phase, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (x, y) = (self.x, self.y);
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Color of the settled cell at (x, y), if any
    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .flatten()
            .map(|kind| kind.color())
    }

    /// A game is in progress (running or paused)
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The start control is usable (no game in progress)
    pub fn start_enabled(&self) -> bool {
        !self.running()
    }

    /// The pause control is usable (a game is in progress)
    pub fn pause_enabled(&self) -> bool {
        self.running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            phase: Phase::NotStarted,
            score: 0,
            level: crate::types::START_LEVEL,
            lines: 0,
            drop_interval_ms: crate::types::BASE_DROP_MS,
        }
    }
}

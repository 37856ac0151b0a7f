//! Game engine module - owns the complete game state
//!
//! Ties together board, shapes, the piece source, and scoring. Every transition
//! is a bounded synchronous call: intents arrive through [`GameEngine::apply`],
//! time arrives through [`GameEngine::tick`]. There is no internal clock and
//! no global state; construct as many engines as needed.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::event::EngineEvent;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Intent, Phase, PieceKind, BASE_DROP_MS, SPAWN_X, SPAWN_Y, START_LEVEL};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn position with its unrotated shape
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::base(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn offset(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

/// Undrained events kept before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 64;

/// Complete game state plus the rules that advance it
#[derive(Debug, Clone)]
pub struct GameEngine<S = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    source: S,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    /// Time accumulated toward the next gravity step.
    drop_timer_ms: u32,
    /// Pending notifications, at most [`MAX_PENDING_EVENTS`].
    events: Vec<EngineEvent>,
}

impl GameEngine<SimpleRng> {
    /// Create an engine drawing pieces from a seeded [`SimpleRng`]
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameEngine<S> {
    /// Create an engine drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Self::create_board(),
            active: None,
            source,
            phase: Phase::NotStarted,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            drop_timer_ms: 0,
            events: Vec::new(),
        }
    }

    /// An empty board
    pub fn create_board() -> Board {
        Board::new()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A game is in progress (running or paused)
    pub fn running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    ///
    /// `start()` replaces the board, so edits belong after it.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece (for setting up positions)
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }

    /// Take all pending notifications, oldest first
    ///
    /// Draining is the caller's job. Only the newest [`MAX_PENDING_EVENTS`]
    /// are kept between drains.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, EngineEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reset everything and begin a new game
    ///
    /// Unconditional: calling it mid-game restarts.
    pub fn start(&mut self) {
        self.board = Self::create_board();
        self.active = None;
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_timer_ms = 0;
        self.phase = Phase::Running;
        info!("game started");
        self.notify_stats();
        self.spawn_piece();
    }

    /// Flip between running and paused
    ///
    /// Ignored before the first start and after game over. Time accumulated
    /// toward the next gravity step is discarded, so resuming never drops the
    /// piece right away. Returns whether the phase changed.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::NotStarted | Phase::GameOver => return false,
        };
        self.drop_timer_ms = 0;
        debug!(paused = self.paused(), "pause toggled");
        true
    }

    /// Spawn a new piece from the source at the top center
    ///
    /// A spawn that immediately collides ends the game. Returns whether the
    /// spawn succeeded.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::new(self.source.next_kind());
        if self.collision(&piece) {
            debug!(kind = piece.kind.as_str(), "spawn blocked");
            self.game_over();
            return false;
        }

        debug!(kind = piece.kind.as_str(), x = piece.x, y = piece.y, "piece spawned");
        self.active = Some(piece);
        true
    }

    /// Whether `piece` overlaps a wall, the floor, or a settled cell
    pub fn collision(&self, piece: &ActivePiece) -> bool {
        self.board.collides(&piece.shape, piece.x, piece.y)
    }

    /// Try to shift the active piece by (dx, dy)
    ///
    /// A blocked downward move lands the piece: it is placed, full lines are
    /// cleared, and the next piece spawns. Blocked sideways moves are simply
    /// rejected. Returns whether the piece moved.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.offset(dx, dy);
        if !self.collision(&moved) {
            self.active = Some(moved);
            return true;
        }

        if dy > 0 {
            self.land();
        }
        false
    }

    /// Rotate the active piece 90° clockwise in place
    ///
    /// No wall kicks: a rotation that collides is rejected outright.
    pub fn rotate_piece(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            shape: active.shape.rotate_cw(),
            ..active
        };
        if self.collision(&rotated) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Drop the active piece to its lowest legal row and lock it
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != Phase::Running {
            return 0;
        }
        let Some(mut piece) = self.active else {
            return 0;
        };

        let start_y = piece.y;
        // Terminates: the floor always collides.
        while !self.collision(&piece) {
            piece.y += 1;
        }
        piece.y -= 1;

        self.active = Some(piece);
        self.land();
        (piece.y - start_y) as u32
    }

    /// Write the active piece's cells onto the board
    ///
    /// No validation; callers settle on a legal position first.
    pub fn place_piece(&mut self) {
        if let Some(piece) = self.active {
            self.board.place(&piece.shape, piece.x, piece.y, piece.kind);
        }
    }

    /// Remove full rows and update score, lines, level and speed
    ///
    /// Points use the level before this clear. Returns the number of lines
    /// cleared.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows();
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_score(cleared, self.level);
        self.lines = self.lines.saturating_add(cleared);
        self.score = self.score.saturating_add(points);

        let level = level_for_lines(self.lines);
        if level != self.level {
            debug!(from = self.level, to = level, "level up");
        }
        self.level = level;
        self.drop_interval_ms = drop_interval_ms(level);

        debug!(cleared, points, score = self.score, lines = self.lines, "lines cleared");
        self.notify_stats();
        cleared
    }

    /// End the game
    ///
    /// Terminal until the next `start()`.
    pub fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.active = None;
        self.drop_timer_ms = 0;
        info!(final_score = self.score, lines = self.lines, level = self.level, "game over");
        self.push_event(EngineEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Advance gravity by `elapsed_ms`
    ///
    /// Once the accumulated time exceeds the drop interval the piece moves
    /// down one row and the accumulator restarts at zero. Ignored unless
    /// running. Returns whether a gravity step happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.drop_interval_ms {
            return false;
        }

        trace!(interval = self.drop_interval_ms, "gravity step");
        self.move_piece(0, 1);
        self.drop_timer_ms = 0;
        true
    }

    /// Apply an intent from the presentation layer
    ///
    /// Movement intents are only processed while running; `Start` only when no
    /// game is in progress; `TogglePause` only during a game. Returns whether
    /// the intent was accepted.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Start => {
                if self.running() {
                    return false;
                }
                self.start();
                true
            }
            Intent::TogglePause => self.toggle_pause(),
            _ if self.phase != Phase::Running || self.active.is_none() => false,
            Intent::MoveLeft => {
                self.move_piece(-1, 0);
                true
            }
            Intent::MoveRight => {
                self.move_piece(1, 0);
                true
            }
            Intent::SoftDrop => {
                self.move_piece(0, 1);
                true
            }
            Intent::Rotate => {
                self.rotate_piece();
                true
            }
            Intent::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Place, clear, spawn
    fn land(&mut self) {
        self.place_piece();
        self.active = None;
        self.clear_lines();
        self.spawn_piece();
    }

    fn notify_stats(&mut self) {
        self.push_event(EngineEvent::StatsChanged {
            score: self.score,
            level: self.level,
            lines: self.lines,
        });
    }

    fn push_event(&mut self, event: EngineEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

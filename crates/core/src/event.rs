//! Notifications emitted by the engine for the presentation layer.

/// Engine-side notification, queued in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Score, level or lines changed (game start or a line clear)
    StatsChanged { score: u32, level: u32, lines: u32 },
    /// The game ended; only `start` is accepted from here
    GameOver { final_score: u32 },
}

impl EngineEvent {
    pub fn is_game_over(&self) -> bool {
        matches!(self, EngineEvent::GameOver { .. })
    }
}

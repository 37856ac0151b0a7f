//! Scoring module - line-clear points, level curve, gravity speed
//!
//! The rules are deliberately flat:
//! - every cleared line is worth `100 * level` (a four-line clear scores the
//!   same per line as a single)
//! - level is `lines / 10 + 1`
//! - gravity starts at 1000ms and speeds up 100ms per level, floored at 50ms

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS, MIN_DROP_MS,
};

/// Points for clearing `lines` rows at `level` in a single placement
pub fn line_clear_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (1-based)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}

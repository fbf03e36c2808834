//! Score, lines, level and fall-speed progression.
//!
//! Level is derived from total lines cleared; the effective gravity delay
//! shrinks as the level climbs. All values are plain counters, advanced by
//! the game state on spawn, line clear and tick.

use crate::types::{
    BASE_FALL_INTERVAL_TICKS, LEVEL_SPEEDUP_TICKS, LINES_PER_LEVEL, LINE_CLEAR_SCORE,
    MIN_FALL_INTERVAL_TICKS, SPAWN_BONUS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    score: u32,
    lines: u32,
    level: u32,
    ticks_since_fall: u32,
}

/// Level for a total line count: one tier per ten lines, starting at 1.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

impl Progression {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: level_for_lines(0),
            ticks_since_fall: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Flat bonus for every spawned piece.
    pub fn award_spawn_bonus(&mut self) {
        self.score += SPAWN_BONUS;
    }

    /// Account for rows cleared by one lock: lines, level, score.
    pub fn award_line_clears(&mut self, rows: u32) {
        if rows == 0 {
            return;
        }
        self.lines += rows;
        self.level = level_for_lines(self.lines);
        self.score += LINE_CLEAR_SCORE * rows;
    }

    /// Effective gravity delay at the current level, in ticks.
    ///
    /// The raw formula goes to zero and below at high levels; clamp so
    /// gravity fires at most once per tick instead of never.
    pub fn fall_interval_ticks(&self) -> u32 {
        BASE_FALL_INTERVAL_TICKS
            .saturating_sub(LEVEL_SPEEDUP_TICKS * self.level)
            .max(MIN_FALL_INTERVAL_TICKS)
    }

    /// Advance one tick. True when gravity should fire; the fall timer is
    /// reset on firing, so the next interval starts at this tick.
    pub fn advance_tick(&mut self) -> bool {
        self.ticks_since_fall += 1;
        if self.ticks_since_fall >= self.fall_interval_ticks() {
            self.ticks_since_fall = 0;
            return true;
        }
        false
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_formula() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(25), 3);
    }

    #[test]
    fn line_clears_accumulate() {
        let mut p = Progression::new();
        p.award_line_clears(0);
        assert_eq!(p.score(), 0);
        assert_eq!(p.lines(), 0);

        p.award_line_clears(2);
        assert_eq!(p.lines(), 2);
        assert_eq!(p.score(), 2 * LINE_CLEAR_SCORE);
        assert_eq!(p.level(), 1);

        p.award_line_clears(8);
        assert_eq!(p.lines(), 10);
        assert_eq!(p.level(), 2);
    }

    #[test]
    fn interval_shrinks_with_level_and_clamps() {
        let mut p = Progression::new();
        assert_eq!(
            p.fall_interval_ticks(),
            BASE_FALL_INTERVAL_TICKS - LEVEL_SPEEDUP_TICKS
        );

        // Push the level far past the point where the raw formula would
        // go negative.
        p.award_line_clears(500);
        assert_eq!(p.fall_interval_ticks(), MIN_FALL_INTERVAL_TICKS);
    }

    #[test]
    fn gravity_fires_on_the_interval_boundary() {
        let mut p = Progression::new();
        let interval = p.fall_interval_ticks();
        for _ in 0..interval - 1 {
            assert!(!p.advance_tick());
        }
        assert!(p.advance_tick());
        // Timer reset: the next cycle is a full interval again.
        assert!(!p.advance_tick());
    }
}

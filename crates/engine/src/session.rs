//! Session module - swap budget and score-goal bookkeeping
//!
//! A session tracks one attempt at a level: how many swaps the player has
//! spent against the budget and how much score they have banked against the
//! target. Every swap request spends budget, including rejected ones - a
//! misclick into a wall is still a turn taken.

use match_three_types::{DEFAULT_MAX_SWAPS, DEFAULT_TARGET_SCORE};

/// Where a session stands after the latest swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Budget remains; keep playing.
    InProgress,
    /// Budget exhausted with the target reached.
    Won,
    /// Budget exhausted short of the target.
    Failed,
}

/// One play-through of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    swaps_used: u32,
    max_swaps: u32,
    score: u32,
    target_score: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SWAPS, DEFAULT_TARGET_SCORE)
    }
}

impl Session {
    pub fn new(max_swaps: u32, target_score: u32) -> Self {
        Self {
            swaps_used: 0,
            max_swaps,
            score: 0,
            target_score,
        }
    }

    pub fn swaps_used(&self) -> u32 {
        self.swaps_used
    }

    pub fn swaps_remaining(&self) -> u32 {
        self.max_swaps - self.swaps_used
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Spend one swap from the budget. Call for every swap request, accepted
    /// or rejected. No-op once the budget is gone.
    pub fn record_attempt(&mut self) {
        if self.swaps_used < self.max_swaps {
            self.swaps_used += 1;
        }
    }

    /// Bank points earned by an accepted swap's cascade.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn status(&self) -> SessionStatus {
        if self.swaps_used < self.max_swaps {
            SessionStatus::InProgress
        } else if self.score >= self.target_score {
            SessionStatus::Won
        } else {
            SessionStatus::Failed
        }
    }
}

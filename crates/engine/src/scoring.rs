//! Scoring module - point values for destroyed tiles
//!
//! Scoring is a consumer of resolution results, not a participant in them:
//! the cascade loop neither knows nor cares that points exist. A caller that
//! wants a different economy swaps the table without touching the engine.

use match_three_types::{TileDefinition, TileEffect};

use crate::cascade::ResolutionResult;

/// Per-tile point values, keyed by the destroyed tile's effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    /// Plain tiles.
    pub plain: u32,
    /// Area bombs.
    pub bomb: u32,
    /// Row and column clearers.
    pub line: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            plain: 1,
            bomb: 3,
            line: 2,
        }
    }
}

impl ScoreTable {
    /// Points awarded for destroying one tile. Walls are indestructible, so
    /// a wall reaching here is worth nothing rather than a panic.
    pub fn value(&self, tile: TileDefinition) -> u32 {
        match tile.effect {
            TileEffect::Plain => self.plain,
            TileEffect::AreaBomb => self.bomb,
            TileEffect::ClearRow | TileEffect::ClearColumn => self.line,
            TileEffect::Wall => 0,
        }
    }
}

/// Total points for one cascade pass: the sum over every destroyed tile.
pub fn score_pass(table: &ScoreTable, pass: &ResolutionResult) -> u32 {
    pass.destroyed.values().map(|&tile| table.value(tile)).sum()
}

/// Total points for a completed cascade.
pub fn score_cascade(table: &ScoreTable, passes: &[ResolutionResult]) -> u32 {
    passes.iter().map(|pass| score_pass(table, pass)).sum()
}

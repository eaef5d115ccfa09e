//! Generator module - constrained random tile generation for refill
//!
//! The generator fills empty slots after a clear. Its one real constraint:
//! a freshly generated tile should not immediately complete a match, so a
//! refilled board settles instead of detonating forever. The search is a
//! bounded retry - after `max_attempts` failed candidates it falls back to
//! the pool's first plain tile rather than looping unboundedly.

use match_three_types::{
    ConfigError, Position, TileDefinition, MAX_GENERATION_ATTEMPTS,
    SPECIAL_SPAWN_CHANCE_PERCENT,
};

use crate::connect::has_match;
use crate::grid::Grid;
use crate::rng::SimpleRng;

/// The set of tile variants a level may spawn, validated at construction.
///
/// Validation makes generation infallible: a pool is non-empty, carries no
/// walls, and holds at least one plain tile so the retry fallback is always
/// well-defined. A pool that fails these checks is a level-data bug and is
/// reported as a hard [`ConfigError`].
#[derive(Debug, Clone)]
pub struct TilePool {
    tiles: Vec<TileDefinition>,
    /// Indices into `tiles` of the plain-effect entries.
    plain: Vec<usize>,
}

impl TilePool {
    pub fn new(tiles: Vec<TileDefinition>) -> Result<Self, ConfigError> {
        if tiles.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        if tiles.iter().any(|t| t.is_wall()) {
            return Err(ConfigError::WallInPool);
        }
        let plain: Vec<usize> = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_plain())
            .map(|(i, _)| i)
            .collect();
        if plain.is_empty() {
            return Err(ConfigError::NoPlainTile);
        }
        Ok(Self { tiles, plain })
    }

    /// A pool of plain tiles, one per given color.
    pub fn of_colors(colors: &[match_three_types::TileColor]) -> Result<Self, ConfigError> {
        Self::new(colors.iter().map(|&c| TileDefinition::plain(c)).collect())
    }

    pub fn tiles(&self) -> &[TileDefinition] {
        &self.tiles
    }

    /// The guaranteed fallback: the first plain-effect entry.
    ///
    /// Never a wall or a special tile.
    pub fn fallback(&self) -> TileDefinition {
        self.tiles[self.plain[0]]
    }

    fn draw_any(&self, rng: &mut SimpleRng) -> TileDefinition {
        self.tiles[rng.next_range(self.tiles.len() as u32) as usize]
    }

    fn draw_plain(&self, rng: &mut SimpleRng) -> TileDefinition {
        self.tiles[self.plain[rng.next_range(self.plain.len() as u32) as usize]]
    }
}

/// Tuning knobs for refill generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Reject candidates that would immediately complete a match.
    pub prevent_auto_match: bool,
    /// Retry budget before falling back to a plain tile.
    pub max_attempts: u32,
    /// Percent chance a candidate keeps a special effect.
    pub special_chance_percent: u32,
    /// Suppress special candidates entirely (e.g. during initial fill).
    pub limit_specials: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prevent_auto_match: true,
            max_attempts: MAX_GENERATION_ATTEMPTS,
            special_chance_percent: SPECIAL_SPAWN_CHANCE_PERCENT,
            limit_specials: true,
        }
    }
}

/// Draws tiles for empty slots from a validated pool.
///
/// Owns its RNG; construct with a seed (via [`SimpleRng::new`]) for
/// reproducible cascades.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    pool: TilePool,
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl TileGenerator {
    pub fn new(pool: TilePool, config: GeneratorConfig, rng: SimpleRng) -> Self {
        Self { pool, config, rng }
    }

    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Pick the tile to place at `position`.
    ///
    /// With `prevent_auto_match` set, each candidate is speculatively placed
    /// and tested with the connectivity resolver; the slot is restored to
    /// exactly its prior state after every probe, so the caller observes no
    /// intermediate mutation. After `max_attempts` failures the pool's plain
    /// fallback is returned even if it would match - bounded retry beats a
    /// perfect placement.
    pub fn generate(&mut self, grid: &mut Grid, position: Position) -> TileDefinition {
        if !self.config.prevent_auto_match {
            return self.draw_candidate();
        }

        let Some(prior) = grid.get(position) else {
            // Out-of-bounds request; nothing to probe against.
            return self.draw_candidate();
        };

        for _ in 0..self.config.max_attempts {
            let candidate = self.draw_candidate();
            grid.set(position, Some(candidate));
            let matched = has_match(grid, position);
            grid.set(position, prior);
            if !matched {
                return candidate;
            }
        }

        self.pool.fallback()
    }

    /// One uniform draw, with the configured chance of keeping a special.
    fn draw_candidate(&mut self) -> TileDefinition {
        let allow_special =
            !self.config.limit_specials && self.rng.chance(self.config.special_chance_percent);
        if allow_special {
            self.pool.draw_any(&mut self.rng)
        } else {
            self.pool.draw_plain(&mut self.rng)
        }
    }
}

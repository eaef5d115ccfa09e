//! Cascade module - the clear / refill / rescan resolution loop
//!
//! One accepted swap triggers a cascade: the matched set is expanded through
//! special effects, cleared, the holes are refilled bottom-up, and the
//! refilled cells are rescanned for new matches. Each round of that loop is
//! one *pass*, and the engine hands passes to the caller one at a time
//! through an iterator - the caller owns all timing (animation delays live
//! entirely in the presentation layer), the engine never waits.
//!
//! The grid is borrowed mutably for the whole cascade, so exactly one
//! cascade can be in flight per grid and the borrow checker enforces it.

use std::collections::{HashMap, HashSet};

use match_three_core::{connect, Grid, TileGenerator};
use match_three_types::{Direction, Position, SwapRejection, TileDefinition, TileEffect};

use crate::effects::expand;
use crate::swap::{try_swap, SwapOutcome};

/// Everything that happened in one cascade pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolutionResult {
    /// Positions matched by color connectivity this pass.
    pub matched: HashSet<Position>,
    /// Every destroyed position and the tile that occupied it. Superset of
    /// the occupied members of `matched`; never contains walls.
    pub destroyed: HashMap<Position, TileDefinition>,
    /// Every refilled position and the tile generated for it.
    pub refilled: HashMap<Position, TileDefinition>,
}

impl ResolutionResult {
    pub fn destroyed_count(&self) -> usize {
        self.destroyed.len()
    }

    /// How many destroyed tiles carried the given effect tag.
    pub fn destroyed_with_effect(&self, effect: TileEffect) -> usize {
        self.destroyed.values().filter(|t| t.effect == effect).count()
    }
}

/// An in-flight cascade. Yields one [`ResolutionResult`] per pass and leaves
/// the grid stable (no remaining matches among refilled cells) when it
/// finishes.
///
/// Driving the iterator to completion is the caller's job; dropping it
/// mid-cascade leaves matched tiles on the board, which is only acceptable
/// when the grid is being discarded anyway.
#[derive(Debug)]
pub struct Cascade<'a> {
    grid: &'a mut Grid,
    generator: &'a mut TileGenerator,
    pending: HashSet<Position>,
    /// Runaway guard for degenerate pools (e.g. a single color, where every
    /// refill re-matches). One pass per grid cell is far beyond anything a
    /// sane level reaches.
    passes_left: usize,
}

impl<'a> Cascade<'a> {
    fn new(grid: &'a mut Grid, generator: &'a mut TileGenerator, matched: HashSet<Position>) -> Self {
        let cells = grid.cells().len();
        Self {
            grid,
            generator,
            pending: matched,
            passes_left: cells,
        }
    }

    /// Drain the cascade, collecting every pass.
    pub fn run_to_completion(self) -> Vec<ResolutionResult> {
        self.collect()
    }
}

impl Iterator for Cascade<'_> {
    type Item = ResolutionResult;

    fn next(&mut self) -> Option<ResolutionResult> {
        if self.pending.is_empty() || self.passes_left == 0 {
            return None;
        }
        self.passes_left -= 1;

        let matched = std::mem::take(&mut self.pending);

        // Expand: special effects grow the matched set into the destroyed set.
        let destroyed = expand(self.grid, &matched);

        // Clear: walls are skipped inside clear_slot even if an effect
        // somehow reached one.
        for &pos in destroyed.keys() {
            self.grid.clear_slot(pos);
        }

        // Refill: column by column, bottom to top within each column. The
        // engine only decides the resting tile per slot; falling motion is a
        // presentation concern.
        let mut refilled = HashMap::new();
        let n = self.grid.dimension();
        for col in 0..n {
            for row in (0..n).rev() {
                let pos = Position::new(row, col);
                if self.grid.is_empty(pos) {
                    let tile = self.generator.generate(self.grid, pos);
                    self.grid.set(pos, Some(tile));
                    refilled.insert(pos, tile);
                }
            }
        }

        // Rescan: union every match formed by a refilled cell; a non-empty
        // union feeds the next pass.
        for &pos in refilled.keys() {
            if connect::has_match(self.grid, pos) {
                self.pending.extend(connect::find_connected(self.grid, pos));
            }
        }

        Some(ResolutionResult {
            matched,
            destroyed,
            refilled,
        })
    }
}

/// Validate and apply a swap, returning the cascade it triggers.
///
/// On rejection the grid is observably unchanged and the error names why
/// (`OutOfBounds`, `IllegalTarget`, or `NoMatch`).
pub fn resolve_swap<'a>(
    grid: &'a mut Grid,
    generator: &'a mut TileGenerator,
    from: Position,
    direction: Direction,
) -> Result<Cascade<'a>, SwapRejection> {
    match try_swap(grid, from, direction) {
        SwapOutcome::Rejected(rejection) => Err(rejection),
        SwapOutcome::Applied { matched } => Ok(Cascade::new(grid, generator, matched)),
    }
}

/// Convenience wrapper: run the whole cascade and collect every pass.
pub fn resolve_swap_complete(
    grid: &mut Grid,
    generator: &mut TileGenerator,
    from: Position,
    direction: Direction,
) -> Result<Vec<ResolutionResult>, SwapRejection> {
    resolve_swap(grid, generator, from, direction).map(Cascade::run_to_completion)
}

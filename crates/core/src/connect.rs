//! Connectivity module - same-color flood fill and the match predicate
//!
//! A match is a 4-directionally connected group of same-color tiles of at
//! least [`MATCH_THRESHOLD`] members. Walls and empty slots never join a
//! group and traversal never crosses them. No diagonal adjacency.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use match_three_types::{Direction, Position, MATCH_THRESHOLD};

use crate::grid::Grid;

/// In-bounds 4-neighbors of a position.
pub fn neighbors(grid: &Grid, pos: Position) -> ArrayVec<Position, 4> {
    let mut out = ArrayVec::new();
    for direction in Direction::ALL {
        let next = pos.offset(direction);
        if grid.get(next).is_some() {
            out.push(next);
        }
    }
    out
}

/// The maximal set of same-color tiles reachable from `seed` via
/// 4-directional adjacency.
///
/// An empty or wall seed yields an empty set without any traversal. An
/// isolated tile yields a singleton. The explicit visited set bounds the
/// walk to one visit per cell, so a call is O(grid cells).
pub fn find_connected(grid: &Grid, seed: Position) -> HashSet<Position> {
    let mut connected = HashSet::new();

    let Some(seed_tile) = grid.tile(seed) else {
        return connected;
    };
    if seed_tile.is_wall() {
        return connected;
    }
    let color = seed_tile.color;

    let mut stack = vec![seed];
    connected.insert(seed);

    while let Some(pos) = stack.pop() {
        for next in neighbors(grid, pos) {
            if connected.contains(&next) {
                continue;
            }
            let Some(tile) = grid.tile(next) else {
                continue;
            };
            if tile.is_wall() || tile.color != color {
                continue;
            }
            connected.insert(next);
            stack.push(next);
        }
    }

    connected
}

/// True when the connected group at `seed` reaches the match threshold.
pub fn has_match(grid: &Grid, seed: Position) -> bool {
    find_connected(grid, seed).len() >= MATCH_THRESHOLD
}

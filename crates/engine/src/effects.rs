//! Effects module - special-tile destruction areas
//!
//! A matched special tile destroys more than its own cell: an area bomb
//! takes a square around it, row and column tiles take their whole line.
//! Expansion is a single pass over the initial matched set - a special tile
//! that is merely a casualty of another tile's effect does not detonate in
//! the same pass. If it survives into a later matched set, it goes off then.

use std::collections::{HashMap, HashSet};

use match_three_core::Grid;
use match_three_types::{Position, TileDefinition, TileEffect, BOMB_RADIUS};

/// Grow `matched` into the full destroyed set for this pass.
///
/// The result maps every destroyed position to the tile occupying it, so a
/// scoring collaborator can count what was destroyed by type after the grid
/// has been cleared. Its key set is a superset of the occupied members of
/// `matched`; walls and empty cells are never included, even when they sit
/// geometrically inside a bomb or line area.
pub fn expand(grid: &Grid, matched: &HashSet<Position>) -> HashMap<Position, TileDefinition> {
    let mut destroyed = HashMap::new();

    for &pos in matched {
        let Some(tile) = grid.tile(pos) else {
            continue;
        };
        if tile.is_wall() {
            continue;
        }
        destroyed.insert(pos, tile);

        match tile.effect {
            TileEffect::AreaBomb => add_area(grid, pos, &mut destroyed),
            TileEffect::ClearRow => add_row(grid, pos, &mut destroyed),
            TileEffect::ClearColumn => add_column(grid, pos, &mut destroyed),
            TileEffect::Plain | TileEffect::Wall => {}
        }
    }

    destroyed
}

fn add_if_destructible(
    grid: &Grid,
    pos: Position,
    destroyed: &mut HashMap<Position, TileDefinition>,
) {
    if let Some(tile) = grid.tile(pos) {
        if !tile.is_wall() {
            destroyed.insert(pos, tile);
        }
    }
}

/// Square of side `2 * BOMB_RADIUS + 1` centered on the bomb.
fn add_area(grid: &Grid, center: Position, destroyed: &mut HashMap<Position, TileDefinition>) {
    for row in (center.row - BOMB_RADIUS)..=(center.row + BOMB_RADIUS) {
        for col in (center.col - BOMB_RADIUS)..=(center.col + BOMB_RADIUS) {
            add_if_destructible(grid, Position::new(row, col), destroyed);
        }
    }
}

fn add_row(grid: &Grid, origin: Position, destroyed: &mut HashMap<Position, TileDefinition>) {
    for col in 0..grid.dimension() {
        add_if_destructible(grid, Position::new(origin.row, col), destroyed);
    }
}

fn add_column(grid: &Grid, origin: Position, destroyed: &mut HashMap<Position, TileDefinition>) {
    for row in 0..grid.dimension() {
        add_if_destructible(grid, Position::new(row, origin.col), destroyed);
    }
}

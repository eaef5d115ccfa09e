//! Swap module - validates and applies a proposed tile exchange
//!
//! The one place in the engine that mutates the grid speculatively. A swap
//! that yields no match is reverted before returning, so callers never see
//! a half-applied exchange: either the swap sticks (and a matched set comes
//! back with it) or the grid is bit-for-bit what it was.

use std::collections::HashSet;

use match_three_core::{connect, Grid};
use match_three_types::{Direction, Position, SwapRejection};

/// Result of a swap request.
#[derive(Debug, Clone, PartialEq)]
pub enum SwapOutcome {
    /// The swap was refused; the grid is unchanged.
    Rejected(SwapRejection),
    /// The swap stuck. `matched` is the union of the connected groups at
    /// both endpoints that reached the match threshold.
    Applied { matched: HashSet<Position> },
}

impl SwapOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SwapOutcome::Applied { .. })
    }
}

/// Try to exchange `from` with its neighbor in `direction`.
///
/// Order of checks:
/// 1. both positions in bounds, else `OutOfBounds`
/// 2. neither a wall and not both empty, else `IllegalTarget`
/// 3. speculative swap, then the match predicate at both endpoints on the
///    post-swap grid
/// 4. no match at either end: revert and report `NoMatch`
pub fn try_swap(grid: &mut Grid, from: Position, direction: Direction) -> SwapOutcome {
    let to = from.offset(direction);

    let (Some(from_slot), Some(to_slot)) = (grid.get(from), grid.get(to)) else {
        return SwapOutcome::Rejected(SwapRejection::OutOfBounds);
    };

    if let Err(rejection) = grid.swap(from, to) {
        return SwapOutcome::Rejected(rejection);
    }

    let from_matches = connect::has_match(grid, from);
    let to_matches = connect::has_match(grid, to);

    if !from_matches && !to_matches {
        // Mandatory revert: restore the exact pre-swap occupants.
        grid.set(from, from_slot);
        grid.set(to, to_slot);
        return SwapOutcome::Rejected(SwapRejection::NoMatch);
    }

    let mut matched = HashSet::new();
    if from_matches {
        matched.extend(connect::find_connected(grid, from));
    }
    if to_matches {
        matched.extend(connect::find_connected(grid, to));
    }

    SwapOutcome::Applied { matched }
}

//! Grid module - owns the square field of tile slots
//!
//! The grid is an N x N field where each slot can be empty or hold a tile
//! (walls are tiles whose effect tag is `Wall`). Uses a flat vector for
//! storage; positions are `(row, col)` with row 0 at the top.
//!
//! The slot occupant is authoritative: no tile carries a back-reference to
//! its position, and no duplicate positional index exists anywhere else.

use match_three_types::{GridSize, LayoutError, Position, SwapRejection, TileDefinition};

/// One grid cell: empty, a tile, or a wall tile.
pub type Slot = Option<TileDefinition>;

/// The playing field - a square grid of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: GridSize,
    /// Flat slots, row-major order (row * dimension + col).
    cells: Vec<Slot>,
}

impl Grid {
    /// Create a new, fully empty grid of the given size.
    pub fn new(size: GridSize) -> Self {
        let n = size.cells();
        Self {
            size,
            cells: vec![None; n * n],
        }
    }

    /// Build a grid from external level data, one `Vec<Slot>` per row.
    ///
    /// Rejects layouts that are not exactly `size x size`.
    pub fn from_rows(size: GridSize, rows: Vec<Vec<Slot>>) -> Result<Self, LayoutError> {
        let n = size.cells();
        if rows.len() != n {
            return Err(LayoutError::BadRowCount {
                expected: n,
                actual: rows.len(),
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(LayoutError::BadRowWidth {
                    row,
                    expected: n,
                    actual: cells.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Calculate flat index from a position; `None` when out of bounds.
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        let n = self.dimension();
        if pos.row < 0 || pos.row >= n || pos.col < 0 || pos.col >= n {
            return None;
        }
        Some((pos.row as usize) * (n as usize) + (pos.col as usize))
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Cells per side.
    pub fn dimension(&self) -> i8 {
        self.size.cells() as i8
    }

    /// Get the slot at a position.
    ///
    /// `None` means out of bounds; `Some(None)` is an empty in-bounds slot.
    pub fn get(&self, pos: Position) -> Option<Slot> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Replace the slot at a position. Returns false when out of bounds.
    pub fn set(&mut self, pos: Position, slot: Slot) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = slot;
                true
            }
            None => false,
        }
    }

    /// The tile occupying a position, flattening bounds and emptiness.
    pub fn tile(&self, pos: Position) -> Option<TileDefinition> {
        self.get(pos).flatten()
    }

    /// True when the position holds a wall tile.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(|t| t.is_wall())
    }

    /// True when the position is in bounds and has no occupant.
    ///
    /// Walls and occupied slots are not empty; out-of-bounds is not empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Exchange the occupants of two positions.
    ///
    /// Rejected with `OutOfBounds` when either position is outside the grid,
    /// and with `IllegalTarget` when either side is a wall or both sides are
    /// empty (at least one must hold a real tile). On rejection the grid is
    /// untouched.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), SwapRejection> {
        let (Some(ia), Some(ib)) = (self.index(a), self.index(b)) else {
            return Err(SwapRejection::OutOfBounds);
        };
        let slot_a = self.cells[ia];
        let slot_b = self.cells[ib];

        let wall = |s: Slot| s.is_some_and(|t| t.is_wall());
        if wall(slot_a) || wall(slot_b) {
            return Err(SwapRejection::IllegalTarget);
        }
        if slot_a.is_none() && slot_b.is_none() {
            return Err(SwapRejection::IllegalTarget);
        }

        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Remove and return the occupant of a position.
    ///
    /// Walls are skipped: the wall stays in place and `None` is returned.
    /// Out-of-bounds is also a `None` no-op.
    pub fn clear_slot(&mut self, pos: Position) -> Option<TileDefinition> {
        let idx = self.index(pos)?;
        match self.cells[idx] {
            Some(tile) if !tile.is_wall() => {
                self.cells[idx] = None;
                Some(tile)
            }
            _ => None,
        }
    }

    /// Iterate every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = self.dimension();
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }

    /// Get a reference to the internal slots (row-major).
    pub fn cells(&self) -> &[Slot] {
        &self.cells
    }
}

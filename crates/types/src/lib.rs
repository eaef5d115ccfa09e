//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with serde derives, making them usable in any
//! context (engine logic, level tooling, a presentation layer).
//!
//! # Grid Dimensions
//!
//! Grids are always square. Only three sizes are allowed:
//!
//! | Size | Cells per side |
//! |--------|----------------|
//! | Small | 5 |
//! | Medium | 7 |
//! | Large | 9 |
//!
//! # Tunable Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATCH_THRESHOLD` | 3 | Minimum connected same-color group size |
//! | `BOMB_RADIUS` | 1 | Area-bomb square radius (1 = 3x3) |
//! | `MAX_GENERATION_ATTEMPTS` | 10 | Retry budget for non-matching refill |
//! | `SPECIAL_SPAWN_CHANCE_PERCENT` | 10 | Chance a refill keeps a special effect |
//! | `DEFAULT_MAX_SWAPS` | 10 | Session swap budget |
//! | `DEFAULT_TARGET_SCORE` | 20 | Session score goal |
//!
//! # Examples
//!
//! ```
//! use match_three_types::{Direction, GridSize, Position, TileColor, TileDefinition};
//!
//! // A plain red tile
//! let tile = TileDefinition::plain(TileColor::Red);
//! assert!(!tile.is_wall());
//!
//! // Parse a color from level data (case-insensitive)
//! assert_eq!(TileColor::from_str("RED"), Some(TileColor::Red));
//!
//! // Move a position one cell to the right
//! let pos = Position::new(2, 3);
//! assert_eq!(pos.offset(Direction::Right), Position::new(2, 4));
//!
//! // Allowed grid sizes
//! assert_eq!(GridSize::Small.cells(), 5);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum connected same-color group size that counts as a match.
pub const MATCH_THRESHOLD: usize = 3;

/// Area-bomb square radius in cells. 1 means a 3x3 square centered on the
/// bomb; the wider historical 5x5 variant is radius 2.
pub const BOMB_RADIUS: i8 = 1;

/// Maximum attempts to find a refill tile that does not immediately match.
pub const MAX_GENERATION_ATTEMPTS: u32 = 10;

/// Percent chance (0-100) that a refill candidate keeps a special effect.
pub const SPECIAL_SPAWN_CHANCE_PERCENT: u32 = 10;

/// Default swap budget for a session.
pub const DEFAULT_MAX_SWAPS: u32 = 10;

/// Default score goal for a session.
pub const DEFAULT_TARGET_SCORE: u32 = 20;

/// The six tile colors.
///
/// Color is the only property connectivity cares about: two adjacent tiles
/// chain when their colors are equal, regardless of effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl TileColor {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Purple,
        Self::Orange,
    ];

    /// Parse a color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match_three_types::TileColor;
    ///
    /// assert_eq!(TileColor::from_str("red"), Some(TileColor::Red));
    /// assert_eq!(TileColor::from_str("Purple"), Some(TileColor::Purple));
    /// assert_eq!(TileColor::from_str("magenta"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TileColor::Red),
            "green" => Some(TileColor::Green),
            "blue" => Some(TileColor::Blue),
            "yellow" => Some(TileColor::Yellow),
            "purple" => Some(TileColor::Purple),
            "orange" => Some(TileColor::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Green => "green",
            TileColor::Blue => "blue",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
            TileColor::Orange => "orange",
        }
    }
}

/// Special-effect tag carried by a tile.
///
/// - **Plain**: no effect; the default refill tile
/// - **AreaBomb**: destroys every non-wall cell within [`BOMB_RADIUS`]
/// - **ClearRow**: destroys every non-wall cell in the bomb's row
/// - **ClearColumn**: destroys every non-wall cell in the bomb's column
/// - **Wall**: permanent blocker; never matched, swapped, or destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileEffect {
    Plain,
    AreaBomb,
    ClearRow,
    ClearColumn,
    Wall,
}

impl TileEffect {
    /// Parse an effect from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Some(TileEffect::Plain),
            "bomb" | "areabomb" => Some(TileEffect::AreaBomb),
            "row" | "clearrow" => Some(TileEffect::ClearRow),
            "column" | "clearcolumn" => Some(TileEffect::ClearColumn),
            "wall" => Some(TileEffect::Wall),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TileEffect::Plain => "plain",
            TileEffect::AreaBomb => "bomb",
            TileEffect::ClearRow => "row",
            TileEffect::ClearColumn => "column",
            TileEffect::Wall => "wall",
        }
    }

    /// True for the three destruction-expanding effects.
    pub fn is_special(&self) -> bool {
        matches!(
            self,
            TileEffect::AreaBomb | TileEffect::ClearRow | TileEffect::ClearColumn
        )
    }
}

/// Immutable tile variant: a color tag plus an effect tag.
///
/// Freely copied; the grid is the only owner of placement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDefinition {
    pub color: TileColor,
    pub effect: TileEffect,
}

impl TileDefinition {
    pub const fn new(color: TileColor, effect: TileEffect) -> Self {
        Self { color, effect }
    }

    /// A plain tile of the given color.
    pub const fn plain(color: TileColor) -> Self {
        Self::new(color, TileEffect::Plain)
    }

    /// A wall. The color is carried but never participates in matching.
    pub const fn wall() -> Self {
        Self::new(TileColor::Red, TileEffect::Wall)
    }

    pub fn is_wall(&self) -> bool {
        self.effect == TileEffect::Wall
    }

    pub fn is_plain(&self) -> bool {
        self.effect == TileEffect::Plain
    }

    pub fn is_special(&self) -> bool {
        self.effect.is_special()
    }
}

/// A grid coordinate: `(row, col)`, both zero-based from the top-left.
///
/// Coordinates are signed so that off-grid neighbors of edge cells are
/// representable; the grid rejects them on access.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// The position one cell away in the given direction.
    ///
    /// May land outside any grid; bounds are the grid's concern.
    pub fn offset(&self, direction: Direction) -> Position {
        let (dr, dc) = direction.delta();
        Position::new(self.row + dr, self.col + dc)
    }
}

/// The four axis-aligned swap/adjacency directions. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Offset as `(d_row, d_col)`. Up is toward row 0.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse a direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Allowed square grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridSize {
    Small,
    Medium,
    Large,
}

impl GridSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Cells per side.
    pub fn cells(&self) -> usize {
        match self {
            GridSize::Small => 5,
            GridSize::Medium => 7,
            GridSize::Large => 9,
        }
    }

    /// Look up the size for a side length, if it is one of the allowed ones.
    pub fn from_dimension(cells: usize) -> Option<Self> {
        match cells {
            5 => Some(GridSize::Small),
            7 => Some(GridSize::Medium),
            9 => Some(GridSize::Large),
            _ => None,
        }
    }
}

/// Why a swap request was refused.
///
/// All three are recoverable by the caller; the grid is observably
/// unchanged after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapRejection {
    /// The origin or target position is outside the grid.
    #[error("swap position out of bounds")]
    OutOfBounds,
    /// The swap involves a wall, or both slots are empty.
    #[error("swap involves a wall or two empty slots")]
    IllegalTarget,
    /// The swap was legal but produced no match; the grid was restored.
    #[error("swap produced no match; grid restored")]
    NoMatch,
}

/// Fatal setup error in the external level data. Never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tile pool is empty")]
    EmptyPool,
    #[error("tile pool may not contain walls")]
    WallInPool,
    #[error("tile pool has no plain-effect tile to fall back on")]
    NoPlainTile,
}

/// Malformed level layout supplied by the external level-data collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has {actual} rows, expected {expected}")]
    BadRowCount { expected: usize, actual: usize },
    #[error("layout row {row} has {actual} cells, expected {expected}")]
    BadRowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

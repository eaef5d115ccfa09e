//! Match-3 resolution engine.
//!
//! A pure-logic engine for tile-matching games: swap validation, flood-fill
//! connectivity, special-tile effect expansion, and the cascading
//! clear / refill / rescan loop, with constrained random refill generation.
//! No rendering, no input handling, no timing - a presentation layer drives
//! the engine and owns all of those.
//!
//! The workspace splits into three crates, re-exported here:
//!
//! - [`types`]: tile, position, and error vocabulary shared by everything
//! - [`core`]: the grid, connectivity resolver, RNG, and tile generator
//! - [`engine`]: swap resolution, effects, cascades, scoring, sessions
//!
//! # Example
//!
//! ```
//! use match_three::core::{Grid, GeneratorConfig, SimpleRng, TileGenerator, TilePool};
//! use match_three::engine::{resolve_swap_complete, score_cascade, ScoreTable};
//! use match_three::types::{Direction, GridSize, Position, TileColor, TileDefinition};
//!
//! let mut grid = Grid::new(GridSize::Small);
//! // Two reds waiting on a third.
//! grid.set(Position::new(0, 0), Some(TileDefinition::plain(TileColor::Red)));
//! grid.set(Position::new(0, 1), Some(TileDefinition::plain(TileColor::Red)));
//! grid.set(Position::new(1, 2), Some(TileDefinition::plain(TileColor::Red)));
//!
//! let pool = TilePool::of_colors(&[TileColor::Blue, TileColor::Green]).unwrap();
//! let mut generator = TileGenerator::new(pool, GeneratorConfig::default(), SimpleRng::new(42));
//!
//! let passes = resolve_swap_complete(
//!     &mut grid,
//!     &mut generator,
//!     Position::new(1, 2),
//!     Direction::Up,
//! )
//! .unwrap();
//!
//! let points = score_cascade(&ScoreTable::default(), &passes);
//! assert!(points >= 3);
//! ```

pub use match_three_core as core;
pub use match_three_engine as engine;
pub use match_three_types as types;

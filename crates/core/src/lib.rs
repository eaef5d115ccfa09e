//! Core building blocks - pure, deterministic, and testable
//!
//! This crate contains the grid data structure, the connectivity resolver,
//! and the constrained tile generator. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: the generator draws from an injected seeded RNG
//! - **Testable**: every rule has unit tests next to it
//! - **Portable**: runs headless, in tooling, or under a presentation layer
//!
//! # Module Structure
//!
//! - [`grid`]: square field of tile slots with bounds-checked access and swaps
//! - [`connect`]: 4-directional same-color flood fill and the match predicate
//! - [`rng`]: simple LCG for deterministic tile draws
//! - [`generator`]: validated tile pool and bounded-retry refill generation

pub mod connect;
pub mod generator;
pub mod grid;
pub mod rng;

pub use match_three_types as types;

// Re-export commonly used items for convenience
pub use connect::{find_connected, has_match, neighbors};
pub use generator::{GeneratorConfig, TileGenerator, TilePool};
pub use grid::{Grid, Slot};
pub use rng::SimpleRng;

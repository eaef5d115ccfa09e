//! Engine crate - orchestration over the core building blocks
//!
//! This crate turns the pure primitives in `match-three-core` into the full
//! swap-and-cascade resolution flow:
//!
//! - [`swap`]: validate a swap request and apply or revert it
//! - [`effects`]: grow a matched set with special-tile destruction areas
//! - [`cascade`]: the clear / refill / rescan loop, one result per pass
//! - [`scoring`]: point values for destroyed tiles (external collaborator)
//! - [`session`]: swap budget and score-goal bookkeeping
//!
//! The engine performs no waiting of its own. A cascade is exposed as an
//! iterator of per-pass results so a presentation layer can interleave
//! animation between passes however it likes.

pub mod cascade;
pub mod effects;
pub mod scoring;
pub mod session;
pub mod swap;

pub use match_three_core as core;
pub use match_three_types as types;

// Re-export commonly used items for convenience
pub use cascade::{resolve_swap, resolve_swap_complete, Cascade, ResolutionResult};
pub use effects::expand;
pub use scoring::{score_cascade, score_pass, ScoreTable};
pub use session::{Session, SessionStatus};
pub use swap::{try_swap, SwapOutcome};

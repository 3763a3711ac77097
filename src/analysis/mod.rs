//! Whole-tree analysis.
//!
//! - `GameTreeCensus`: position, game and outcome counts over every
//!   reachable board, plus a check that no reachable board has two winners

pub mod census;

pub use census::GameTreeCensus;

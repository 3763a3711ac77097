//! Search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during a minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to the max/min value functions.
    pub nodes_visited: u64,

    /// Nodes that were terminal and scored by utility.
    pub terminal_evaluations: u64,

    /// Deepest ply below the searched board.
    pub max_depth: u16,

    /// Wall time of the last top-level call (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a visit at `depth` plies below the root.
    pub(crate) fn record_visit(&mut self, depth: u16) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of visited nodes that were terminal.
    #[must_use]
    pub fn terminal_ratio(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.terminal_evaluations as f64 / self.nodes_visited as f64
        }
    }
}

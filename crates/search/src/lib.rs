//! Stacker search crate - depth-limited tree search over placements.

mod parallel;
mod tree;

use stacker_core::Move;
use stacker_engine::Game;
use stacker_eval::Weights;

/// Breadth-first search over placement sequences, branching on hold.
#[derive(Clone, Debug)]
pub struct TreeSearch {
    /// Placements per branch, root placement included.
    pub max_depth: usize,
    pub weights: Weights,
}

impl TreeSearch {
    pub fn new(max_depth: usize, weights: Weights) -> Self {
        Self { max_depth, weights }
    }
}

impl Default for TreeSearch {
    fn default() -> Self {
        Self::new(2, Weights::handtuned())
    }
}

/// Best leaf found by a search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Placement to play now. `hold_used` means hold first, then place.
    pub first_move: Move,
    /// State reached at the best leaf.
    pub game: Game,
    pub score: f32,
    /// Search nodes expanded.
    pub nodes: usize,
    /// Leaves scored.
    pub leaves: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub nodes: usize,
    pub leaves: usize,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
    }
}

use std::time::Instant;

use rayon::prelude::*;
use stacker_engine::{Expander, Game, GameConfig};

use crate::tree::{finish, Child, Leaf};
use crate::{SearchResult, SearchStats, TreeSearch};

/// Best leaf of one root branch, tagged with the branch's position.
struct Partial {
    index: usize,
    leaf: Option<Leaf>,
    stats: SearchStats,
}

impl Partial {
    fn empty() -> Self {
        Self {
            index: usize::MAX,
            leaf: None,
            stats: SearchStats::default(),
        }
    }

    /// Higher score wins; on a tie the earlier branch does, matching the
    /// sequential visiting order.
    fn merge(mut self, other: Self) -> Self {
        self.stats += other.stats;
        let take_other = match (&self.leaf, &other.leaf) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(a), Some(b)) => b.score > a.score || (b.score == a.score && other.index < self.index),
        };
        if take_other {
            self.leaf = other.leaf;
            self.index = other.index;
        }
        self
    }
}

impl TreeSearch {
    /// Same result as [`TreeSearch::search`], with the subtree under each
    /// root placement searched on the rayon pool.
    pub fn search_parallel(&self, game: &Game, config: &GameConfig) -> Option<SearchResult> {
        let started = Instant::now();
        let root = self.root(game)?;

        let mut stats = SearchStats::default();
        let mut branches = Vec::new();
        self.expand_node(&root, config, &mut Expander::new(), &mut stats, |child| {
            branches.push(child)
        });

        let merged = branches
            .into_par_iter()
            .enumerate()
            .map_init(Expander::new, |expander, (index, child)| match child {
                Child::Leaf(leaf) => Partial {
                    index,
                    leaf: Some(leaf),
                    stats: SearchStats::default(),
                },
                Child::Node(node) => {
                    let mut stats = SearchStats::default();
                    let leaf = self.run(node, config, expander, &mut stats);
                    Partial { index, leaf, stats }
                }
            })
            .reduce(Partial::empty, Partial::merge);

        stats += merged.stats;
        finish(merged.leaf, stats, started)
    }
}

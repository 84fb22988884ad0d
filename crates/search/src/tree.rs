use std::collections::VecDeque;
use std::time::Instant;

use stacker_core::{Falling, Move, SpinType};
use stacker_engine::{Expander, Game, GameConfig};
use stacker_eval::evaluate;
use tracing::debug;

use crate::{SearchResult, SearchStats, TreeSearch};

pub(crate) struct Node {
    pub game: Game,
    pub depth: usize,
    pub lines_sent: u16,
    pub clears: Vec<SpinType>,
    pub first_move: Option<Move>,
}

pub(crate) struct Leaf {
    pub first_move: Move,
    pub game: Game,
    pub score: f32,
}

pub(crate) enum Child {
    Leaf(Leaf),
    Node(Node),
}

/// Keeps the first leaf with the highest score.
#[derive(Default)]
pub(crate) struct Best(pub Option<Leaf>);

impl Best {
    pub fn offer(&mut self, leaf: Leaf) {
        match &self.0 {
            Some(best) if best.score >= leaf.score => {}
            _ => self.0 = Some(leaf),
        }
    }
}

impl TreeSearch {
    pub(crate) fn root(&self, game: &Game) -> Option<Node> {
        if game.topped_out() {
            return None;
        }
        assert!(
            (1..=game.queue_remaining()).contains(&self.max_depth),
            "search depth {} needs that many preview pieces, {} left",
            self.max_depth,
            game.queue_remaining()
        );
        Some(Node {
            game: game.clone(),
            depth: 0,
            lines_sent: 0,
            clears: Vec::new(),
            first_move: None,
        })
    }

    /// Whether `node` may branch on hold without running out of preview.
    fn hold_allowed(&self, node: &Node) -> bool {
        let game = &node.game;
        match game.hold {
            Some(held) => held != game.piece.piece,
            None => game.queue_remaining() > self.max_depth - node.depth,
        }
    }

    /// Play every placement of `node` (and of its hold branch) once.
    pub(crate) fn expand_node(
        &self,
        node: &Node,
        config: &GameConfig,
        expander: &mut Expander,
        stats: &mut SearchStats,
        mut visit: impl FnMut(Child),
    ) {
        stats.nodes += 1;

        let mut variants = vec![(node.game.clone(), false)];
        if self.hold_allowed(node) {
            let mut held = node.game.clone();
            if held.hold() && !held.topped_out() {
                variants.push((held, true));
            }
        }

        let leaf_level = node.depth + 1 >= self.max_depth;
        for (mut game, held) in variants {
            let placements = expander.expand(&mut game, config).to_vec();
            for placement in placements {
                let mut child = game.clone();
                child.piece = Falling {
                    piece: placement.piece,
                    x: placement.x,
                    y: placement.y,
                    rotation: placement.rotation,
                };
                child.spin = placement.spin_type;
                let result = child.hard_drop(config);
                child.regen_collision_map();

                let lines_sent = node.lines_sent + result.sent;
                let mut clears = node.clears.clone();
                clears.extend(result.clear);
                let first_move = node.first_move.unwrap_or(if held {
                    placement.with_hold()
                } else {
                    placement
                });

                if leaf_level {
                    stats.leaves += 1;
                    let score = evaluate(&child, &self.weights, lines_sent, &clears);
                    visit(Child::Leaf(Leaf {
                        first_move,
                        game: child,
                        score,
                    }));
                } else if !child.topped_out() {
                    visit(Child::Node(Node {
                        game: child,
                        depth: node.depth + 1,
                        lines_sent,
                        clears,
                        first_move: Some(first_move),
                    }));
                }
            }
        }
    }

    /// Breadth-first walk below `start`, returning the first best leaf.
    pub(crate) fn run(
        &self,
        start: Node,
        config: &GameConfig,
        expander: &mut Expander,
        stats: &mut SearchStats,
    ) -> Option<Leaf> {
        let mut best = Best::default();
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            self.expand_node(&node, config, expander, stats, |child| match child {
                Child::Leaf(leaf) => best.offer(leaf),
                Child::Node(next) => queue.push_back(next),
            });
        }
        best.0
    }

    /// Best first move for `game`, or `None` when it is topped out or
    /// nothing can be placed. Panics when `max_depth` is zero or exceeds the
    /// remaining preview.
    pub fn search(&self, game: &Game, config: &GameConfig) -> Option<SearchResult> {
        let started = Instant::now();
        let root = self.root(game)?;
        let mut stats = SearchStats::default();
        let best = self.run(root, config, &mut Expander::new(), &mut stats);
        finish(best, stats, started)
    }
}

pub(crate) fn finish(best: Option<Leaf>, stats: SearchStats, started: Instant) -> Option<SearchResult> {
    debug!(
        nodes = stats.nodes,
        leaves = stats.leaves,
        score = best.as_ref().map(|leaf| leaf.score),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search finished"
    );
    best.map(|leaf| SearchResult {
        first_move: leaf.first_move,
        game: leaf.game,
        score: leaf.score,
        nodes: stats.nodes,
        leaves: stats.leaves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacker_core::{Board, Piece, Rotation};
    use stacker_engine::PREVIEW;
    use stacker_eval::Weights;

    fn game(piece: Piece, board: Board) -> Game {
        Game::new(piece, [Piece::T; PREVIEW]).with_board(board)
    }

    #[test]
    fn test_topped_out_root_has_no_result() {
        let mut board = Board::new();
        for y in 0..Board::HEIGHT {
            board.set(4, y);
        }
        let search = TreeSearch::default();
        assert!(search.search(&game(Piece::T, board), &GameConfig::default()).is_none());
    }

    #[test]
    fn test_depth_one_scores_every_placement() {
        let search = TreeSearch::new(1, Weights::handtuned());
        let result = search
            .search(&game(Piece::O, Board::new()), &GameConfig::default())
            .expect("empty board has moves");
        assert_eq!(result.nodes, 1);
        // O placements plus T placements after holding
        assert_eq!(result.leaves, 9 + 34);
    }

    #[test]
    fn test_result_matches_best_single_placement() {
        let config = GameConfig::default();
        let search = TreeSearch::new(1, Weights::handtuned());
        let start = game(Piece::I, Board::new());
        let result = search.search(&start, &config).expect("moves");

        let mut held = start.clone();
        held.hold();

        let mut best = f32::NEG_INFINITY;
        for mut variant in [start.clone(), held] {
            for m in Expander::new().expand(&mut variant, &config).to_vec() {
                let mut child = variant.clone();
                child.piece = Falling {
                    piece: m.piece,
                    x: m.x,
                    y: m.y,
                    rotation: m.rotation,
                };
                child.spin = m.spin_type;
                let r = child.hard_drop(&config);
                child.regen_collision_map();
                let clears: Vec<SpinType> = r.clear.into_iter().collect();
                best = best.max(evaluate(&child, &search.weights, r.sent, &clears));
            }
        }
        assert!((result.score - best).abs() < 0.0001);
    }

    #[test]
    fn test_first_move_is_fixed_from_root() {
        let search = TreeSearch::new(2, Weights::handtuned());
        let start = game(Piece::L, Board::new());
        let result = search.search(&start, &GameConfig::default()).expect("moves");
        let expected_piece = if result.first_move.hold_used {
            Piece::T
        } else {
            Piece::L
        };
        assert_eq!(result.first_move.piece, expected_piece);
        assert!(result.game.queue_ptr >= 2);
    }

    #[test]
    fn test_first_best_leaf_wins_ties() {
        let mut best = Best::default();
        let g = game(Piece::T, Board::new());
        let first = Move::new(Piece::T, Rotation::North, 3, 1);
        let second = Move::new(Piece::T, Rotation::North, 4, 1);
        best.offer(Leaf {
            first_move: first,
            game: g.clone(),
            score: 1.0,
        });
        best.offer(Leaf {
            first_move: second,
            game: g,
            score: 1.0,
        });
        assert_eq!(best.0.map(|leaf| leaf.first_move), Some(first));
    }

    #[test]
    #[should_panic]
    fn test_depth_beyond_preview_panics() {
        let search = TreeSearch::new(PREVIEW + 1, Weights::handtuned());
        search.search(&game(Piece::T, Board::new()), &GameConfig::default());
    }
}

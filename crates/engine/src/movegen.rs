//! Placement expansion: BFS over primitive keys from the active piece.
//!
//! States are deduplicated on a 14-bit key (`x | y << 4 | rot << 10 | spin << 12`)
//! held in fixed bitsets. The O piece drops rotation and spin from its key
//! since all four of its rotations cover the same cells.

use stacker_core::{Falling, Key, Piece, SpinType};
use tracing::trace;

use crate::config::GameConfig;
use crate::game::Game;
use crate::move_list::MoveList;
use crate::movement::apply_key;

/// Queue entries allowed per expansion.
pub const MAX_NODES: usize = 4096;

const KEY_BITS: usize = 14;
const SET_WORDS: usize = (1 << KEY_BITS) / 64;

/// Keys that may follow `prev`. Rotating one way forbids the opposite turn
/// next, and a translation cannot be undone by its mirror.
pub(crate) fn next_keys(prev: Key) -> &'static [Key] {
    use Key::{Ccw, Cw, DasLeft, DasRight, Flip, Left, Right, SoftDrop};
    match prev {
        Key::None => &[Cw, Ccw, Flip, Left, Right, SoftDrop, DasLeft, DasRight],
        Left => &[Cw, Ccw, Flip, Left, SoftDrop, DasRight],
        Right => &[Cw, Ccw, Flip, Right, SoftDrop, DasLeft],
        SoftDrop => &[Cw, Ccw, Flip, Left, Right, DasLeft, DasRight],
        Ccw => &[Ccw, Flip, Left, Right, SoftDrop, DasLeft, DasRight],
        Cw => &[Cw, Flip, Left, Right, SoftDrop, DasLeft, DasRight],
        Flip => &[Cw, Ccw, Left, Right, SoftDrop, DasLeft, DasRight],
        DasLeft => &[Cw, Ccw, Flip, Right, SoftDrop, DasRight],
        DasRight => &[Cw, Ccw, Flip, Left, SoftDrop, DasLeft],
        Key::Hold | Key::HardDrop => &[],
    }
}

/// Compact state key. `x` and `y` must be in `0..16` and `0..64`.
#[inline(always)]
pub(crate) fn state_key(piece: &Falling, spin: SpinType) -> u16 {
    let mut key = piece.x as u16 | (piece.y as u16) << 4;
    if piece.piece != Piece::O {
        key |= (piece.rotation.index() as u16) << 10 | (spin.index() as u16) << 12;
    }
    key
}

#[derive(Clone)]
struct BitSet([u64; SET_WORDS]);

impl BitSet {
    #[inline(always)]
    fn clear(&mut self) {
        self.0 = [0; SET_WORDS];
    }

    /// Returns true when `key` was not yet present.
    #[inline(always)]
    fn insert(&mut self, key: u16) -> bool {
        let (word, bit) = (key as usize >> 6, 1u64 << (key & 63));
        let fresh = self.0[word] & bit == 0;
        self.0[word] |= bit;
        fresh
    }
}

#[derive(Clone, Copy)]
struct Node {
    piece: Falling,
    spin: SpinType,
    last: Key,
}

/// Reusable expansion scratch. One per thread; never shared between
/// concurrent expansions.
#[derive(Clone)]
pub struct Expander {
    visited: BitSet,
    emitted: BitSet,
    queue: Vec<Node>,
    placements: MoveList,
    nodes: usize,
}

impl Expander {
    pub fn new() -> Self {
        Self {
            visited: BitSet([0; SET_WORDS]),
            emitted: BitSet([0; SET_WORDS]),
            queue: Vec::with_capacity(MAX_NODES),
            placements: MoveList::new(),
            nodes: 0,
        }
    }

    /// Every distinct landed placement reachable from the active piece.
    ///
    /// Uses `game`'s collision map, which must be current. The active piece
    /// and spin are restored before returning.
    pub fn expand(&mut self, game: &mut Game, config: &GameConfig) -> &MoveList {
        self.visited.clear();
        self.emitted.clear();
        self.queue.clear();
        self.placements.clear();
        self.nodes = 0;

        if game.topped_out() {
            return &self.placements;
        }

        let origin = (game.piece, game.spin);
        self.visited.insert(state_key(&origin.0, origin.1));
        self.queue.push(Node {
            piece: origin.0,
            spin: origin.1,
            last: Key::None,
        });

        let mut head = 0;
        'bfs: while head < self.queue.len() {
            let node = self.queue[head];
            head += 1;

            for &key in next_keys(node.last) {
                self.nodes += 1;
                game.piece = node.piece;
                game.spin = node.spin;

                let moved = apply_key(game, key, config);
                let state = state_key(&game.piece, game.spin);

                if key == Key::SoftDrop
                    && self.emitted.insert(state)
                    && !self.placements.push(game.piece.to_move(game.spin))
                {
                    trace!(placements = self.placements.len(), "placement budget reached");
                    break 'bfs;
                }

                if !moved || !self.visited.insert(state) {
                    continue;
                }
                if self.queue.len() == MAX_NODES {
                    trace!(nodes = self.nodes, "node budget reached");
                    break 'bfs;
                }
                self.queue.push(Node {
                    piece: game.piece,
                    spin: game.spin,
                    last: key,
                });
            }
        }

        game.piece = origin.0;
        game.spin = origin.1;
        trace!(
            piece = ?origin.0.piece,
            placements = self.placements.len(),
            nodes = self.nodes,
            "expanded"
        );
        &self.placements
    }

    /// Move attempts made by the last expansion.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn placements(&self) -> &MoveList {
        &self.placements
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new()
    }
}

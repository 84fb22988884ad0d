//! Shortest key sequence that realizes a placement.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use stacker_core::{Falling, Key, Move, Piece, SpinType};
use tracing::debug;

use crate::config::GameConfig;
use crate::game::Game;
use crate::movegen::{next_keys, state_key};
use crate::movement::apply_key;

/// Longest input chain considered, hard drop excluded.
pub const MAX_KEYS: usize = 20;

pub type KeySequence = SmallVec<[Key; 16]>;

struct Step {
    piece: Falling,
    spin: SpinType,
    key: Key,
    parent: usize,
    depth: usize,
}

fn lands_on(game: &mut Game, target: &Move) -> bool {
    game.soft_drop();
    let p = &game.piece;
    p.x == target.x
        && p.y == target.y
        && (p.rotation == target.rotation || p.piece == Piece::O)
        && game.spin == target.spin_type
}

/// Inputs from the current piece state to `target`, ending in `HardDrop`.
/// A hold is prepended when `target.hold_used`. Empty when unreachable
/// within `MAX_KEYS`.
pub fn find_keys(game: &Game, target: &Move, config: &GameConfig) -> KeySequence {
    let mut game = game.clone();
    let mut prefix = KeySequence::new();
    if target.hold_used {
        if !game.hold() {
            return KeySequence::new();
        }
        prefix.push(Key::Hold);
    }
    if game.piece.piece != target.piece || game.topped_out() {
        debug!(?target, "target piece is not playable");
        return KeySequence::new();
    }

    let mut steps = vec![Step {
        piece: game.piece,
        spin: game.spin,
        key: Key::None,
        parent: usize::MAX,
        depth: 0,
    }];
    let mut visited = FxHashSet::default();
    visited.insert(state_key(&game.piece, game.spin));

    let mut head = 0;
    while head < steps.len() {
        let (piece, spin, last, depth) = {
            let step = &steps[head];
            (step.piece, step.spin, step.key, step.depth)
        };

        game.piece = piece;
        game.spin = spin;
        if lands_on(&mut game, target) {
            let mut path = KeySequence::new();
            let mut at = head;
            while at != 0 {
                path.push(steps[at].key);
                at = steps[at].parent;
            }
            path.reverse();
            prefix.extend(path);
            prefix.push(Key::HardDrop);
            return prefix;
        }

        if depth < MAX_KEYS {
            for &key in next_keys(last) {
                game.piece = piece;
                game.spin = spin;
                if !apply_key(&mut game, key, config) {
                    continue;
                }
                if visited.insert(state_key(&game.piece, game.spin)) {
                    steps.push(Step {
                        piece: game.piece,
                        spin: game.spin,
                        key,
                        parent: head,
                        depth: depth + 1,
                    });
                }
            }
        }
        head += 1;
    }

    debug!(?target, explored = steps.len(), "no key sequence found");
    KeySequence::new()
}

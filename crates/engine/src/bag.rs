//! Seeded bag randomizer and upcoming-piece queue.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use stacker_core::Piece;
use thiserror::Error;

use crate::rng::Rng;

/// Number of pieces a `Game` sees ahead of the active one.
pub const PREVIEW: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bag {
    Bag7,
}

impl Bag {
    pub fn cycle(self) -> [Piece; 7] {
        match self {
            Bag::Bag7 => [
                Piece::Z,
                Piece::L,
                Piece::O,
                Piece::S,
                Piece::I,
                Piece::J,
                Piece::T,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("queue minimum size must be at least {PREVIEW}, got {0}")]
    MinSizeTooSmall(usize),
}

#[derive(Clone, Debug)]
pub struct PieceQueue {
    bag: Bag,
    rng: Rng,
    min_size: usize,
    pieces: VecDeque<Piece>,
}

impl PieceQueue {
    pub fn new(bag: Bag, seed: u64, min_size: usize, initial: &[Piece]) -> Result<Self, QueueError> {
        if min_size < PREVIEW {
            return Err(QueueError::MinSizeTooSmall(min_size));
        }
        let mut queue = Self {
            bag,
            rng: Rng::new(seed),
            min_size,
            pieces: VecDeque::with_capacity(min_size + 7),
        };
        queue.pieces.extend(initial.iter().copied());
        queue.refill();
        Ok(queue)
    }

    /// Seeded 7-bag with the smallest allowed buffer.
    pub fn bag7(seed: u64) -> Self {
        let mut queue = Self {
            bag: Bag::Bag7,
            rng: Rng::new(seed),
            min_size: PREVIEW,
            pieces: VecDeque::with_capacity(PREVIEW + 7),
        };
        queue.refill();
        queue
    }

    fn refill(&mut self) {
        while self.pieces.len() < self.min_size {
            let mut cycle = self.bag.cycle();
            self.rng.shuffle(&mut cycle);
            self.pieces.extend(cycle);
        }
    }

    /// Take the next piece, refilling whole bags as needed.
    pub fn shift(&mut self) -> Piece {
        let piece = self.pieces.pop_front().unwrap_or(Piece::I);
        self.refill();
        piece
    }

    pub fn front16(&self) -> [Piece; PREVIEW] {
        std::array::from_fn(|i| self.pieces.get(i).copied().unwrap_or(Piece::I))
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

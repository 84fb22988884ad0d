//! Precomputed collision maps - single bitcheck instead of 4 cell lookups
//!
//! The map is a snapshot. It goes stale whenever the board changes and must be
//! rebuilt by the owner.

use stacker_core::{Board, Piece, Rotation};

pub const MAP_WIDTH: usize = Board::WIDTH + 2;

/// Per-piece collision lookup - [rot][x] -> u64 of blocked reference rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionMap {
    map: [[u64; MAP_WIDTH]; 4],
}

impl CollisionMap {
    /// Build from a board snapshot via column shifts. Cells outside the side walls
    /// use a solid column; cells below the floor are caught by the shifted-in ones.
    pub fn new(board: &Board, piece: Piece) -> Self {
        let mut map = [[0u64; MAP_WIDTH]; 4];

        for rotation in Rotation::ALL {
            let cells = piece.cells(rotation);
            for (x, slot) in map[rotation.index()].iter_mut().enumerate() {
                let mut collision = 0u64;
                for &(bx, by) in cells {
                    let col = x
                        .checked_sub(bx as usize)
                        .filter(|&px| px < Board::WIDTH)
                        .map_or(!0u64, |px| board.column(px));
                    collision |= !(!col << by);
                }
                *slot = collision;
            }
        }

        Self { map }
    }

    /// O(1) collision check. Anything outside the precomputed range collides.
    #[inline(always)]
    pub fn test(&self, x: i8, y: i8, rotation: Rotation) -> bool {
        if x < 0 || y < 0 || x as usize >= MAP_WIDTH || y as usize >= Board::HEIGHT {
            return true;
        }
        self.map[rotation.index()][x as usize] & (1u64 << y) != 0
    }

    /// Raw collision column for a rotation and reference x.
    #[inline(always)]
    pub fn column(&self, rotation: Rotation, x: i8) -> u64 {
        if x < 0 || x as usize >= MAP_WIDTH {
            return !0u64;
        }
        self.map[rotation.index()][x as usize]
    }
}

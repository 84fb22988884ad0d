//! The active, not yet locked piece.

use crate::{Board, Move, Piece, Rotation, SpinType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Falling {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl Falling {
    pub const SPAWN_Y: i8 = (Board::HEIGHT - Board::BUFFER + 2) as i8;

    /// Piece at its spawn position, centred horizontally.
    pub fn spawn(piece: Piece) -> Self {
        Self {
            piece,
            x: Self::spawn_x(piece),
            y: Self::SPAWN_Y,
            rotation: Rotation::North,
        }
    }

    pub fn spawn_x(piece: Piece) -> i8 {
        ((Board::WIDTH as i8 + piece.width() as i8) / 2) - 1
    }

    #[inline(always)]
    pub fn cells(&self) -> [(i8, i8); 4] {
        let cells = self.piece.cells(self.rotation);
        std::array::from_fn(|i| (self.x - cells[i].0 as i8, self.y - cells[i].1 as i8))
    }

    pub fn to_move(&self, spin: SpinType) -> Move {
        Move::new(self.piece, self.rotation, self.x, self.y).with_spin(spin)
    }
}

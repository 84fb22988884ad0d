//! Piece types and rotation-state cell tables.
//!
//! Cells are `(bx, by)` offsets inside the piece's bounding box. A piece whose
//! reference point is `(x, y)` occupies `(x - bx, y - by)`: `x` is the right
//! edge of the box and `y` its top row.

use serde::{Deserialize, Serialize};

pub type Cells = [(u8, u8); 4];

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Panics when `index >= 4`.
    #[inline(always)]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 4, "rotation index {index} out of range");
        Self::ALL[index]
    }

    /// Rotate clockwise by `amount` quarter turns.
    #[inline(always)]
    pub fn turn(self, amount: u8) -> Self {
        Self::ALL[(self.index() + amount as usize) % 4]
    }

    pub fn cw(self) -> Self {
        self.turn(1)
    }

    pub fn ccw(self) -> Self {
        self.turn(3)
    }

    pub fn flip(self) -> Self {
        self.turn(2)
    }
}

const I_CELLS: [Cells; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(1, 3), (1, 2), (1, 1), (1, 0)],
    [(3, 2), (2, 2), (1, 2), (0, 2)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const L_CELLS: [Cells; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (1, 1), (1, 0)],
    [(2, 2), (2, 1), (1, 1), (0, 1)],
    [(2, 0), (1, 0), (1, 1), (1, 2)],
];

const J_CELLS: [Cells; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 2), (1, 1), (1, 0)],
    [(0, 2), (2, 1), (1, 1), (0, 1)],
    [(2, 2), (1, 0), (1, 1), (1, 2)],
];

const O_CELLS: [Cells; 4] = [
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(0, 1), (0, 0), (1, 1), (1, 0)],
    [(1, 1), (0, 1), (1, 0), (0, 0)],
    [(1, 0), (1, 1), (0, 0), (0, 1)],
];

const Z_CELLS: [Cells; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 1), (0, 0), (1, 2), (1, 1)],
    [(1, 2), (0, 2), (2, 1), (1, 1)],
    [(2, 1), (2, 2), (1, 0), (1, 1)],
];

const T_CELLS: [Cells; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 1), (1, 2), (1, 1), (1, 0)],
    [(1, 2), (2, 1), (1, 1), (0, 1)],
    [(2, 1), (1, 0), (1, 1), (1, 2)],
];

const S_CELLS: [Cells; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 2), (0, 1), (1, 1), (1, 0)],
    [(2, 2), (1, 2), (1, 1), (0, 1)],
    [(2, 0), (2, 1), (1, 1), (1, 2)],
];

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::T,
        Piece::S,
        Piece::Z,
        Piece::J,
        Piece::L,
    ];

    /// Cells occupied at `rot`, relative to the reference point.
    #[inline(always)]
    pub fn cells(self, rot: Rotation) -> &'static Cells {
        let table = match self {
            Piece::I => &I_CELLS,
            Piece::O => &O_CELLS,
            Piece::T => &T_CELLS,
            Piece::S => &S_CELLS,
            Piece::Z => &Z_CELLS,
            Piece::J => &J_CELLS,
            Piece::L => &L_CELLS,
        };
        &table[rot.index()]
    }

    /// Width of the bounding box.
    pub fn width(self) -> u8 {
        match self {
            Piece::I => 4,
            Piece::O => 2,
            _ => 3,
        }
    }

    /// Lowest and highest `by` offset at `rot`.
    pub fn row_span(self, rot: Rotation) -> (u8, u8) {
        let cells = self.cells(rot);
        let min = cells.iter().map(|&(_, by)| by).min().unwrap_or(0);
        let max = cells.iter().map(|&(_, by)| by).max().unwrap_or(0);
        (min, max)
    }

    pub fn name(self) -> char {
        match self {
            Piece::I => 'I',
            Piece::O => 'O',
            Piece::T => 'T',
            Piece::S => 'S',
            Piece::Z => 'Z',
            Piece::J => 'J',
            Piece::L => 'L',
        }
    }
}

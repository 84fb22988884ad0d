//! SRS and SRS+ kick tables for piece rotation.
//!
//! A kick `(dx, dy)` moves the piece to `(x + dx, y - dy)`.

use serde::{Deserialize, Serialize};
use stacker_core::{Piece, Rotation};

pub type Kicks = [(i8, i8); 5];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KickTable {
    #[serde(rename = "SRS")]
    Srs,
    #[default]
    #[serde(rename = "SRS+")]
    SrsPlus,
}

struct KickData {
    standard: [Kicks; 12],
    i: [Kicks; 12],
}

/// Transition slot for `[from][to]`; the diagonal is unused.
const TRANSITION_INDEX: [[u8; 4]; 4] = [
    [u8::MAX, 0, 8, 7],
    [1, u8::MAX, 2, 9],
    [10, 3, u8::MAX, 4],
    [6, 11, 5, u8::MAX],
];

// Slot order: 0->1, 1->0, 1->2, 2->1, 2->3, 3->2, 3->0, 0->3, 0->2, 1->3, 2->0, 3->1
const STANDARD_KICKS: [Kicks; 12] = [
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, -1), (1, -1), (-1, -1), (1, 0), (-1, 0)],
    [(1, 0), (1, -2), (1, -1), (0, -2), (0, -1)],
    [(0, 1), (-1, 1), (1, 1), (-1, 0), (1, 0)],
    [(-1, 0), (-1, -2), (-1, -1), (0, -2), (0, -1)],
];

const SRS: KickData = KickData {
    standard: STANDARD_KICKS,
    i: [
        [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
        [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
        [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
        [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
        [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
        [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
        [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
        [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
        [(0, 0); 5],
        [(0, 0); 5],
        [(0, 0); 5],
        [(0, 0); 5],
    ],
};

const SRS_PLUS: KickData = KickData {
    standard: STANDARD_KICKS,
    i: [
        [(0, 0), (1, 0), (-2, 0), (-2, 1), (1, -2)],
        [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
        [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
        [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
        [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
        [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
        [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
        [(0, 0), (-1, 0), (2, 0), (2, 1), (-1, -2)],
        [(0, 0), (0, -1), (0, 0), (0, 0), (0, 0)],
        [(0, 0), (1, 0), (0, 0), (0, 0), (0, 0)],
        [(0, 0), (0, 1), (0, 0), (0, 0), (0, 0)],
        [(0, 0), (-1, 0), (0, 0), (0, 0), (0, 0)],
    ],
};

/// Kick offsets to try, in order, for a rotation transition.
/// Panics when `from == to`.
#[inline]
pub fn get_kicks(table: KickTable, piece: Piece, from: Rotation, to: Rotation) -> &'static Kicks {
    let slot = TRANSITION_INDEX[from.index()][to.index()];
    assert!(slot != u8::MAX, "no kick transition from {from:?} to itself");

    let data = match table {
        KickTable::Srs => &SRS,
        KickTable::SrsPlus => &SRS_PLUS,
    };
    match piece {
        Piece::I => &data.i[slot as usize],
        _ => &data.standard[slot as usize],
    }
}

/// Whether a board displacement `(dx, dy)` (y up) is one of the designated
/// difficult kicks that always grant a full T-spin.
#[inline]
pub fn is_difficult_kick(from: Rotation, to: Rotation, displacement: (i8, i8)) -> bool {
    use Rotation::*;
    match (from, to) {
        (South, West) | (North, West) => displacement == (1, -2),
        (South, East) | (North, East) => displacement == (-1, -2),
        _ => false,
    }
}

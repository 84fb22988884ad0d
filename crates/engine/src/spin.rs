//! Spin classification after a successful rotation.

use stacker_core::{Falling, Piece, Rotation, SpinType};

use crate::config::SpinRule;
use crate::game::Game;

/// Box corners around a T at reference `(x, y)`: top-left, top-right,
/// bottom-left, bottom-right.
fn t_corners(x: i8, y: i8) -> [(i8, i8); 4] {
    [(x - 2, y), (x, y), (x - 2, y - 2), (x, y - 2)]
}

/// Indices into `t_corners` on the side the T points to.
fn front_corners(rotation: Rotation) -> [usize; 2] {
    match rotation {
        Rotation::North => [0, 1],
        Rotation::East => [1, 3],
        Rotation::South => [2, 3],
        Rotation::West => [0, 2],
    }
}

impl Game {
    /// Three-corner rule for the active T. Walls and floor count as filled.
    pub fn detect_t_spin(&self) -> SpinType {
        let Falling { x, y, rotation, .. } = self.piece;
        let filled = t_corners(x, y).map(|(cx, cy)| self.board.is_occupied(cx, cy));
        if filled.iter().filter(|&&f| f).count() < 3 {
            return SpinType::None;
        }
        let [a, b] = front_corners(rotation);
        if filled[a] && filled[b] {
            SpinType::Full
        } else {
            SpinType::Mini
        }
    }

    /// Active piece cannot shift one cell in any direction.
    pub fn is_immobile(&self) -> bool {
        let Falling { x, y, rotation, .. } = self.piece;
        let map = &self.collision_map;
        map.test(x, y + 1, rotation)
            && map.test(x + 1, y, rotation)
            && map.test(x, y - 1, rotation)
            && map.test(x - 1, y, rotation)
    }

    /// Spin credit for the current position under `rule`.
    pub fn classify_spin(&self, rule: SpinRule, difficult_kick: bool) -> SpinType {
        if rule == SpinRule::None {
            return SpinType::None;
        }

        if self.piece.piece == Piece::T {
            let detected = if difficult_kick {
                SpinType::Full
            } else {
                self.detect_t_spin()
            };
            return match (rule, detected) {
                (_, SpinType::None) => SpinType::None,
                (SpinRule::TMini, _) => SpinType::Mini,
                (SpinRule::TFull, SpinType::Mini) => SpinType::None,
                (_, spin) => spin,
            };
        }

        if rule == SpinRule::All && self.piece.piece != Piece::I && self.is_immobile() {
            SpinType::Mini
        } else {
            SpinType::None
        }
    }

    pub(crate) fn update_spin(&mut self, rule: SpinRule, difficult_kick: bool) {
        self.spin = self.classify_spin(rule, difficult_kick);
    }
}

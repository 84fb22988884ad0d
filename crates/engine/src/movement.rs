//! Piece movement: shifts, drops and kicked rotations.

use stacker_core::{Key, Rotation, SpinType};

use crate::config::GameConfig;
use crate::game::Game;
use crate::kicks::{get_kicks, is_difficult_kick};

/// Result of a successful rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationResult {
    pub from: Rotation,
    pub to: Rotation,
    /// Offset taken from the kick table, `None` when the piece turned in place.
    pub kick: Option<(i8, i8)>,
    pub kick_index: usize,
    pub difficult: bool,
    pub spin_type: SpinType,
}

/// Primitive piece controls shared by every consumer of the move vocabulary.
pub trait PieceControl {
    fn move_left(&mut self) -> bool;
    fn move_right(&mut self) -> bool;
    fn das_left(&mut self) -> bool;
    fn das_right(&mut self) -> bool;
    fn soft_drop(&mut self) -> bool;
    /// Rotate by `amount` quarter turns clockwise.
    fn rotate(&mut self, amount: u8, config: &GameConfig) -> bool;
    fn hold(&mut self) -> bool;
}

impl Game {
    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        let (x, y) = (self.piece.x + dx, self.piece.y + dy);
        if self.collision_map.test(x, y, self.piece.rotation) {
            return false;
        }
        self.piece.x = x;
        self.piece.y = y;
        self.spin = SpinType::None;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1, 0)
    }

    pub fn das_left(&mut self) -> bool {
        let mut moved = false;
        while self.shift(-1, 0) {
            moved = true;
        }
        moved
    }

    pub fn das_right(&mut self) -> bool {
        let mut moved = false;
        while self.shift(1, 0) {
            moved = true;
        }
        moved
    }

    /// Drop to the floor. Returns whether the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        let mut moved = false;
        while self.shift(0, -1) {
            moved = true;
        }
        moved
    }

    /// Rotate with kicks. Tries in place first, then each kick offset in order.
    pub fn try_rotate(&mut self, amount: u8, config: &GameConfig) -> Option<RotationResult> {
        assert!((1..=3).contains(&amount), "rotation amount must be 1..=3, got {amount}");
        let from = self.piece.rotation;
        let to = from.turn(amount);
        let (x, y) = (self.piece.x, self.piece.y);

        if !self.collision_map.test(x, y, to) {
            self.piece.rotation = to;
            self.update_spin(config.spins, false);
            return Some(RotationResult {
                from,
                to,
                kick: None,
                kick_index: 0,
                difficult: false,
                spin_type: self.spin,
            });
        }

        let kicks = get_kicks(config.kicks, self.piece.piece, from, to);
        for (i, &(dx, dy)) in kicks.iter().enumerate() {
            let (nx, ny) = (x + dx, y - dy);
            if self.collision_map.test(nx, ny, to) {
                continue;
            }
            let difficult = is_difficult_kick(from, to, (dx, -dy));
            self.piece.x = nx;
            self.piece.y = ny;
            self.piece.rotation = to;
            self.update_spin(config.spins, difficult);
            return Some(RotationResult {
                from,
                to,
                kick: Some((dx, dy)),
                kick_index: i + 1,
                difficult,
                spin_type: self.spin,
            });
        }

        None
    }
}

impl PieceControl for Game {
    fn move_left(&mut self) -> bool {
        Game::move_left(self)
    }

    fn move_right(&mut self) -> bool {
        Game::move_right(self)
    }

    fn das_left(&mut self) -> bool {
        Game::das_left(self)
    }

    fn das_right(&mut self) -> bool {
        Game::das_right(self)
    }

    fn soft_drop(&mut self) -> bool {
        Game::soft_drop(self)
    }

    fn rotate(&mut self, amount: u8, config: &GameConfig) -> bool {
        self.try_rotate(amount, config).is_some()
    }

    fn hold(&mut self) -> bool {
        Game::hold(self)
    }
}

/// Execute one key. `HardDrop` only drops the piece; locking is the caller's
/// job. Panics on `Key::None`.
pub fn apply_key<C: PieceControl + ?Sized>(control: &mut C, key: Key, config: &GameConfig) -> bool {
    match key {
        Key::None => panic!("Key::None cannot be executed"),
        Key::Left => control.move_left(),
        Key::Right => control.move_right(),
        Key::SoftDrop => control.soft_drop(),
        Key::Cw | Key::Ccw | Key::Flip => key
            .rotation_amount()
            .is_some_and(|amount| control.rotate(amount, config)),
        Key::DasLeft => control.das_left(),
        Key::DasRight => control.das_right(),
        Key::Hold => control.hold(),
        Key::HardDrop => {
            control.soft_drop();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::PREVIEW;
    use stacker_core::{Board, Falling, Piece};

    fn game(piece: Piece) -> Game {
        Game::new(piece, [Piece::T; PREVIEW])
    }

    #[test]
    fn test_das_reaches_walls() {
        let mut g = game(Piece::T);
        assert!(g.das_left());
        assert_eq!(g.piece.x, 2);
        assert!(!g.das_left());
        assert!(g.das_right());
        assert_eq!(g.piece.x, 9);
        assert!(!g.move_right());
    }

    #[test]
    fn test_soft_drop_lands_on_floor() {
        let mut g = game(Piece::O);
        assert!(g.soft_drop());
        assert_eq!(g.piece.y, 1);
        assert!(!g.soft_drop());
    }

    #[test]
    fn test_soft_drop_lands_on_stack() {
        let mut board = Board::new();
        board.set(4, 5);
        let mut g = game(Piece::O).with_board(board);
        g.soft_drop();
        assert_eq!(g.piece.y, 7);
    }

    #[test]
    fn test_rotation_in_place() {
        let mut g = game(Piece::T);
        let result = g.try_rotate(1, &GameConfig::none()).expect("free space");
        assert_eq!(result.kick, None);
        assert_eq!(result.to, Rotation::East);
        assert_eq!(g.piece.rotation, Rotation::East);
        assert_eq!((g.piece.x, g.piece.y), (5, 22));
    }

    #[test]
    fn test_full_circle_returns_to_spawn() {
        let mut g = game(Piece::J);
        for _ in 0..4 {
            assert!(g.try_rotate(1, &GameConfig::none()).is_some());
        }
        assert_eq!(g.piece, Falling::spawn(Piece::J));
        g.try_rotate(2, &GameConfig::none());
        g.try_rotate(2, &GameConfig::none());
        assert_eq!(g.piece, Falling::spawn(Piece::J));
    }

    #[test]
    fn test_rotation_kicks_off_wall() {
        let mut g = game(Piece::I);
        g.try_rotate(1, &GameConfig::none());
        g.das_left();
        let x = g.piece.x;
        let result = g.try_rotate(3, &GameConfig::none()).expect("kick off wall");
        assert!(result.kick.is_some());
        assert!(g.piece.x > x);
        assert!(!g.collision_map().test(g.piece.x, g.piece.y, g.piece.rotation));
    }

    #[test]
    fn test_movement_resets_spin() {
        let mut g = game(Piece::T);
        g.spin = SpinType::Mini;
        assert!(g.move_left());
        assert_eq!(g.spin, SpinType::None);

        g.das_right();
        g.spin = SpinType::Full;
        assert!(!g.move_right());
        assert_eq!(g.spin, SpinType::Full);
    }

    #[test]
    fn test_drop_after_spin_rotation_clears_spin() {
        // three corners of the T box filled, nothing under the stem
        let mut board = Board::new();
        board.set(3, 12);
        board.set(5, 12);
        board.set(3, 10);
        let mut g = game(Piece::T).with_board(board);
        g.piece = Falling {
            piece: Piece::T,
            x: 5,
            y: 12,
            rotation: Rotation::North,
        };
        let config = GameConfig {
            spins: crate::config::SpinRule::T,
            ..GameConfig::none()
        };

        let result = g.try_rotate(1, &config).expect("turns in place");
        assert_eq!(result.kick, None);
        assert_eq!(g.spin, SpinType::Mini);

        assert!(g.soft_drop());
        assert_eq!(g.spin, SpinType::None);
    }

    #[test]
    fn test_apply_key_dispatch() {
        let config = GameConfig::none();
        let mut g = game(Piece::T);
        assert!(apply_key(&mut g, Key::Flip, &config));
        assert_eq!(g.piece.rotation, Rotation::South);
        assert!(apply_key(&mut g, Key::DasLeft, &config));
        assert!(apply_key(&mut g, Key::HardDrop, &config));
        assert!(!apply_key(&mut g, Key::SoftDrop, &config));
        assert!(apply_key(&mut g, Key::Hold, &config));
        assert_eq!(g.hold, Some(Piece::T));
    }

    #[test]
    #[should_panic]
    fn test_apply_none_panics() {
        let mut g = game(Piece::T);
        apply_key(&mut g, Key::None, &GameConfig::none());
    }
}

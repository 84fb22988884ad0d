//! Move, spin and input-key definitions.

use std::fmt;
use std::str::FromStr;

use crate::{Piece, Rotation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum SpinType {
    #[default]
    None,
    Mini,
    Full,
}

impl SpinType {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A final placement. Search uses it as the "first move" record of a branch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub hold_used: bool,
    pub spin_type: SpinType,
}

impl Move {
    pub const ZERO: Self = Self {
        piece: Piece::I,
        rotation: Rotation::North,
        x: 0,
        y: 0,
        hold_used: false,
        spin_type: SpinType::None,
    };

    pub fn new(piece: Piece, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            piece,
            rotation,
            x,
            y,
            hold_used: false,
            spin_type: SpinType::None,
        }
    }

    pub fn with_spin(mut self, spin_type: SpinType) -> Self {
        self.spin_type = spin_type;
        self
    }

    pub fn with_hold(mut self) -> Self {
        self.hold_used = true;
        self
    }

    /// Absolute board cells covered by this placement.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let cells = self.piece.cells(self.rotation);
        std::array::from_fn(|i| (self.x - cells[i].0 as i8, self.y - cells[i].1 as i8))
    }
}

/// Primitive inputs. `None` is a sentinel and must never be executed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Key {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "moveLeft")]
    Left,
    #[serde(rename = "moveRight")]
    Right,
    #[serde(rename = "softDrop")]
    SoftDrop,
    #[serde(rename = "rotateCCW")]
    Ccw,
    #[serde(rename = "rotateCW")]
    Cw,
    #[serde(rename = "rotate180")]
    Flip,
    #[serde(rename = "dasLeft")]
    DasLeft,
    #[serde(rename = "dasRight")]
    DasRight,
    #[serde(rename = "hold")]
    Hold,
    #[serde(rename = "hardDrop")]
    HardDrop,
}

impl Key {
    pub const ALL: [Key; 11] = [
        Key::None,
        Key::Left,
        Key::Right,
        Key::SoftDrop,
        Key::Ccw,
        Key::Cw,
        Key::Flip,
        Key::DasLeft,
        Key::DasRight,
        Key::Hold,
        Key::HardDrop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Key::None => "none",
            Key::Left => "moveLeft",
            Key::Right => "moveRight",
            Key::SoftDrop => "softDrop",
            Key::Ccw => "rotateCCW",
            Key::Cw => "rotateCW",
            Key::Flip => "rotate180",
            Key::DasLeft => "dasLeft",
            Key::DasRight => "dasRight",
            Key::Hold => "hold",
            Key::HardDrop => "hardDrop",
        }
    }

    /// Quarter turns clockwise for rotation keys.
    pub fn rotation_amount(self) -> Option<u8> {
        match self {
            Key::Cw => Some(1),
            Key::Flip => Some(2),
            Key::Ccw => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key `{0}`")]
pub struct ParseKeyError(pub String);

impl FromStr for Key {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| ParseKeyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_new() {
        let m = Move::new(Piece::T, Rotation::North, 4, 0);
        assert_eq!(m.piece, Piece::T);
        assert_eq!(m.rotation, Rotation::North);
        assert_eq!(m.x, 4);
        assert_eq!(m.y, 0);
        assert!(!m.hold_used);
        assert_eq!(m.spin_type, SpinType::None);
    }

    #[test]
    fn test_move_with_spin_and_hold() {
        let m = Move::new(Piece::T, Rotation::South, 5, 2)
            .with_spin(SpinType::Full)
            .with_hold();
        assert_eq!(m.spin_type, SpinType::Full);
        assert!(m.hold_used);
    }

    #[test]
    fn test_move_cells() {
        let m = Move::new(Piece::I, Rotation::North, 6, 1);
        assert_eq!(m.cells(), [(6, 0), (5, 0), (4, 0), (3, 0)]);
    }

    #[test]
    fn test_key_names_roundtrip() {
        for key in Key::ALL {
            assert_eq!(key.name().parse::<Key>(), Ok(key));
        }
        assert!("rotateLeft".parse::<Key>().is_err());
    }

    #[test]
    fn test_key_serde_uses_wire_names() {
        let json = serde_json::to_string(&[Key::Ccw, Key::DasRight]).expect("serialize");
        assert_eq!(json, r#"["rotateCCW","dasRight"]"#);
        let keys: Vec<Key> = serde_json::from_str(r#"["hold","hardDrop"]"#).expect("parse");
        assert_eq!(keys, vec![Key::Hold, Key::HardDrop]);
    }
}

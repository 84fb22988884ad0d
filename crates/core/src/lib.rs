//! Stacker core crate - board, pieces and move vocabulary.

mod board;
mod falling;
mod moves;
mod piece;
pub mod render;

pub use board::Board;
pub use falling::Falling;
pub use moves::{Key, Move, ParseKeyError, SpinType};
pub use piece::{Cells, Piece, Rotation};

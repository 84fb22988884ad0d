//! cell-by-cell collision checks - walls, floor, other blocks
//!
//! Reference implementation for `CollisionMap`; too slow for the search paths.

use stacker_core::{Board, Piece, Rotation};

/// does the piece overlap a filled cell or leave the board?
pub fn collides(board: &Board, piece: Piece, rotation: Rotation, x: i8, y: i8) -> bool {
    piece
        .cells(rotation)
        .iter()
        .any(|&(bx, by)| board.is_occupied(x - bx as i8, y - by as i8))
}

/// can we place here? (just !collides)
pub fn can_place(board: &Board, piece: Piece, rotation: Rotation, x: i8, y: i8) -> bool {
    !collides(board, piece, rotation, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_collision_empty_board() {
        let board = Board::new();
        assert!(!collides(&board, Piece::T, Rotation::North, 4, 1));
    }

    #[test]
    fn test_collision_with_wall() {
        let board = Board::new();
        // T north spans x-2..=x
        assert!(collides(&board, Piece::T, Rotation::North, 1, 5));
        assert!(collides(&board, Piece::T, Rotation::North, 10, 5));
    }

    #[test]
    fn test_collision_with_floor() {
        let board = Board::new();
        assert!(can_place(&board, Piece::T, Rotation::North, 4, 1));
        assert!(collides(&board, Piece::T, Rotation::North, 4, 0));
    }

    #[test]
    fn test_collision_with_block() {
        let mut board = Board::new();
        board.set(3, 0);
        assert!(collides(&board, Piece::T, Rotation::North, 4, 1));
        assert!(can_place(&board, Piece::T, Rotation::North, 4, 2));
    }
}

//! Simplified mate detection
//!
//! A king counts as mated when every in-bounds adjacent square holds a
//! friendly piece, i.e. it has no empty or enemy-occupied square to
//! step to. Whether the king is actually attacked, or whether an
//! escape square is safe, is deliberately not checked; this adjacency
//! heuristic is the game's sole win condition.

use crate::board::Board;
use crate::types::{Color, Square};

/// The eight adjacent offsets
const ADJACENT: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Check whether the king of `owner` at `king_sq` has no adjacent
/// empty or enemy-occupied square
pub fn is_mated(board: &Board, king_sq: Square, owner: Color) -> bool {
    for &(dr, dc) in &ADJACENT {
        if let Some(sq) = king_sq.offset(dr, dc) {
            match board.get(sq) {
                None => return false,
                Some(piece) if piece.color != owner => return false,
                Some(_) => {}
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceType};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn surround(board: &mut Board, center: Square, color: Color) {
        for &(dr, dc) in &ADJACENT {
            if let Some(s) = center.offset(dr, dc) {
                board.set(s, Some(Piece::new(PieceType::Pawn, color)));
            }
        }
    }

    #[test]
    fn test_lone_king_not_mated() {
        let mut board = Board::empty();
        let king = sq(4, 4);
        board.set(king, Some(Piece::new(PieceType::King, Color::Black)));
        assert!(!is_mated(&board, king, Color::Black));
    }

    #[test]
    fn test_surrounded_by_friends_is_mated() {
        let mut board = Board::empty();
        let king = sq(4, 4);
        board.set(king, Some(Piece::new(PieceType::King, Color::Black)));
        surround(&mut board, king, Color::Black);
        assert!(is_mated(&board, king, Color::Black));
    }

    #[test]
    fn test_one_empty_square_escapes() {
        let mut board = Board::empty();
        let king = sq(4, 4);
        board.set(king, Some(Piece::new(PieceType::King, Color::Black)));
        surround(&mut board, king, Color::Black);
        board.set(sq(3, 4), None);
        assert!(!is_mated(&board, king, Color::Black));
    }

    #[test]
    fn test_enemy_adjacent_counts_as_escape() {
        let mut board = Board::empty();
        let king = sq(4, 4);
        board.set(king, Some(Piece::new(PieceType::King, Color::White)));
        surround(&mut board, king, Color::White);
        board.set(sq(5, 5), Some(Piece::new(PieceType::Gold, Color::Black)));
        assert!(!is_mated(&board, king, Color::White));
    }

    #[test]
    fn test_corner_king() {
        // Off-board squares are not escapes; three friendly neighbors
        // are enough to mate a cornered king.
        let mut board = Board::empty();
        let king = sq(0, 0);
        board.set(king, Some(Piece::new(PieceType::King, Color::White)));
        for s in [sq(0, 1), sq(1, 0), sq(1, 1)] {
            board.set(s, Some(Piece::new(PieceType::Pawn, Color::White)));
        }
        assert!(is_mated(&board, king, Color::White));

        board.set(sq(1, 1), None);
        assert!(!is_mated(&board, king, Color::White));
    }
}

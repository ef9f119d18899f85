//! 9x9 board container
//!
//! Purely a container: one optional piece per square, no rule
//! enforcement. Bounds safety comes from `Square` construction, so the
//! accessors here are infallible.

use serde::{Deserialize, Serialize};

use crate::types::{Piece, Square};

/// Board state: 9x9 grid of optional pieces
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; 9]; 9],
}

impl Board {
    /// Create an empty board
    pub fn empty() -> Self {
        Board {
            squares: [[None; 9]; 9],
        }
    }

    /// Get the piece at a square
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Set or clear the piece at a square
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Check if a square is empty
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Iterator over all occupied squares
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Iterator over all empty squares
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|&sq| self.is_empty(sq))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, PieceType};

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(Square::all().all(|sq| board.is_empty(sq)));
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.empty_squares().count(), 81);
    }

    #[test]
    fn test_set_get() {
        let mut board = Board::empty();
        let sq = Square::new(4, 4).unwrap();
        let piece = Piece::new(PieceType::Silver, Color::Black);

        board.set(sq, Some(piece));
        assert_eq!(board.get(sq), Some(piece));
        assert!(!board.is_empty(sq));

        board.set(sq, None);
        assert!(board.is_empty(sq));
    }

    #[test]
    fn test_pieces_iterator() {
        let mut board = Board::empty();
        board.set(
            Square::new(0, 4).unwrap(),
            Some(Piece::new(PieceType::King, Color::White)),
        );
        board.set(
            Square::new(8, 4).unwrap(),
            Some(Piece::new(PieceType::King, Color::Black)),
        );

        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].0, Square::new(0, 4).unwrap());
        assert_eq!(pieces[1].0, Square::new(8, 4).unwrap());
        assert_eq!(board.empty_squares().count(), 79);
    }
}

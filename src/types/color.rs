//! Side to move (Color)

use serde::{Deserialize, Serialize};

use super::Square;

/// Side to move
///
/// Black is the player at the bottom of the board (back rank row 8,
/// forward is row-decreasing); White is the opponent at the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    Black = 0, // Sente
    White = 1, // Gote
}

impl Color {
    /// Number of colors
    pub const NUM: usize = 2;

    /// Get opposite color
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row delta of one forward step for this side
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// Index for per-color arrays
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// King home square at the start of a session
    #[inline]
    pub const fn king_home(self) -> Square {
        match self {
            Color::Black => Square::BLACK_KING_HOME,
            Color::White => Square::WHITE_KING_HOME,
        }
    }

    /// Whether a square lies in this side's promotion zone
    /// (the farthest three ranks from its own back rank)
    #[inline]
    pub const fn in_promotion_zone(self, sq: Square) -> bool {
        match self {
            Color::Black => sq.row() <= 2,
            Color::White => sq.row() >= 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn test_forward() {
        assert_eq!(Color::Black.forward(), -1);
        assert_eq!(Color::White.forward(), 1);
    }

    #[test]
    fn test_king_home() {
        assert_eq!(Color::Black.king_home().coords(), (8, 4));
        assert_eq!(Color::White.king_home().coords(), (0, 4));
    }

    #[test]
    fn test_promotion_zone() {
        assert!(Color::Black.in_promotion_zone(Square::new(0, 0).unwrap()));
        assert!(Color::Black.in_promotion_zone(Square::new(2, 8).unwrap()));
        assert!(!Color::Black.in_promotion_zone(Square::new(3, 4).unwrap()));
        assert!(Color::White.in_promotion_zone(Square::new(6, 0).unwrap()));
        assert!(Color::White.in_promotion_zone(Square::new(8, 8).unwrap()));
        assert!(!Color::White.in_promotion_zone(Square::new(5, 4).unwrap()));
    }
}

//! Piece with side information

use serde::{Deserialize, Serialize};

use super::{Color, PieceType};

/// Piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    /// Create new piece
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Check if piece is promoted
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.piece_type.is_promoted()
    }

    /// Promoted version of this piece, if it can promote
    #[inline]
    pub fn promote(self) -> Option<Self> {
        self.piece_type.promote().map(|pt| Piece::new(pt, self.color))
    }

    /// Base type entering the captor's pool when this piece is taken
    #[inline]
    pub const fn demoted_type(self) -> PieceType {
        self.piece_type.unpromote()
    }

    /// Check if this piece belongs to the given side
    #[inline]
    pub const fn is_owned_by(self, color: Color) -> bool {
        matches!(
            (self.color, color),
            (Color::Black, Color::Black) | (Color::White, Color::White)
        )
    }
}

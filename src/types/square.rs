//! Square on the 9x9 board
//!
//! Row 0 is the opponent's back rank, row 8 the player's back rank.
//! Bounds are validated at construction so the rest of the engine can
//! index the board without per-call-site range checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Square on the board (0-80, row-major)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Number of squares
    pub const NUM: usize = 81;

    /// Player king's home square (8,4)
    pub const BLACK_KING_HOME: Square = Square(8 * 9 + 4);
    /// Opponent king's home square (0,4)
    pub const WHITE_KING_HOME: Square = Square(4);

    /// Create a square from row and column, both in [0,8]
    #[inline]
    pub fn new(row: u8, col: u8) -> CoreResult<Square> {
        if row < 9 && col < 9 {
            Ok(Square(row * 9 + col))
        } else {
            Err(CoreError::OutOfRange {
                row: row as i16,
                col: col as i16,
            })
        }
    }

    /// Get row (0-8, top to bottom)
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Get column (0-8, left to right)
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Get (row, col) pair
    #[inline]
    pub const fn coords(self) -> (u8, u8) {
        (self.row(), self.col())
    }

    /// Get index (0-80)
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Create from index (0-80)
    #[inline]
    pub const fn from_index(idx: u8) -> Option<Square> {
        if idx < 81 {
            Some(Square(idx))
        } else {
            None
        }
    }

    /// Square displaced by (dr, dc), or None if off the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if (0..9).contains(&row) && (0..9).contains(&col) {
            Some(Square(row as u8 * 9 + col as u8))
        } else {
            None
        }
    }

    /// Iterator over every square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..81).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}

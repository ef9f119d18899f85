//! Basic value types
//!
//! ```text
//! Color
//!   |
//! Square
//!   |
//! PieceType
//!   |
//! Piece
//! ```

mod color;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use piece::Piece;
pub use piece_type::PieceType;
pub use square::Square;

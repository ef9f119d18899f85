//! Legal target generation per piece type
//!
//! All displacements are expressed relative to the owner's forward
//! direction (row-decreasing for Black, row-increasing for White).
//! Sliding pieces stop before a friendly piece and on an enemy piece;
//! the knight's leaps ignore intervening occupancy. A promoted horse or
//! dragon gains only the three backward king steps on top of its slides,
//! an asymmetry inherited from the game this engine implements.

use crate::board::Board;
use crate::types::{Piece, PieceType, Square};

/// The eight king steps
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The four diagonal slide directions
const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The four orthogonal slide directions
const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Compute the set of squares the piece at `from` may move to or
/// capture on. Self-capture is excluded; the result is duplicate-free.
pub fn legal_targets(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    let f = piece.color.forward();
    let mut targets = Vec::new();

    match piece.piece_type {
        PieceType::Pawn => {
            push_steps(board, from, piece, &[(f, 0)], &mut targets);
        }
        PieceType::Lance => {
            push_slides(board, from, piece, &[(f, 0)], &mut targets);
        }
        PieceType::Knight => {
            push_steps(board, from, piece, &[(2 * f, 1), (2 * f, -1)], &mut targets);
        }
        PieceType::Silver => {
            let steps = [(f, 0), (f, 1), (f, -1), (-f, 1), (-f, -1)];
            push_steps(board, from, piece, &steps, &mut targets);
        }
        pt if pt.moves_like_gold() => {
            let steps = [(f, 0), (f, 1), (f, -1), (0, 1), (0, -1), (-f, 0)];
            push_steps(board, from, piece, &steps, &mut targets);
        }
        PieceType::Bishop => {
            push_slides(board, from, piece, &DIAGONAL_DIRS, &mut targets);
        }
        PieceType::Horse => {
            push_slides(board, from, piece, &DIAGONAL_DIRS, &mut targets);
            push_steps(board, from, piece, &backward_steps(f), &mut targets);
        }
        PieceType::Rook => {
            push_slides(board, from, piece, &ORTHOGONAL_DIRS, &mut targets);
        }
        PieceType::Dragon => {
            push_slides(board, from, piece, &ORTHOGONAL_DIRS, &mut targets);
            push_steps(board, from, piece, &backward_steps(f), &mut targets);
        }
        PieceType::King => {
            push_steps(board, from, piece, &KING_STEPS, &mut targets);
        }
        // moves_like_gold covers Gold and the promoted minors
        _ => unreachable!("unhandled piece type"),
    }

    targets
}

/// The three backward king steps a horse or dragon gains on promotion
#[inline]
fn backward_steps(f: i8) -> [(i8, i8); 3] {
    [(-f, -1), (-f, 0), (-f, 1)]
}

/// Add single-step targets, keeping empty or enemy-occupied squares
fn push_steps(
    board: &Board,
    from: Square,
    piece: Piece,
    deltas: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            let capturable = match board.get(to) {
                None => true,
                Some(other) => other.color != piece.color,
            };
            if capturable && !targets.contains(&to) {
                targets.push(to);
            }
        }
    }
}

/// Add slide targets in each direction, stopping before a friendly
/// piece and on an enemy piece
fn push_slides(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(dr, dc) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match board.get(to) {
                None => {
                    if !targets.contains(&to) {
                        targets.push(to);
                    }
                }
                Some(other) => {
                    if other.color != piece.color && !targets.contains(&to) {
                        targets.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

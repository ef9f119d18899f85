//! Weighted summon draw and supply caps
//!
//! A summon offers the current side a random piece type for free
//! placement on any empty square. The draw walks a cumulative weight
//! table; if the drawn type is already at its supply cap on the board,
//! the whole draw fails for this invocation. There is no retry or
//! renormalization, so a call is not guaranteed to arm a summon.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::types::PieceType;

/// Summon weights per base type
pub const SUMMON_WEIGHTS: [(PieceType, u32); 7] = [
    (PieceType::Pawn, 10),
    (PieceType::Lance, 5),
    (PieceType::Knight, 5),
    (PieceType::Silver, 4),
    (PieceType::Gold, 3),
    (PieceType::Bishop, 2),
    (PieceType::Rook, 2),
];

/// Sum of all summon weights
pub const TOTAL_WEIGHT: u32 = 31;

/// Maximum simultaneous board count per base type
#[inline]
pub const fn supply_cap(pt: PieceType) -> u32 {
    match pt {
        PieceType::Pawn => 18,
        PieceType::Lance | PieceType::Knight | PieceType::Silver | PieceType::Gold => 4,
        PieceType::Bishop | PieceType::Rook => 2,
        _ => 0,
    }
}

/// Count pieces of the given base type on the board, both sides,
/// promoted or not. Demotion on capture keeps this count meaningful.
pub fn base_type_count(board: &Board, pt: PieceType) -> u32 {
    board
        .pieces()
        .filter(|(_, piece)| piece.piece_type.unpromote() == pt.unpromote())
        .count() as u32
}

/// Map a roll in [0, TOTAL_WEIGHT) to a piece type via the cumulative
/// weight table
pub(crate) fn pick_by_weight(roll: u32) -> PieceType {
    debug_assert!(roll < TOTAL_WEIGHT);
    let mut cumulative = 0;
    for &(pt, weight) in &SUMMON_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return pt;
        }
    }
    // roll < TOTAL_WEIGHT, so the walk always terminates above
    unreachable!("roll outside cumulative weight table")
}

/// Resolve a draw for a known roll: the drawn type, or None if it is
/// at its supply cap
pub(crate) fn resolve_roll(board: &Board, roll: u32) -> Option<PieceType> {
    let pt = pick_by_weight(roll);
    let count = base_type_count(board, pt);
    if count < supply_cap(pt) {
        Some(pt)
    } else {
        debug!("summon draw of {pt:?} failed: {count} on board at cap");
        None
    }
}

/// Draw the next summon, or None if the drawn type is at its cap
pub fn draw_summon<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<PieceType> {
    let roll = rng.random_range(0..TOTAL_WEIGHT);
    resolve_roll(board, roll)
}

//! Rules engine for Summon Shogi
//!
//! A single-player-vs-opponent shogi variant: instead of dropping
//! captured pieces by choice, each side periodically receives a
//! weighted-random "summon" of a new piece type to place on any empty
//! square. This crate is the complete rules core (board state, legal
//! move generation, the summon probability model, capture/promotion
//! handling, and the simplified mate check), consumed by a rendering
//! collaborator through [`GameSession`] commands and the read-only
//! [`SessionState`] projections.
//!
//! The rule set is intentionally simplified: mate is "the king has no
//! adjacent empty or enemy-occupied square", with no attack or escape
//! verification, and none of full shogi's drop restrictions apply.

pub mod board;
pub mod error;
pub mod game;
pub mod mate;
pub mod movegen;
pub mod summon;
pub mod types;

pub use board::Board;
pub use error::{CoreError, CoreResult};
pub use game::{GameSession, Phase, SessionState};
pub use mate::is_mated;
pub use movegen::legal_targets;
pub use summon::{draw_summon, SUMMON_WEIGHTS, TOTAL_WEIGHT};
pub use types::{Color, Piece, PieceType, Square};

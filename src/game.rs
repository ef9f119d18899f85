//! Session state and the turn state machine
//!
//! `SessionState` is a plain serializable value holding everything a
//! rendering collaborator needs; `GameSession` owns one such value plus
//! the RNG and is the only mutator. Every command is processed to
//! completion, including the mate check after a turn flip, before the
//! next input is accepted. Inputs that are invalid for the current
//! phase are ignored silently.

use log::debug;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::mate::is_mated;
use crate::movegen::legal_targets;
use crate::summon::draw_summon;
use crate::types::{Color, Piece, PieceType, Square};

/// Phase of the turn state machine, derived from the session fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    PlacementArmed,
    PromotionPending,
    Terminal,
}

/// Serializable session state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    board: Board,
    turn: Color,
    armed: Option<PieceType>,
    selected: Option<Square>,
    highlights: Vec<Square>,
    last_move: Square,
    pending_promotion: Option<Square>,
    king_squares: [Square; 2],
    captured: [Vec<PieceType>; 2],
    winner: Option<Color>,
}

impl SessionState {
    /// Fresh state: the two kings on their home squares, Black to move
    pub fn initial() -> Self {
        let mut board = Board::empty();
        board.set(
            Square::BLACK_KING_HOME,
            Some(Piece::new(PieceType::King, Color::Black)),
        );
        board.set(
            Square::WHITE_KING_HOME,
            Some(Piece::new(PieceType::King, Color::White)),
        );
        SessionState {
            board,
            turn: Color::Black,
            armed: None,
            selected: None,
            highlights: Vec::new(),
            last_move: Square::BLACK_KING_HOME,
            pending_promotion: None,
            king_squares: [Square::BLACK_KING_HOME, Square::WHITE_KING_HOME],
            captured: [Vec::new(), Vec::new()],
            winner: None,
        }
    }

    /// Current machine phase
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Terminal
        } else if self.pending_promotion.is_some() {
            Phase::PromotionPending
        } else if self.armed.is_some() {
            Phase::PlacementArmed
        } else if self.selected.is_some() {
            Phase::PieceSelected
        } else {
            Phase::AwaitingSelection
        }
    }

    /// Board contents
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Piece type currently armed for placement
    pub fn armed_piece(&self) -> Option<PieceType> {
        self.armed
    }

    /// Square of the selected board piece, if any
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Currently highlighted legal target squares
    pub fn highlights(&self) -> &[Square] {
        &self.highlights
    }

    /// Square of the last completed move or placement
    pub fn last_move(&self) -> Square {
        self.last_move
    }

    /// Square with an outstanding promotion decision
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// King square of the given side
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Captured-piece pool of the given side (demoted base types)
    pub fn captured(&self, color: Color) -> &[PieceType] {
        &self.captured[color.index()]
    }

    /// Winner, once the session is terminal
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Squares the side to move's king could step to, for display
    pub fn king_move_options(&self) -> Vec<Square> {
        let sq = self.king_square(self.turn);
        match self.board.get(sq) {
            Some(piece) => legal_targets(&self.board, sq, piece),
            None => Vec::new(),
        }
    }

    /// Union of every board piece's legal targets, for display
    pub fn all_move_options(&self) -> Vec<Square> {
        let mut out = Vec::new();
        for (sq, piece) in self.board.pieces() {
            for target in legal_targets(&self.board, sq, piece) {
                if !out.contains(&target) {
                    out.push(target);
                }
            }
        }
        out
    }
}

/// Game session: session state plus the summon RNG
pub struct GameSession {
    state: SessionState,
    rng: Xoshiro256PlusPlus,
}

impl GameSession {
    /// Create a session with an OS-seeded RNG
    pub fn new() -> Self {
        GameSession {
            state: SessionState::initial(),
            rng: Xoshiro256PlusPlus::from_os_rng(),
        }
    }

    /// Create a session with a fixed seed, for deterministic play
    pub fn with_seed(seed: u64) -> Self {
        GameSession {
            state: SessionState::initial(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Read-only view of the session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the session state with a previously captured snapshot
    pub fn restore(&mut self, state: SessionState) -> &SessionState {
        self.state = state;
        &self.state
    }

    /// Discard all progress and start a fresh session
    pub fn reset(&mut self) -> &SessionState {
        debug!("session reset");
        self.state = SessionState::initial();
        &self.state
    }

    /// Handle a tap on a board square, dispatching on the current phase
    pub fn select_square(&mut self, sq: Square) -> &SessionState {
        if self.state.winner.is_some() || self.state.pending_promotion.is_some() {
            debug!("tap on {sq} ignored in {:?}", self.state.phase());
            return &self.state;
        }

        let highlighted = self.state.highlights.contains(&sq);
        if highlighted {
            if self.state.selected.is_some() {
                self.move_selected(sq);
            } else if self.state.armed.is_some() {
                self.place_armed(sq);
            }
        } else if self.state.armed.is_none()
            && self
                .state
                .board
                .get(sq)
                .is_some_and(|p| p.color == self.state.turn)
        {
            self.select_piece(sq);
        } else if self.state.selected.is_some() {
            debug!("selection cleared");
            self.state.selected = None;
            self.state.highlights.clear();
        }
        &self.state
    }

    /// Draw a summon for the side to move and arm it for placement.
    /// No-op unless awaiting selection; a draw of a type at its supply
    /// cap arms nothing.
    pub fn request_summon(&mut self) -> &SessionState {
        if self.state.phase() != Phase::AwaitingSelection {
            debug!("summon request ignored in {:?}", self.state.phase());
            return &self.state;
        }
        if let Some(pt) = draw_summon(&self.state.board, &mut self.rng) {
            self.arm_placement(pt);
        }
        &self.state
    }

    /// Arm a piece from the side to move's captured pool for placement.
    /// The piece leaves the pool at arming time.
    pub fn arm_captured(&mut self, index: usize) -> &SessionState {
        if self.state.phase() != Phase::AwaitingSelection {
            debug!("captured-piece arm ignored in {:?}", self.state.phase());
            return &self.state;
        }
        let pool = &mut self.state.captured[self.state.turn.index()];
        if index >= pool.len() {
            return &self.state;
        }
        let pt = pool.remove(index);
        self.arm_placement(pt);
        &self.state
    }

    /// Resolve an outstanding promotion decision. Either choice ends
    /// the turn.
    pub fn choose_promotion(&mut self, accept: bool) -> &SessionState {
        let Some(sq) = self.state.pending_promotion.take() else {
            debug!("promotion choice ignored: none pending");
            return &self.state;
        };
        if accept {
            if let Some(promoted) = self.state.board.get(sq).and_then(Piece::promote) {
                debug!("promoted to {:?} at {sq}", promoted.piece_type);
                self.state.board.set(sq, Some(promoted));
            }
        }
        self.finish_turn();
        &self.state
    }

    fn select_piece(&mut self, sq: Square) {
        let Some(piece) = self.state.board.get(sq) else {
            return;
        };
        debug!("selected {:?} at {sq}", piece.piece_type);
        self.state.selected = Some(sq);
        self.state.highlights = legal_targets(&self.state.board, sq, piece);
    }

    fn move_selected(&mut self, to: Square) {
        let Some(from) = self.state.selected.take() else {
            return;
        };
        let Some(piece) = self.state.board.get(from) else {
            return;
        };

        if let Some(target) = self.state.board.get(to) {
            if target.color != piece.color {
                let pooled = target.demoted_type();
                debug!("captured {:?} at {to}, pooled as {pooled:?}", target.piece_type);
                self.state.captured[piece.color.index()].push(pooled);
            }
        }

        self.state.board.set(to, Some(piece));
        self.state.board.set(from, None);
        self.state.highlights.clear();
        self.state.last_move = to;
        if piece.piece_type == PieceType::King {
            self.state.king_squares[piece.color.index()] = to;
        }
        debug!("moved {:?} {from} -> {to}", piece.piece_type);

        // Placements never reach here, so a board-to-board move is the
        // only way into the promotion dialog.
        if piece.piece_type.can_promote() && piece.color.in_promotion_zone(to) {
            debug!("promotion pending at {to}");
            self.state.pending_promotion = Some(to);
        } else {
            self.finish_turn();
        }
    }

    fn place_armed(&mut self, to: Square) {
        let Some(pt) = self.state.armed.take() else {
            return;
        };
        // Armed highlights are always empty squares; placement is
        // never eligible for promotion.
        self.state.board.set(to, Some(Piece::new(pt, self.state.turn)));
        self.state.highlights.clear();
        self.state.last_move = to;
        debug!("placed {pt:?} at {to}");
        self.finish_turn();
    }

    fn arm_placement(&mut self, pt: PieceType) {
        self.state.armed = Some(pt);
        self.state.highlights = self.state.board.empty_squares().collect();
        debug!(
            "armed placement of {pt:?} for {:?}, {} targets",
            self.state.turn,
            self.state.highlights.len()
        );
    }

    /// Flip the turn and evaluate mate against the side to move next
    fn finish_turn(&mut self) {
        self.state.turn = self.state.turn.opposite();
        let defender = self.state.turn;
        if is_mated(&self.state.board, self.state.king_square(defender), defender) {
            let winner = defender.opposite();
            debug!("mate: {winner:?} wins");
            self.state.winner = Some(winner);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

//! Tapered static evaluation
//!
//! Scores a position from the decoded piece-square table alone: material and
//! placement for the midgame and the endgame are summed separately and then
//! blended by how much non-pawn material is left.
//!
//! ## Module Organization
//!
//! - `pst` - Packed piece-square constants and their one-time decoder

pub mod pst;

use crate::constants::MAX_PHASE;
use crate::position::Position;
use crate::types::{PieceKind, Side};
use pst::PieceSquareTable;

/// Static evaluator holding the decoded piece-square table.
#[derive(Clone)]
pub struct Evaluator {
    table: Box<PieceSquareTable>,
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator").finish_non_exhaustive()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self { table: pst::decode() }
    }

    /// Score of `pos` for the side to move.
    pub fn evaluate<P: Position>(&self, pos: &P) -> i32 {
        self.evaluate_placement(|side, kind| pos.pieces(side, kind), pos.side_to_move())
    }

    /// Score of an arbitrary piece placement for `side_to_move`.
    ///
    /// `pieces(side, kind)` returns the occupancy bitboard (bit 0 = a1).
    pub fn evaluate_placement<F>(&self, pieces: F, side_to_move: Side) -> i32
    where
        F: Fn(Side, PieceKind) -> u64,
    {
        let mut mg = 0;
        let mut eg = 0;
        let mut phase = 0;

        for side in Side::ALL {
            // Table squares are Black's view; White reads it upside down.
            let (flip, sign) = match side {
                Side::White => (0b111_000, 1),
                Side::Black => (0, -1),
            };
            for kind in PieceKind::ALL {
                let mut mask = pieces(side, kind);
                while mask != 0 {
                    let square = mask.trailing_zeros() as usize;
                    mask &= mask - 1;

                    let index = (square ^ flip) * 12 + kind.index() * 2;
                    mg += self.table[index] * sign;
                    eg += self.table[index + 1] * sign;
                    phase += kind.phase_weight();
                }
            }
        }

        // Promotions can push the phase past a full set of pieces.
        let phase = phase.min(MAX_PHASE);
        let blended = (phase * mg + (MAX_PHASE - phase) * eg) / MAX_PHASE;
        match side_to_move {
            Side::White => blended,
            Side::Black => -blended,
        }
    }
}

//! Forward pruning at null-window nodes
//!
//! Two cheap tests run before any move is generated:
//!
//! - **Extrapolation**: a quiescence-only look at the node, widened by a
//!   margin per remaining ply. Far enough outside the window, the node is
//!   settled without a real search.
//! - **Null move**: let the opponent move twice. If a reduced search still
//!   fails high, a real move will too.

use super::negascout::Search;
use crate::constants::*;
use crate::position::Position;
use crate::types::Aborted;

impl<P: Position> Search<'_, P> {
    /// Score that settles the node early, if either test applies.
    ///
    /// Callers only invoke this out of check on a null window with
    /// `depth > 0`.
    pub(super) fn forward_prune(
        &mut self,
        ply: usize,
        depth: i32,
        alpha: i32,
        beta: i32,
        null_ok: bool,
    ) -> Result<Option<i32>, Aborted> {
        if ply >= EXTRAPOLATION_MIN_PLY {
            let quiet = self.negascout(ply, 0, alpha, beta, true)?;
            if quiet - EXTRAPOLATION_HIGH_MARGIN * depth >= beta
                || quiet + EXTRAPOLATION_LOW_MARGIN * depth <= alpha
            {
                return Ok(Some(quiet));
            }
        }

        if null_ok && depth > 1 && self.pos.make_null_move() {
            let reduction = NULL_MOVE_BASE_REDUCTION + depth / NULL_MOVE_DEPTH_DIVISOR;
            let searched = self.negascout(ply + 1, depth - reduction, -beta, -alpha, false);
            self.pos.undo_null_move();
            let score = -searched?;
            if score >= beta {
                return Ok(Some(score));
            }
        }

        Ok(None)
    }
}

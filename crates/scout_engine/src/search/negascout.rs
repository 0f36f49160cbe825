//! Recursive NegaScout node search
//!
//! Each node returns a fail-soft score from the side to move's point of view,
//! or [`Aborted`] once the move time is used up. A node that makes a move
//! always takes it back before looking at the child's result, so an abort
//! unwinds the whole line with the position restored.

use super::ordering::{order_moves, parity, OrderingContext};
use super::Engine;
use crate::clock::Clock;
use crate::constants::*;
use crate::position::Position;
use crate::types::{Aborted, Bound, NodeResult};

/// Time limit a search polls against.
#[derive(Clone, Copy)]
pub(crate) struct Deadline<'c> {
    pub clock: &'c dyn Clock,
    pub limit_ms: u64,
}

/// One search over one position: the engine's tables plus the per-search
/// bits (position, deadline, best root move so far).
pub(crate) struct Search<'a, P: Position> {
    pub engine: &'a mut Engine,
    pub pos: &'a mut P,
    pub deadline: Option<Deadline<'a>>,
    /// Last root move that raised alpha. Survives aborted iterations.
    pub root_best: Option<P::Move>,
}

impl<'a, P: Position> Search<'a, P> {
    pub fn new(engine: &'a mut Engine, pos: &'a mut P, deadline: Option<Deadline<'a>>) -> Self {
        Self {
            engine,
            pos,
            deadline,
            root_best: None,
        }
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| deadline.clock.elapsed_ms() >= deadline.limit_ms)
    }

    /// Searches the current position with `depth` plies remaining and the
    /// window `(alpha, beta)`.
    pub fn negascout(
        &mut self,
        ply: usize,
        mut depth: i32,
        mut alpha: i32,
        beta: i32,
        null_ok: bool,
    ) -> NodeResult {
        self.engine.nodes += 1;
        let root = ply == 0;
        let hash = self.pos.hash();

        if !root && self.pos.is_repetition() {
            return Ok(DRAW);
        }

        let probed = self.engine.tt.probe(hash);
        if !root {
            if let Some(entry) = probed {
                if entry.depth >= depth
                    && entry.score.abs() < MATE_BOUND
                    && entry.bound.allows_cutoff(entry.score, alpha, beta)
                {
                    return Ok(entry.score);
                }
            }
        }

        let in_check = self.pos.is_in_check();
        if in_check && self.engine.config.check_extension {
            depth += 1;
        }

        let quiescence = depth <= 0;
        let mut best_score = NO_SCORE;
        if quiescence {
            let stand_pat = self.engine.evaluator.evaluate(&*self.pos);
            if !self.engine.config.quiescence {
                return Ok(stand_pat);
            }
            best_score = stand_pat;
            alpha = alpha.max(stand_pat);
            if alpha >= beta {
                return Ok(alpha);
            }
        } else if !in_check && beta == alpha + 1 && self.engine.config.forward_pruning {
            if let Some(score) = self.forward_prune(ply, depth, alpha, beta, null_ok)? {
                return Ok(score);
            }
        }

        let tt_move = probed.and_then(|entry| entry.mv);
        let mut moves = Vec::with_capacity(48);
        self.pos.generate_moves(quiescence && !in_check, &mut moves);
        {
            let ctx = OrderingContext {
                tt_move,
                killer: self.engine.killers.get(ply),
                history: &self.engine.history,
                parity: parity(ply),
            };
            let pos = &*self.pos;
            order_moves(&ctx, &mut moves, |mv| (P::move_key(mv), pos.move_traits(mv)));
        }

        let mut bound = Bound::Upper;
        let mut best_move = tt_move;

        for (index, &mv) in moves.iter().enumerate() {
            self.pos.make_move(mv);
            let searched = self.search_move(ply, depth, alpha, beta, index, quiescence);
            self.pos.undo_move();
            let score = searched?;

            if depth > TIME_CHECK_MIN_DEPTH && self.out_of_time() {
                return Err(Aborted);
            }

            best_score = best_score.max(score);
            if score > alpha {
                alpha = score;
                bound = Bound::Exact;
                best_move = Some(P::move_key(mv));
                if root {
                    self.root_best = Some(mv);
                }
            }

            if alpha >= beta {
                bound = Bound::Lower;
                let traits = self.pos.move_traits(mv);
                if traits.is_quiet() {
                    self.engine.killers.record(ply, P::move_key(mv));
                    self.engine
                        .history
                        .reward(parity(ply), traits.target, traits.piece, depth);
                }
                break;
            }
        }

        if best_score == NO_SCORE {
            // No stand-pat and nothing to play: mated or stalemated.
            return Ok(if in_check { ply as i32 - MATE } else { DRAW });
        }

        self.engine.tt.store(hash, best_score, depth, best_move, bound);
        Ok(best_score)
    }

    /// Whether the `index`-th move is first probed at reduced depth.
    #[inline]
    fn reduces_late_move(&self, index: usize, depth: i32) -> bool {
        self.engine.config.late_move_reductions && index + 1 > LMR_MIN_MOVES && depth > 1
    }

    /// Searches the move just made, the `index`-th in order. The first move
    /// and every quiescence move get the full window; later moves are
    /// scouted with a null window and re-searched only if they might
    /// improve alpha.
    fn search_move(
        &mut self,
        ply: usize,
        depth: i32,
        alpha: i32,
        beta: i32,
        index: usize,
        quiescence: bool,
    ) -> NodeResult {
        let child = ply + 1;
        if index == 0 || quiescence {
            return Ok(-self.negascout(child, depth - 1, -beta, -alpha, true)?);
        }

        let scout = alpha + 1;
        let mut score = scout;
        if self.reduces_late_move(index, depth) {
            score = -self.negascout(child, depth - LMR_DEPTH_DECREMENT, -scout, -alpha, true)?;
        }
        if alpha < score {
            score = -self.negascout(child, depth - 1, -scout, -alpha, true)?;
        }
        if alpha < score && score < beta {
            score = -self.negascout(child, depth - 1, -beta, -alpha, true)?;
        }
        Ok(score)
    }
}

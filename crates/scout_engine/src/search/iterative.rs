//! Iterative deepening search
//!
//! Implements iterative deepening with aspiration windows: each finished
//! iteration narrows the next one's window around its score, and a score
//! that lands outside the window repeats the same depth with the full window.
//! Time management works on two levels. Nodes abort once the per-move limit
//! is reached, and no new iteration starts after a fixed fraction of it.

use super::negascout::{Deadline, Search};
use super::ordering::{order_moves, parity, OrderingContext};
use super::{Engine, SearchReport};
use crate::clock::Clock;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::position::Position;
use crate::types::Aborted;
use instant::Instant;
use tracing::{debug, info, warn};

/// Milliseconds one move may take: a fixed share of the smaller of the
/// remaining time and two thirds of the starting allocation.
pub fn time_limit_ms(initial_ms: u64, remaining_ms: u64, divisor: u64) -> u64 {
    (initial_ms.saturating_mul(2) / 3).min(remaining_ms) / divisor.max(1)
}

impl Engine {
    /// Picks a move for the side to move within the clock's budget.
    ///
    /// Keeps the transposition table and killer moves from earlier calls;
    /// resets history scores.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMoves`] if the side to move is mated or
    /// stalemated.
    pub fn think<P, C>(&mut self, pos: &mut P, clock: &C) -> EngineResult<SearchReport<P::Move>>
    where
        P: Position,
        C: Clock,
    {
        let mut root_moves = Vec::new();
        pos.generate_moves(false, &mut root_moves);
        if root_moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let limit_ms = time_limit_ms(
            clock.initial_ms(),
            clock.remaining_ms(),
            self.config.time_divisor,
        );
        let early_stop_ms = self.config.early_stop_fraction * limit_ms as f32;
        let max_depth = self.config.max_depth;
        let margin = self.config.aspiration_margin;
        self.history.clear();
        self.nodes = 0;

        let mut depth = self.config.start_depth.min(max_depth);
        let mut score = DRAW;
        let mut reached = 0;
        let root_best = {
            let deadline = Deadline {
                clock,
                limit_ms,
            };
            let mut search = Search::new(self, pos, Some(deadline));
            let (mut alpha, mut beta) = (-INFINITY, INFINITY);

            while depth <= max_depth {
                let outcome = search.negascout(0, depth, alpha, beta, true);
                let elapsed_ms = clock.elapsed_ms();
                match outcome {
                    Ok(result) => {
                        debug!(
                            depth,
                            score = result,
                            alpha,
                            beta,
                            nodes = search.engine.nodes,
                            elapsed_ms,
                            best = ?search.root_best,
                            "iteration finished"
                        );
                        score = result;
                        if alpha < result && result < beta {
                            alpha = result - margin;
                            beta = result + margin;
                            reached = depth;
                            depth += 1;
                        } else {
                            alpha = -INFINITY;
                            beta = INFINITY;
                        }
                    }
                    Err(Aborted) => {
                        debug!(
                            depth,
                            nodes = search.engine.nodes,
                            elapsed_ms,
                            best = ?search.root_best,
                            "iteration abandoned on time"
                        );
                        break;
                    }
                }

                if elapsed_ms as f32 > early_stop_ms {
                    break;
                }
            }
            search.root_best
        };

        let best_move = match root_best {
            Some(mv) => mv,
            None => {
                let fallback = self
                    .first_ordered_move(pos, root_moves)
                    .ok_or(EngineError::NoLegalMoves)?;
                warn!(?fallback, "no root move finished; playing first ordered move");
                fallback
            }
        };

        let report = SearchReport {
            best_move,
            score,
            depth: reached,
            nodes: self.nodes,
            elapsed_ms: clock.elapsed_ms(),
            time_limit_ms: Some(limit_ms),
            hashfull: self.tt.hashfull(),
        };
        info!(
            best = ?report.best_move,
            score = report.score,
            depth = report.depth,
            nodes = report.nodes,
            elapsed_ms = report.elapsed_ms,
            limit_ms,
            "move chosen"
        );
        Ok(report)
    }

    /// Searches exactly `depth` plies with the full window and no time limit.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMoves`] if the side to move is mated or
    /// stalemated.
    pub fn search_depth<P: Position>(
        &mut self,
        pos: &mut P,
        depth: i32,
    ) -> EngineResult<SearchReport<P::Move>> {
        let mut root_moves = Vec::new();
        pos.generate_moves(false, &mut root_moves);
        if root_moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let started = Instant::now();
        self.history.clear();
        self.nodes = 0;

        let (outcome, root_best) = {
            let mut search = Search::new(self, pos, None);
            let outcome = search.negascout(0, depth, -INFINITY, INFINITY, true);
            (outcome, search.root_best)
        };
        // Without a deadline nothing can abort.
        let score = outcome.unwrap_or(DRAW);
        let best_move = match root_best {
            Some(mv) => mv,
            None => self
                .first_ordered_move(pos, root_moves)
                .ok_or(EngineError::NoLegalMoves)?,
        };
        debug!(depth, score, nodes = self.nodes, best = ?best_move, "fixed-depth search finished");

        Ok(SearchReport {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            elapsed_ms: started.elapsed().as_millis() as u64,
            time_limit_ms: None,
            hashfull: self.tt.hashfull(),
        })
    }

    /// The root move the search would have tried first.
    fn first_ordered_move<P: Position>(&self, pos: &P, mut moves: Vec<P::Move>) -> Option<P::Move> {
        let tt_move = self.tt.probe(pos.hash()).and_then(|entry| entry.mv);
        let ctx = OrderingContext {
            tt_move,
            killer: self.killers.get(0),
            history: &self.history,
            parity: parity(0),
        };
        order_moves(&ctx, &mut moves, |mv| (P::move_key(mv), pos.move_traits(mv)));
        moves.first().copied()
    }
}

//! Principal variation search with iterative deepening
//!
//! This module implements the move search:
//! - NegaScout (principal variation search) over the [`Position`] trait
//! - Quiescence extension at the horizon
//! - Forward pruning by quiescence extrapolation and null moves
//! - Late move reductions
//! - Transposition table, killer and history move ordering
//! - Iterative deepening with aspiration windows under a time budget
//!
//! ## Module Organization
//!
//! - `negascout` - Recursive node search
//! - `pruning` - Extrapolation and null-move cutoffs
//! - `ordering` - Killer/history tables and the move sort key
//! - `iterative` - Time allocation and the deepening loop (`Engine::think`)

mod iterative;
mod negascout;
pub mod ordering;
mod pruning;

use crate::constants::*;
use crate::error::EngineResult;
use crate::evaluation::Evaluator;
use crate::hash::TranspositionTable;
use crate::position::Position;
use ordering::{HistoryTable, KillerTable};
use tracing::trace;

pub use iterative::time_limit_ms;

/// Tuning knobs and feature switches.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// log2 of the transposition table slot count.
    pub tt_slots_log2: u32,
    /// Deepest iteration the driver will start.
    pub max_depth: i32,
    /// First iteration depth.
    pub start_depth: i32,
    /// Share of the move budget spent per move is `1 / time_divisor`.
    pub time_divisor: u64,
    /// No new iteration starts once this fraction of the limit has elapsed.
    pub early_stop_fraction: f32,
    /// Half-width of the aspiration window around the previous score.
    pub aspiration_margin: i32,
    /// Extend the horizon with a capture search.
    pub quiescence: bool,
    /// Search one ply deeper when in check.
    pub check_extension: bool,
    /// Quiescence extrapolation and null-move pruning.
    pub forward_pruning: bool,
    /// Reduced-depth probes for late moves.
    pub late_move_reductions: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tt_slots_log2: DEFAULT_TT_SLOTS_LOG2,
            max_depth: MAX_DEPTH,
            start_depth: START_DEPTH,
            time_divisor: TIME_DIVISOR,
            early_stop_fraction: EARLY_STOP_FRACTION,
            aspiration_margin: ASPIRATION_MARGIN,
            quiescence: true,
            check_extension: true,
            forward_pruning: true,
            late_move_reductions: true,
        }
    }
}

impl EngineConfig {
    /// Plain alpha-beta: every selective feature off. Scores then equal
    /// full-width negamax to the same depth.
    pub fn exhaustive() -> Self {
        Self {
            quiescence: false,
            check_extension: false,
            forward_pruning: false,
            late_move_reductions: false,
            ..Self::default()
        }
    }
}

/// Outcome of one `think` or `search_depth` call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<M> {
    pub best_move: M,
    /// Score of the last finished iteration, side to move's view.
    pub score: i32,
    /// Deepest iteration that finished inside its window.
    pub depth: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
    /// Per-move limit; `None` for fixed-depth searches.
    pub time_limit_ms: Option<u64>,
    /// Transposition table occupancy in per-mille.
    pub hashfull: usize,
}

/// Whether `score` reports a forced mate for either side.
pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_BOUND
}

/// Full moves until mate for a mate score, negative when the side to move
/// is getting mated.
pub fn mate_in(score: i32) -> Option<i32> {
    if !is_mate_score(score) {
        return None;
    }
    let plies = MATE - score.abs();
    let moves = (plies + 1) / 2;
    Some(if score > 0 { moves } else { -moves })
}

/// Search engine and all state that lives longer than one search.
///
/// The transposition table and killer moves carry over between `think`
/// calls; history scores are reset at the start of each one.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    tt: TranspositionTable,
    killers: KillerTable,
    history: HistoryTable,
    evaluator: Evaluator,
    nodes: u64,
}

impl Engine {
    /// Builds an engine and allocates its transposition table.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTableSize`] if `tt_slots_log2` is out of range.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        // Shift overflow becomes zero slots, which the table rejects.
        let slots = 1usize.checked_shl(config.tt_slots_log2).unwrap_or(0);
        let tt = TranspositionTable::new(slots)?;
        trace!(
            slots = tt.capacity(),
            bytes = tt.size_bytes(),
            "allocated transposition table"
        );

        Ok(Self {
            config,
            tt,
            killers: KillerTable::default(),
            history: HistoryTable::default(),
            evaluator: Evaluator::new(),
            nodes: 0,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forgets everything learned so far: transposition entries, killers
    /// and history.
    pub fn new_game(&mut self) {
        self.tt.clear();
        self.killers.clear();
        self.history.clear();
    }

    /// Static evaluation of `pos` for the side to move.
    pub fn evaluate<P: Position>(&self, pos: &P) -> i32 {
        self.evaluator.evaluate(pos)
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

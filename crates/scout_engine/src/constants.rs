//! # Search & Evaluation Constants
//!
//! Every tuned number the engine uses lives here. Scores are in centipawns
//! from the point of view of the side to move.
//!
//! ## Score Bands
//!
//! ```text
//!   -INFINITY          -MATE            -MATE_BOUND      0      MATE_BOUND          MATE          INFINITY
//!   -66_666  ........  -33_333  .....   -30_000  ......  0  ...  30_000  ......   33_333  ......   66_666
//! ```
//!
//! A position where the side to move is mated `ply` plies from the root scores
//! `ply - MATE`, so a shallower mate is always preferred by the winner and
//! postponed by the loser. Anything beyond `MATE_BOUND` is a mate score and is
//! never used for a transposition cutoff, because the stored value depends on
//! the ply at which it was found.
//!
//! ## Tuning Provenance
//!
//! The margins (68/87), the null-move reduction (`3 + depth / 4`), the time
//! divisor (14) and the early-stop fraction (0.34) were found by black-box
//! match testing against other small engines. Changing one of them usually
//! shifts the optimum of the others.

/// Upper bound of any score, used as the open aspiration window.
pub const INFINITY: i32 = 66_666;

/// Mate score at ply zero.
pub const MATE: i32 = 33_333;

/// Scores with a larger magnitude encode a forced mate.
pub const MATE_BOUND: i32 = 30_000;

/// Score of a repetition or stalemate.
pub const DRAW: i32 = 0;

/// Initial best score of a node; a node that still holds it searched nothing.
pub const NO_SCORE: i32 = -666_666;

/// Hard limit on the iterative deepening depth.
pub const MAX_DEPTH: i32 = 66;

/// First depth searched by the iterative deepening driver.
pub const START_DEPTH: i32 = 2;

/// Capacity of the killer table. Plies beyond it simply have no killer.
pub const MAX_PLY: usize = 1_000;

/// Half-width of the aspiration window around the previous iteration's score.
pub const ASPIRATION_MARGIN: i32 = 10;

/// Divisor applied to the usable clock to get the per-move allocation.
pub const TIME_DIVISOR: u64 = 14;

/// Do not start another iteration once this fraction of the allocation is gone.
pub const EARLY_STOP_FRACTION: f32 = 0.34;

/// Default transposition table size as a power of two (entries).
pub const DEFAULT_TT_SLOTS_LOG2: u32 = 20;

/// Largest accepted transposition table size as a power of two.
pub const MAX_TT_SLOTS_LOG2: u32 = 30;

/// Depth-extrapolated cutoff is only tried this far from the root.
pub const EXTRAPOLATION_MIN_PLY: usize = 3;

/// Per-depth margin below beta for the extrapolated fail-high test.
pub const EXTRAPOLATION_HIGH_MARGIN: i32 = 68;

/// Per-depth margin above alpha for the extrapolated fail-low test.
pub const EXTRAPOLATION_LOW_MARGIN: i32 = 87;

/// Constant part of the null-move depth reduction.
pub const NULL_MOVE_BASE_REDUCTION: i32 = 3;

/// Remaining depth is divided by this for the growing part of the reduction.
pub const NULL_MOVE_DEPTH_DIVISOR: i32 = 4;

/// Moves tried before late-move reductions kick in.
pub const LMR_MIN_MOVES: usize = 5;

/// Depth decrement of a late-move reduced probe (normal decrement is 1).
pub const LMR_DEPTH_DECREMENT: i32 = 3;

/// Clock is polled only at nodes with more remaining depth than this.
pub const TIME_CHECK_MIN_DEPTH: i32 = 2;

/// Sort key of the transposition table move.
pub const TT_MOVE_KEY: i32 = -1_000_000_000;

/// Weight of the captured piece kind in a capture's sort key.
pub const CAPTURE_VICTIM_WEIGHT: i32 = -10_000_000;

/// Sort key of the killer move.
pub const KILLER_KEY: i32 = -1_000_000;

/// Phase weight reached with all minor and major pieces on the board.
pub const MAX_PHASE: i32 = 24;

//! # Core Types
//!
//! Small value types shared by the evaluator, the move ordering heuristics and
//! the search. None of them know anything about chess rules; the rules live
//! behind the [`Position`](crate::position::Position) trait.

use std::fmt;

/// Side to move. The discriminant doubles as the "parity" index used by the
/// history table and as the row index of the evaluation mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The six piece kinds, numbered in ascending value order.
///
/// [`PieceKind::rank`] (pawn = 1 … king = 6) is the number MVV-LVA ordering
/// multiplies; [`PieceKind::index`] (pawn = 0 … king = 5) addresses tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn rank(self) -> i32 {
        self as i32 + 1
    }

    /// Contribution to the game phase (0 = bare kings and pawns, 24 = full set).
    #[inline]
    pub fn phase_weight(self) -> i32 {
        match self {
            PieceKind::Knight | PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Queen => 4,
            PieceKind::Pawn | PieceKind::King => 0,
        }
    }
}

/// How a stored score relates to the true value of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// Score is the exact minimax value at the stored depth.
    Exact,
    /// A move reached beta; the true value is at least the score.
    Lower,
    /// No move raised alpha; the true value is at most the score.
    #[default]
    Upper,
}

impl Bound {
    /// Whether a stored score with this bound settles a node searched with
    /// the window `(alpha, beta)`.
    #[inline]
    pub fn allows_cutoff(self, score: i32, alpha: i32, beta: i32) -> bool {
        match self {
            Bound::Exact => true,
            Bound::Lower => score >= beta,
            Bound::Upper => score <= alpha,
        }
    }
}

/// What the move ordering heuristics need to know about a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTraits {
    /// Kind of the moving piece.
    pub piece: PieceKind,
    /// Destination square, 0 = a1 … 63 = h8.
    pub target: u8,
    /// Kind of the captured piece, if any.
    pub captured: Option<PieceKind>,
    /// Kind the piece promotes to, if any.
    pub promotion: Option<PieceKind>,
}

impl MoveTraits {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Quiet moves are the ones killers and history remember: no capture and
    /// no promotion to a queen.
    #[inline]
    pub fn is_quiet(&self) -> bool {
        !self.is_capture() && self.promotion != Some(PieceKind::Queen)
    }
}

/// Marker returned up the recursion when the clock ran out mid-search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

impl fmt::Display for Aborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("search aborted on time")
    }
}

/// Score of a node, or [`Aborted`] if the search ran out of time.
pub type NodeResult = Result<i32, Aborted>;

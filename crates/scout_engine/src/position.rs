//! Position provider interface
//!
//! The engine searches through this trait and never touches chess rules
//! directly. An implementation owns the board, generates legal moves, applies
//! and reverts them, and answers the check, repetition and occupancy queries
//! the search and evaluation need.
//!
//! Every `make_move` / `make_null_move` the engine performs is matched by an
//! `undo_move` / `undo_null_move` before the engine returns, on every path.

use crate::types::{MoveTraits, PieceKind, Side};

/// A game position the engine can search.
pub trait Position {
    /// Move type of the provider. Must be cheap to copy.
    type Move: Copy + Eq + std::fmt::Debug;

    /// 64-bit fingerprint of the current position.
    fn hash(&self) -> u64;

    /// Side to move.
    fn side_to_move(&self) -> Side;

    /// Legal moves in the current position, appended to `out` (which the
    /// caller clears). With `noisy_only` set, only captures are produced.
    fn generate_moves(&self, noisy_only: bool, out: &mut Vec<Self::Move>);

    /// Applies a legal move.
    fn make_move(&mut self, mv: Self::Move);

    /// Reverts the most recent `make_move`.
    fn undo_move(&mut self);

    /// Passes the turn. Returns `false` and leaves the position untouched when
    /// passing is impossible (side to move in check).
    fn make_null_move(&mut self) -> bool;

    /// Reverts the most recent successful `make_null_move`.
    fn undo_null_move(&mut self);

    /// Whether the side to move is in check.
    fn is_in_check(&self) -> bool;

    /// Whether the current position already occurred earlier in the game or
    /// the current search line.
    fn is_repetition(&self) -> bool;

    /// Occupancy bitboard of one piece kind of one side (bit 0 = a1).
    fn pieces(&self, side: Side, kind: PieceKind) -> u64;

    /// Ordering-relevant facts about a legal move.
    fn move_traits(&self, mv: Self::Move) -> MoveTraits;

    /// Compact identity of a move, stored in transposition entries and the
    /// killer table. Distinct legal moves of one position must get distinct keys.
    fn move_key(mv: Self::Move) -> u16;
}

//! Move ordering for alpha-beta pruning
//!
//! Orders moves so the likely best ones are searched first. Every move gets a
//! single integer key and the list is sorted ascending:
//!
//! 1. the transposition table move,
//! 2. captures, most valuable victim first, cheapest attacker breaking ties,
//! 3. the killer move of this ply,
//! 4. everything else by history score.

use crate::constants::{CAPTURE_VICTIM_WEIGHT, KILLER_KEY, MAX_PLY, TT_MOVE_KEY};
use crate::types::{MoveTraits, PieceKind};

/// Quiet move per ply that most recently caused a beta cutoff.
#[derive(Debug, Clone)]
pub struct KillerTable {
    moves: Vec<Option<u16>>,
}

impl Default for KillerTable {
    fn default() -> Self {
        Self {
            moves: vec![None; MAX_PLY],
        }
    }
}

impl KillerTable {
    #[inline]
    pub fn get(&self, ply: usize) -> Option<u16> {
        self.moves.get(ply).copied().flatten()
    }

    #[inline]
    pub fn record(&mut self, ply: usize, key: u16) {
        if let Some(slot) = self.moves.get_mut(ply) {
            *slot = Some(key);
        }
    }

    pub fn clear(&mut self) {
        self.moves.fill(None);
    }
}

/// Cutoff statistics per (side parity, target square, moving piece kind).
///
/// Scores only go down: the more often a quiet move refutes, the more
/// negative its entry and the earlier it is tried.
#[derive(Debug, Clone)]
pub struct HistoryTable {
    scores: [[[i32; 6]; 64]; 2],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self {
            scores: [[[0; 6]; 64]; 2],
        }
    }
}

impl HistoryTable {
    #[inline]
    pub fn get(&self, parity: usize, target: u8, piece: PieceKind) -> i32 {
        self.scores[parity & 1][target as usize & 63][piece.index()]
    }

    /// Rewards a quiet cutoff found with `depth` plies remaining.
    #[inline]
    pub fn reward(&mut self, parity: usize, target: u8, piece: PieceKind, depth: i32) {
        let entry = &mut self.scores[parity & 1][target as usize & 63][piece.index()];
        *entry = entry.saturating_sub(depth.saturating_mul(depth));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parity index the history table is keyed by.
///
/// Plies of equal parity always have the same side to move, so the ply is
/// enough to tell the sides apart within one search.
#[inline]
pub fn parity(ply: usize) -> usize {
    ply % 2
}

/// Everything the key function needs to know about the node being ordered.
#[derive(Debug, Clone, Copy)]
pub struct OrderingContext<'a> {
    pub tt_move: Option<u16>,
    pub killer: Option<u16>,
    pub history: &'a HistoryTable,
    pub parity: usize,
}

/// Sort key of a single move; lower is searched earlier.
pub fn move_key(ctx: &OrderingContext<'_>, key: u16, traits: &MoveTraits) -> i32 {
    if ctx.tt_move == Some(key) {
        return TT_MOVE_KEY;
    }
    if let Some(victim) = traits.captured {
        return CAPTURE_VICTIM_WEIGHT * victim.rank() + traits.piece.rank();
    }
    if ctx.killer == Some(key) {
        return KILLER_KEY;
    }
    // A hot enough history entry must never overtake the killer.
    ctx.history
        .get(ctx.parity, traits.target, traits.piece)
        .max(KILLER_KEY + 1)
}

/// Sorts `moves` in search order. `describe` yields each move's identity key
/// and traits. Only the order changes; no move is added or dropped.
pub fn order_moves<M, F>(ctx: &OrderingContext<'_>, moves: &mut Vec<M>, describe: F)
where
    M: Copy,
    F: Fn(M) -> (u16, MoveTraits),
{
    let mut keyed: Vec<(i32, M)> = moves
        .iter()
        .map(|&mv| {
            let (key, traits) = describe(mv);
            (move_key(ctx, key, &traits), mv)
        })
        .collect();

    keyed.sort_by_key(|&(key, _)| key);

    moves.clear();
    moves.extend(keyed.into_iter().map(|(_, mv)| mv));
}

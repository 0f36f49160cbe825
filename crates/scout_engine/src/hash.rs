//! Transposition table
//!
//! Direct-mapped cache from position hash to the result of the last search of
//! that position. One entry per slot, addressed by the low bits of the hash;
//! a store always replaces whatever the slot held. A probe only returns an
//! entry whose full 64-bit hash matches, so a collision costs a lost entry but
//! never hands back another position's data.

use crate::error::{EngineError, EngineResult};
use crate::types::Bound;

/// One cached search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub hash: u64,
    pub score: i32,
    pub depth: i32,
    pub mv: Option<u16>,
    pub bound: Bound,
}

/// Fixed-size, always-overwrite transposition table.
pub struct TranspositionTable {
    slots: Box<[TtEntry]>,
    mask: u64,
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl TranspositionTable {
    /// Allocates a table with `slots` entries. `slots` must be a power of two.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTableSize`] for zero, non-power-of-two
    /// or oversized slot counts.
    pub fn new(slots: usize) -> EngineResult<Self> {
        if !slots.is_power_of_two() || slots > 1 << crate::constants::MAX_TT_SLOTS_LOG2 {
            return Err(EngineError::InvalidTableSize { slots });
        }

        Ok(Self {
            slots: vec![TtEntry::default(); slots].into_boxed_slice(),
            mask: slots as u64 - 1,
        })
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Approximate memory footprint in bytes.
    pub fn size_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<TtEntry>()
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash & self.mask) as usize
    }

    /// Entry stored for `hash`, if its slot still holds that position.
    #[inline]
    pub fn probe(&self, hash: u64) -> Option<TtEntry> {
        let entry = self.slots[self.index(hash)];
        (entry.hash == hash && entry.depth != EMPTY_DEPTH).then_some(entry)
    }

    /// Overwrites the slot addressed by `hash`.
    #[inline]
    pub fn store(&mut self, hash: u64, score: i32, depth: i32, mv: Option<u16>, bound: Bound) {
        let index = self.index(hash);
        self.slots[index] = TtEntry {
            hash,
            score,
            depth,
            mv,
            bound,
        };
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.slots.fill(TtEntry::default());
    }

    /// Per-mille of slots in use, sampled over the first thousand slots.
    pub fn hashfull(&self) -> usize {
        let sample = self.slots.len().min(1_000);
        let used = self.slots[..sample]
            .iter()
            .filter(|entry| entry.depth != EMPTY_DEPTH)
            .count();
        used * 1_000 / sample
    }
}

/// Depth marker of a never-written slot.
///
/// A default entry has hash 0 and this depth; real entries are stored with
/// the node's remaining depth, which is always greater.
const EMPTY_DEPTH: i32 = i32::MIN;

impl Default for TtEntry {
    fn default() -> Self {
        Self {
            hash: 0,
            score: 0,
            depth: EMPTY_DEPTH,
            mv: None,
            bound: Bound::Upper,
        }
    }
}

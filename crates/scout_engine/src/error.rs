//! Error types for the search engine
//!
//! The search itself never fails: timeouts, mates and table collisions are
//! ordinary outcomes. Errors only arise at the edges, when the host hands the
//! engine a bad configuration, an unreadable position or an illegal move.

use thiserror::Error;

/// Errors that can occur while configuring or driving the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Transposition table slot count is not a usable power of two
    #[error("Invalid transposition table size: {slots} slots (must be a power of two between 1 and 2^30)")]
    InvalidTableSize { slots: usize },

    /// FEN string could not be parsed
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// FEN parsed but describes a position that cannot occur
    #[error("Illegal position: {reason}")]
    IllegalPosition { reason: String },

    /// Move text is not valid UCI notation
    #[error("Invalid move notation: {uci}")]
    InvalidMove { uci: String },

    /// Move is well-formed but not legal in the current position
    #[error("Illegal move in current position: {uci}")]
    IllegalMove { uci: String },

    /// Side to move is mated or stalemated; there is nothing to search
    #[error("No legal moves in the root position")]
    NoLegalMoves,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

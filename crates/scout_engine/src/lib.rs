//! # Scout Engine
//!
//! Single-threaded chess move search: iterative deepening NegaScout with a
//! transposition table, quiescence, null-move and extrapolation pruning, late
//! move reductions, killer/history ordering and a tapered piece-square
//! evaluation.
//!
//! The engine only talks to the game through two traits: [`Position`] for
//! the board and its rules, and [`Clock`] for time. [`ChessPosition`] is a
//! ready-made [`Position`] for standard chess.
//!
//! ## Module Organization
//!
//! - `search` - [`Engine`], iterative deepening, node search and move ordering
//! - `evaluation` - Piece-square table decoding and static evaluation
//! - `hash` - Transposition table
//! - `position` - The [`Position`] trait the search runs on
//! - `board` - [`ChessPosition`], a `shakmaty`-backed [`Position`]
//! - `clock` - The [`Clock`] trait and the wall-clock [`GameClock`]
//! - `types` - Small shared value types
//! - `constants` - Scores, depths and tuned margins
//! - `error` - [`EngineError`]
//!
//! ## Example
//!
//! ```no_run
//! use scout_engine::{ChessPosition, Engine, EngineConfig, GameClock};
//! use std::time::Duration;
//!
//! let mut engine = Engine::new(EngineConfig::default())?;
//! let mut pos = ChessPosition::default();
//! let clock = GameClock::fresh(Duration::from_secs(60));
//! let report = engine.think(&mut pos, &clock)?;
//! println!("{}", ChessPosition::move_to_uci(report.best_move));
//! # Ok::<(), scout_engine::EngineError>(())
//! ```

pub mod board;
pub mod clock;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod position;
pub mod search;
pub mod types;

pub use board::ChessPosition;
pub use clock::{Clock, GameClock};
pub use error::{EngineError, EngineResult};
pub use evaluation::Evaluator;
pub use position::Position;
pub use search::{is_mate_score, mate_in, Engine, EngineConfig, SearchReport};
pub use types::{Bound, MoveTraits, PieceKind, Side};

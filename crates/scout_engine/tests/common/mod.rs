//! Shared fixtures for the integration tests

#![allow(dead_code)]

use scout_engine::constants::MATE;
use scout_engine::{ChessPosition, Clock, Engine, EngineConfig, Evaluator, Position};
use std::cell::Cell;

pub const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
pub const ITALIAN: &str = "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
pub const ROOK_ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
pub const PROMOTION_RACE: &str = "8/P5k1/8/8/8/8/6Kp/8 w - - 0 1";
pub const TACTICAL: &str = "r2q1rk1/ppp2ppp/2n1bn2/3pp3/1bPP4/2N1PN2/PP1BBPPP/R2QK2R w KQ - 0 8";

/// Positions with varied material, castling rights and pawn structure.
pub const FIXTURES: [&str; 6] = [START, KIWIPETE, ITALIAN, ROOK_ENDGAME, PROMOTION_RACE, TACTICAL];

pub fn position(fen: &str) -> ChessPosition {
    ChessPosition::from_fen(fen).unwrap()
}

/// Engine with a small table so tests stay fast.
pub fn engine(config: EngineConfig) -> Engine {
    Engine::new(EngineConfig {
        tt_slots_log2: 16,
        ..config
    })
    .unwrap()
}

/// Deterministic clock: every `elapsed_ms` query advances time by `step_ms`.
///
/// Search effort then depends only on how often the engine polls, so runs
/// are reproducible.
#[derive(Debug)]
pub struct StepClock {
    elapsed: Cell<u64>,
    step_ms: u64,
    initial_ms: u64,
    remaining_ms: u64,
}

impl StepClock {
    pub fn new(initial_ms: u64, remaining_ms: u64, step_ms: u64) -> Self {
        Self {
            elapsed: Cell::new(0),
            step_ms,
            initial_ms,
            remaining_ms,
        }
    }

    /// Number of polls so far, assuming a step of one.
    pub fn polls(&self) -> u64 {
        self.elapsed.get() / self.step_ms.max(1)
    }
}

impl Clock for StepClock {
    fn elapsed_ms(&self) -> u64 {
        let now = self.elapsed.get();
        self.elapsed.set(now + self.step_ms);
        now
    }

    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    fn initial_ms(&self) -> u64 {
        self.initial_ms
    }
}

/// Plain full-width negamax with the same leaf evaluation and terminal
/// scores as the engine.
pub fn negamax(pos: &mut ChessPosition, evaluator: &Evaluator, ply: i32, depth: i32) -> i32 {
    if depth == 0 {
        return evaluator.evaluate(pos);
    }
    let mut moves = Vec::new();
    pos.generate_moves(false, &mut moves);
    if moves.is_empty() {
        return if pos.is_in_check() { ply - MATE } else { 0 };
    }
    let mut best = i32::MIN;
    for mv in moves {
        pos.make_move(mv);
        let score = -negamax(pos, evaluator, ply + 1, depth - 1);
        pos.undo_move();
        best = best.max(score);
    }
    best
}

/// Plays `count` pseudo-random legal moves chosen by `picks`, stopping
/// early if the game ends.
pub fn play_random(pos: &mut ChessPosition, picks: &[usize]) {
    let mut moves = Vec::new();
    for &pick in picks {
        moves.clear();
        pos.generate_moves(false, &mut moves);
        if moves.is_empty() {
            break;
        }
        pos.make_move(moves[pick % moves.len()]);
    }
}
